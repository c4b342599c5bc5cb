/*
 * A high-performance chess library licensed under the LGPLv3.
 * Copyright (C) 2025 Clifton Toaster Reid
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Lesser General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public License
 * along with this library. If not, see <https://opensource.org/license/lgpl-3-0>.
 */

//! Pseudo-legal move generation. Per-piece generator functions push
//! straight into a caller-supplied `&mut Vec<Move>` so there is no
//! intermediate per-piece buffer; `generate_pseudo_legal_moves` is the only
//! entry point most callers need.

mod castling;
mod leapers;
mod pawn;
mod sliding;

use alloc::vec::Vec;

use crate::board::Board;
use crate::moves::Move;
use crate::piece::PieceType;

#[must_use]
pub fn generate_pseudo_legal_moves(board: &Board) -> Vec<Move> {
  let mut moves = Vec::with_capacity(48);
  let side = board.side_to_move();

  pawn::generate(board, side, &mut moves);
  leapers::generate_knight(board, side, &mut moves);
  leapers::generate_king(board, side, &mut moves);
  sliding::generate(board, side, PieceType::Bishop, &mut moves);
  sliding::generate(board, side, PieceType::Rook, &mut moves);
  sliding::generate(board, side, PieceType::Queen, &mut moves);
  castling::generate(board, side, &mut moves);

  moves
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::Board;

  #[test]
  fn starting_position_has_twenty_pseudo_legal_moves() {
    let board = Board::starting_position();
    let moves = generate_pseudo_legal_moves(&board);
    // 16 pawn moves (8 single + 8 double) + 4 knight moves.
    assert_eq!(moves.len(), 20);
  }
}
