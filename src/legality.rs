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

//! Legality filtering by make/unmake: a pseudo-legal move is legal iff,
//! after playing it, the mover's own king is not attacked. Castling's
//! transit-safety check already rules out castling through or into check,
//! so this filter is what catches everything else — pins, moving a checked
//! king anywhere but out of check, and failing to block/capture a checker.

use alloc::vec::Vec;

use crate::attack_query::is_attacked;
use crate::board::Board;
use crate::movegen::generate_pseudo_legal_moves;
use crate::moves::Move;

#[must_use]
pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
  let side = board.side_to_move();
  let mut legal = Vec::with_capacity(48);

  for mv in generate_pseudo_legal_moves(board) {
    let mut board = *board;
    let undo = board.make_move(mv);
    let king_square = board.king_square(side);
    let left_king_in_check = match king_square {
      Some(square) => is_attacked(&board, square, !side),
      None => false,
    };
    if !left_king_in_check {
      legal.push(mv);
    }
    board.unmake_move(mv, undo);
  }

  legal
}

#[must_use]
pub fn is_in_check(board: &Board) -> bool {
  let side = board.side_to_move();
  match board.king_square(side) {
    Some(square) => is_attacked(board, square, !side),
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::moves::algebraic_to_square;

  fn sq(s: &str) -> u8 {
    algebraic_to_square(s).unwrap()
  }

  #[test]
  fn starting_position_has_twenty_legal_moves() {
    let board = Board::starting_position();
    assert_eq!(generate_legal_moves(&board).len(), 20);
  }

  #[test]
  fn pinned_bishop_has_no_legal_moves() {
    // White king e1, white bishop e2, black rook e8: the bishop only moves
    // diagonally, so a pin along the e-file immobilizes it completely.
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let moves = generate_legal_moves(&board);
    let e2 = sq("e2");
    assert!(moves.iter().all(|m| m.from_square() != e2));
  }

  #[test]
  fn king_in_check_must_resolve_it() {
    // White king on e1 in check from a black rook on e8; only moves that
    // escape, block, or capture the check survive filtering.
    let board = Board::from_fen("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = generate_legal_moves(&board);
    assert!(!moves.is_empty());
    for mv in &moves {
      let mut copy = board;
      let undo = copy.make_move(*mv);
      assert!(!is_attacked(&copy, copy.king_square(true).unwrap(), false));
      copy.unmake_move(*mv, undo);
    }
  }

  #[test]
  fn checkmate_position_has_no_legal_moves() {
    // Fool's mate.
    let board =
      Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert!(generate_legal_moves(&board).is_empty());
    assert!(is_in_check(&board));
  }

  #[test]
  fn stalemate_position_has_no_legal_moves_and_is_not_check() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(generate_legal_moves(&board).is_empty());
    assert!(!is_in_check(&board));
  }

  #[test]
  fn king_cannot_capture_a_defended_piece() {
    // Black pawn on d5 is defended by the rook on d8; the white king may not
    // capture it even though the pawn itself cannot recapture.
    let board = Board::from_fen("3r4/8/8/2Kp4/8/8/8/7k w - - 0 1").unwrap();
    let moves = generate_legal_moves(&board);
    let d5 = sq("d5");
    assert!(moves.iter().all(|m| m.to_square() != d5));
  }
}
