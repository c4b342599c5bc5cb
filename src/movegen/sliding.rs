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

//! Classical one-bitscan-per-ray destination-set computation for
//! rooks/bishops/queens, generalizing the same first-blocker technique the
//! attack query uses for single-square attack tests into full per-piece
//! move enumeration.

use alloc::vec::Vec;

use crate::attack_tables::{ASCENDING_DIRECTIONS, RAYS};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::{Move, MoveFlag};
use crate::piece::{Color, PieceType};

const ROOK_DIRECTION_SLOTS: [usize; 4] = [0, 1, 4, 5];
const BISHOP_DIRECTION_SLOTS: [usize; 4] = [2, 3, 6, 7];

pub(super) fn generate(board: &Board, side: Color, piece: PieceType, moves: &mut Vec<Move>) {
  let direction_slots: &[usize] = match piece {
    PieceType::Rook => &ROOK_DIRECTION_SLOTS,
    PieceType::Bishop => &BISHOP_DIRECTION_SLOTS,
    PieceType::Queen => {
      generate_in_directions(board, side, piece, &ROOK_DIRECTION_SLOTS, moves);
      generate_in_directions(board, side, piece, &BISHOP_DIRECTION_SLOTS, moves);
      return;
    }
    _ => return,
  };
  generate_in_directions(board, side, piece, direction_slots, moves);
}

fn generate_in_directions(
  board: &Board,
  side: Color,
  piece: PieceType,
  direction_slots: &[usize],
  moves: &mut Vec<Move>,
) {
  let occupied = board.occupied().raw();
  let own = board.color_bb(side).raw();
  let enemy = board.color_bb(!side).raw();

  for from in board.pieces_of(piece, side) {
    let mut destinations = 0u64;
    for &slot in direction_slots {
      let ray = RAYS[from as usize][slot];
      let blockers = occupied & ray;
      let reachable = if blockers == 0 {
        ray
      } else {
        let blocker_sq = if slot < ASCENDING_DIRECTIONS {
          blockers.trailing_zeros() as u8
        } else {
          63 - blockers.leading_zeros() as u8
        };
        // The ray up to and including the blocker: `RAYS[blocker_sq][slot]`
        // is everything strictly beyond the blocker in the same direction,
        // so subtracting it from the full ray leaves origin..=blocker.
        ray & !RAYS[blocker_sq as usize][slot]
      };
      destinations |= reachable;
    }
    destinations &= !own;
    for to in Bitboard::new(destinations) {
      let flag = if (enemy & (1u64 << to)) != 0 {
        MoveFlag::Capture
      } else {
        MoveFlag::QuietMove
      };
      moves.push(Move::new(from, to, flag));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::piece::WHITE;

  #[test]
  fn rook_on_open_board_has_fourteen_moves() {
    let board = Board::from_fen("8/8/8/8/3R4/8/8/k6K w - - 0 1").unwrap();
    let mut moves = Vec::new();
    generate(&board, WHITE, PieceType::Rook, &mut moves);
    assert_eq!(moves.len(), 14);
  }

  #[test]
  fn bishop_blocked_by_own_piece_stops_before_it() {
    let board = Board::from_fen("8/8/8/2P5/3B4/8/8/k6K w - - 0 1").unwrap();
    let mut moves = Vec::new();
    generate(&board, WHITE, PieceType::Bishop, &mut moves);
    let c5 = crate::moves::algebraic_to_square("c5").unwrap();
    assert!(moves.iter().all(|m| m.to_square() != c5));
  }

  #[test]
  fn bishop_captures_enemy_blocker_but_not_beyond() {
    let board = Board::from_fen("8/8/8/2p5/3B4/8/8/k6K w - - 0 1").unwrap();
    let mut moves = Vec::new();
    generate(&board, WHITE, PieceType::Bishop, &mut moves);
    let c5 = crate::moves::algebraic_to_square("c5").unwrap();
    let b6 = crate::moves::algebraic_to_square("b6").unwrap();
    assert!(moves.iter().any(|m| m.to_square() == c5 && m.is_capture()));
    assert!(moves.iter().all(|m| m.to_square() != b6));
  }

  #[test]
  fn queen_combines_rook_and_bishop_rays() {
    let board = Board::from_fen("8/8/8/8/3Q4/8/8/k6K w - - 0 1").unwrap();
    let mut moves = Vec::new();
    generate(&board, WHITE, PieceType::Queen, &mut moves);
    assert_eq!(moves.len(), 14 + 13);
  }
}
