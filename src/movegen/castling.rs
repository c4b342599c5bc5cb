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

use alloc::vec::Vec;

use crate::attack_query::is_attacked;
use crate::board::{
  Board, BLACK_KING_START, BLACK_KINGSIDE_KING_DEST, BLACK_QUEENSIDE_KING_DEST, WHITE_KING_START,
  WHITE_KINGSIDE_KING_DEST, WHITE_QUEENSIDE_KING_DEST,
};
use crate::moves::{Move, MoveFlag};
use crate::piece::Color;

pub(super) fn generate(board: &Board, side: Color, moves: &mut Vec<Move>) {
  let occupied = board.occupied();
  let king_square = if side { WHITE_KING_START } else { BLACK_KING_START };

  if board.king_square(side) != Some(king_square) {
    // A king that has moved off its home square (e.g. after being placed
    // there by a test FEN with no matching rights) can never castle.
    return;
  }

  if board.can_castle_kingside(side) {
    let transit = [king_square, king_square + 1, king_square + 2];
    if !occupied.contains(king_square + 1)
      && !occupied.contains(king_square + 2)
      && transit.iter().all(|&sq| !is_attacked(board, sq, !side))
    {
      let dest = if side { WHITE_KINGSIDE_KING_DEST } else { BLACK_KINGSIDE_KING_DEST };
      moves.push(Move::new(king_square, dest, MoveFlag::KingCastle));
    }
  }

  if board.can_castle_queenside(side) {
    let transit = [king_square, king_square - 1, king_square - 2];
    if !occupied.contains(king_square - 1)
      && !occupied.contains(king_square - 2)
      && !occupied.contains(king_square - 3)
      && transit.iter().all(|&sq| !is_attacked(board, sq, !side))
    {
      let dest = if side { WHITE_QUEENSIDE_KING_DEST } else { BLACK_QUEENSIDE_KING_DEST };
      moves.push(Move::new(king_square, dest, MoveFlag::QueenCastle));
    }
  }
}
