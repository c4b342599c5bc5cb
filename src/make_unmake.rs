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

//! Make/unmake. `Board::make_move` mutates the board in place and returns an
//! `Undo` record; `Board::unmake_move` consumes that record (by value, so it
//! cannot be replayed) together with the same `Move` to restore the board
//! exactly.

use crate::board::{
  castling_bit_for_rook_square, castling_bits_for_color, Board, BLACK_KINGSIDE_ROOK,
  BLACK_KINGSIDE_ROOK_DEST, BLACK_QUEENSIDE_ROOK, BLACK_QUEENSIDE_ROOK_DEST, WHITE_KINGSIDE_ROOK,
  WHITE_KINGSIDE_ROOK_DEST, WHITE_QUEENSIDE_ROOK, WHITE_QUEENSIDE_ROOK_DEST,
};
use crate::moves::{Move, MoveFlag};
use crate::piece::PieceType;

/// The minimal state needed to reverse exactly one `make_move` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
  previous_en_passant: Option<u8>,
  previous_castling_rights: u8,
  moved_piece: PieceType,
  captured_piece: Option<PieceType>,
}

impl Board {
  pub fn make_move(&mut self, mv: Move) -> Undo {
    let side = self.side_to_move();
    let from = mv.from_square();
    let to = mv.to_square();
    let flag = mv.flag();

    let previous_en_passant = self.en_passant_square;
    let previous_castling_rights = self.castling_rights;

    let (moved_piece, _) = self
      .clear_square(from)
      .expect("make_move called with no piece on the from-square");

    let captured_piece = if flag.is_en_passant() {
      let captured_square = if side { to - 8 } else { to + 8 };
      self.clear_square(captured_square).map(|(piece, _)| piece)
    } else {
      self.clear_square(to).map(|(piece, _)| piece)
    };

    let placed_piece = flag.promotion_piece().unwrap_or(moved_piece);
    self.place(to, placed_piece, side);

    if let MoveFlag::KingCastle | MoveFlag::QueenCastle = flag {
      let (rook_from, rook_to) = castling_rook_squares(side, flag);
      self.remove(rook_from);
      self.place(rook_to, PieceType::Rook, side);
    }

    self.en_passant_square = if flag == MoveFlag::DoublePawnPush {
      Some(if side { from + 8 } else { from - 8 })
    } else {
      None
    };

    self.clear_castling_right(castling_rights_lost_by_move(side, moved_piece, from, to));
    self.white_to_move = !side;

    Undo {
      previous_en_passant,
      previous_castling_rights,
      moved_piece,
      captured_piece,
    }
  }

  pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
    let side = !self.side_to_move();
    let from = mv.from_square();
    let to = mv.to_square();
    let flag = mv.flag();

    self.white_to_move = side;
    self.castling_rights = undo.previous_castling_rights;
    self.en_passant_square = undo.previous_en_passant;

    self.remove(to);
    self.place(from, undo.moved_piece, side);

    if let MoveFlag::KingCastle | MoveFlag::QueenCastle = flag {
      let (rook_from, rook_to) = castling_rook_squares(side, flag);
      self.remove(rook_to);
      self.place(rook_from, PieceType::Rook, side);
    }

    if let Some(captured) = undo.captured_piece {
      if flag.is_en_passant() {
        let captured_square = if side { to - 8 } else { to + 8 };
        self.place(captured_square, captured, !side);
      } else {
        self.place(to, captured, !side);
      }
    }
  }
}

fn castling_rook_squares(side: bool, flag: MoveFlag) -> (u8, u8) {
  match (side, flag) {
    (true, MoveFlag::KingCastle) => (WHITE_KINGSIDE_ROOK, WHITE_KINGSIDE_ROOK_DEST),
    (true, MoveFlag::QueenCastle) => (WHITE_QUEENSIDE_ROOK, WHITE_QUEENSIDE_ROOK_DEST),
    (false, MoveFlag::KingCastle) => (BLACK_KINGSIDE_ROOK, BLACK_KINGSIDE_ROOK_DEST),
    (false, MoveFlag::QueenCastle) => (BLACK_QUEENSIDE_ROOK, BLACK_QUEENSIDE_ROOK_DEST),
    _ => unreachable!("castling_rook_squares called with a non-castling flag"),
  }
}

/// Castling rights cleared by this move: the mover's own rights when its
/// king or a corner rook moves, plus (the subtle one, per Kiwipete depth-3)
/// the opponent's rights when their rook is captured on its home corner.
fn castling_rights_lost_by_move(side: bool, moved_piece: PieceType, from: u8, to: u8) -> u8 {
  let mut lost = 0u8;
  if moved_piece == PieceType::King {
    lost |= castling_bits_for_color(side);
  }
  if moved_piece == PieceType::Rook {
    if let Some(bit) = castling_bit_for_rook_square(from) {
      lost |= bit;
    }
  }
  if let Some(bit) = castling_bit_for_rook_square(to) {
    lost |= bit;
  }
  lost
}
