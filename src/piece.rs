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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
  Pawn,
  Knight,
  Bishop,
  Rook,
  Queen,
  King,
}

impl PieceType {
  pub const ALL: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
  ];

  /// Lowercase FEN letter for this piece type, regardless of color.
  #[must_use]
  pub const fn fen_char(self) -> char {
    match self {
      PieceType::Pawn => 'p',
      PieceType::Knight => 'n',
      PieceType::Bishop => 'b',
      PieceType::Rook => 'r',
      PieceType::Queen => 'q',
      PieceType::King => 'k',
    }
  }

  #[must_use]
  pub const fn from_fen_char(c: char) -> Option<PieceType> {
    match c {
      'p' | 'P' => Some(PieceType::Pawn),
      'n' | 'N' => Some(PieceType::Knight),
      'b' | 'B' => Some(PieceType::Bishop),
      'r' | 'R' => Some(PieceType::Rook),
      'q' | 'Q' => Some(PieceType::Queen),
      'k' | 'K' => Some(PieceType::King),
      _ => None,
    }
  }
}

/// Side to move / side owning a piece. `true` means white throughout the
/// crate (mirrors `Board::white_to_move` and the `color` bitboard plane).
pub type Color = bool;

pub const WHITE: Color = true;
pub const BLACK: Color = false;
