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

//! External move validation surface: takes algebraic squares and an
//! optional promotion letter, and resolves them against the position's
//! legal moves rather than trusting caller-supplied flags. `std`-gated,
//! since `MoveValidationError` is `std`-gated.

use crate::board::Board;
use crate::errors::MoveValidationError;
use crate::legality::generate_legal_moves;
use crate::moves::{parse_algebraic_square, Move};
use crate::piece::PieceType;

impl Board {
  /// Resolves a `from`/`to` pair of algebraic squares (and, for a pawn
  /// reaching the back rank, a promotion letter `q`/`r`/`b`/`n`) against the
  /// position's legal moves.
  pub fn validate_move(
    &self,
    from: &str,
    to: &str,
    promotion: Option<char>,
  ) -> Result<Move, MoveValidationError> {
    let from_square = parse_algebraic_square(from)?;
    let to_square = parse_algebraic_square(to)?;
    let promotion_piece = match promotion {
      Some(letter) => Some(parse_promotion_letter(letter)?),
      None => None,
    };

    let legal_moves = generate_legal_moves(self);

    let reaches_promotion_rank = self.piece_at(from_square) == Some(PieceType::Pawn)
      && legal_moves.iter().any(|m| {
        m.from_square() == from_square && m.to_square() == to_square && m.is_promotion()
      });
    if reaches_promotion_rank && promotion_piece.is_none() {
      return Err(MoveValidationError::PromotionRequired);
    }

    legal_moves
      .into_iter()
      .find(|m| {
        m.from_square() == from_square
          && m.to_square() == to_square
          && m.promotion_piece() == promotion_piece
      })
      .ok_or(MoveValidationError::IllegalMove)
  }
}

fn parse_promotion_letter(letter: char) -> Result<PieceType, MoveValidationError> {
  match letter.to_ascii_lowercase() {
    'q' => Ok(PieceType::Queen),
    'r' => Ok(PieceType::Rook),
    'b' => Ok(PieceType::Bishop),
    'n' => Ok(PieceType::Knight),
    other => Err(MoveValidationError::InvalidPromotionPiece(other)),
  }
}
