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

//! Crate error taxonomy.
//!
//! Position-notation parsing errors stay a plain `no_std`-friendly enum,
//! since malformed FEN is treated as a caller bug rather than an expected
//! external-input failure mode. The move-validation surface that *is*
//! meant to field arbitrary external input (`Board::validate_move`) gets a
//! `thiserror`-derived error behind the `std` feature so it prints sensibly
//! for a caller.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FenParseError {
  /// The record does not have at least the four leading space-separated
  /// fields (piece placement, active color, castling availability,
  /// en-passant target). A trailing half-move clock and full-move number
  /// are accepted if present but are not required and are not retained.
  MalformedRecord,
  /// A character in the piece-placement field is not a recognised piece
  /// letter, digit 1-8, or rank separator.
  InvalidPieceChar,
  /// A rank in the piece-placement field does not sum to exactly 8 files.
  InvalidRankLength,
  /// The piece-placement field does not have exactly 8 ranks.
  InvalidRankCount,
  /// The active-color field is not exactly `w` or `b`.
  InvalidActiveColor,
  /// The castling-availability field contains a character outside `KQkq-`.
  InvalidCastlingChar,
  /// The en-passant field is neither `-` nor a two-character algebraic
  /// square.
  InvalidEnPassantSquare,
}

#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum MoveValidationError {
  #[error("'{0}' is not a valid algebraic square")]
  InvalidSquareFormat(String),
  #[error("'{0}' is not a valid promotion piece letter (expected q, r, b or n)")]
  InvalidPromotionPiece(char),
  #[error("destination is on the promotion rank but no promotion piece was given")]
  PromotionRequired,
  #[error("no legal move matches this from/to/promotion triple in the current position")]
  IllegalMove,
}
