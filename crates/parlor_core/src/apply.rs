//! Move application.
//!
//! `make_move` mutates a position the caller owns outright; `apply_move`
//! is the copying form handed to callers that keep the original around.

use crate::board::Position;
use crate::error::MoveError;
use crate::movegen::is_castle_safe;
use crate::types::*;

/// Returns the position reached by playing `mv` on `pos`.
pub fn apply_move(pos: &Position, mv: Move) -> Result<Position, MoveError> {
    let mut next = pos.clone();
    next.make_move(mv)?;
    Ok(next)
}

impl Position {
    /// Plays `mv` in place. On error the position is left untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let moved = self.piece_at(mv.from).ok_or(MoveError::EmptySquare(mv.from))?;
        if let Some(kind) = mv.promotion
            && kind != PieceKind::Queen
        {
            return Err(MoveError::UnsupportedPromotion(kind));
        }

        if let Some(right) = mv.castle {
            if !is_castle_safe(self, right) {
                return Err(MoveError::UnsafeCastle { right });
            }
            let rook = self.piece_at(right.rook_from());
            self.set_piece(right.king_from(), None);
            self.set_piece(right.rook_from(), None);
            self.set_piece(right.king_to(), Some(moved));
            self.set_piece(right.rook_to(), rook);
            self.castling.clear_color(moved.color);
            self.en_passant = None;
            self.halfmove_clock += 1;
            self.finish_turn(mv);
            return Ok(());
        }

        let mut captured = self.piece_at(mv.to);

        if mv.is_en_passant {
            // The captured pawn sits beside the mover, behind the landing square.
            let victim = Square::new(mv.from.row, mv.to.col);
            if self.piece_at(victim).is_some_and(|pc| pc.color != moved.color) {
                captured = self.piece_at(victim);
                self.set_piece(victim, None);
            }
        }

        self.set_piece(mv.from, None);
        let promotes = moved.kind == PieceKind::Pawn && mv.to.row == moved.color.promotion_row();
        let landed = if promotes {
            Piece::new(moved.color, PieceKind::Queen)
        } else {
            moved
        };
        self.set_piece(mv.to, Some(landed));

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            self.en_passant = Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));
        }

        if moved.kind == PieceKind::King {
            self.castling.clear_color(moved.color);
        }
        if moved.kind == PieceKind::Rook
            && let Some(right) = CastlingRight::for_rook_home(mv.from)
        {
            self.castling.clear(right);
        }
        if captured.is_some_and(|pc| pc.kind == PieceKind::Rook)
            && let Some(right) = CastlingRight::for_rook_home(mv.to)
        {
            self.castling.clear(right);
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.finish_turn(mv);
        Ok(())
    }

    fn finish_turn(&mut self, mv: Move) {
        self.last_move = Some(mv);
        self.side_to_move = self.side_to_move.other();
        if self.side_to_move == Color::White {
            self.fullmove_number += 1;
        }
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
