//! Attack detection over the mailbox board.
//!
//! These functions only read the board, so they are safe to call on the
//! half-applied positions produced while filtering pseudo-legal moves.

use crate::board::Position;
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn holds(pos: &Position, sq: Option<Square>, by: Color, kind: PieceKind) -> bool {
    matches!(sq.and_then(|s| pos.piece_at(s)), Some(pc) if pc.color == by && pc.kind == kind)
}

/// Walks each ray from `target` and reports whether the first piece met is
/// one of `by`'s `sliders`.
fn ray_hits(
    pos: &Position,
    target: Square,
    by: Color,
    dirs: &[(i8, i8)],
    sliders: [PieceKind; 2],
) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(sq) = cur {
            if let Some(pc) = pos.piece_at(sq) {
                if pc.color == by && sliders.contains(&pc.kind) {
                    return true;
                }
                break;
            }
            cur = sq.offset(dr, dc);
        }
    }
    false
}

/// Whether any piece of color `by` attacks `target`.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    // An attacking pawn sits one row behind the target from its own point of view.
    let back = -by.forward();
    if [-1, 1]
        .into_iter()
        .any(|dc| holds(pos, target.offset(back, dc), by, PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(pos, target.offset(dr, dc), by, PieceKind::Knight))
    {
        return true;
    }

    if ray_hits(
        pos,
        target,
        by,
        &DIAGONALS,
        [PieceKind::Bishop, PieceKind::Queen],
    ) {
        return true;
    }

    if ray_hits(
        pos,
        target,
        by,
        &ORTHOGONALS,
        [PieceKind::Rook, PieceKind::Queen],
    ) {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(pos, target.offset(dr, dc), by, PieceKind::King))
}

impl Position {
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        is_square_attacked(self, target, by)
    }

    /// Whether `c`'s king is attacked. A position without that king counts
    /// as check so that no move can be considered legal in it.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => is_square_attacked(self, ksq, c.other()),
            None => {
                log::warn!("no {c} king on the board, treating as check");
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
