use serde::{Deserialize, Serialize};

use crate::{board::Position, types::*};

/// Material values in centipawns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 20000,
        }
    }
}

impl PieceValues {
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

/// Material balance from `perspective`'s point of view: its pieces count
/// positive, the opponent's negative.
pub fn evaluate(pos: &Position, perspective: Color, values: &PieceValues) -> i32 {
    pos.pieces().fold(0i32, |acc, (_, pc)| {
        let v = values.value(pc.kind);
        if pc.color == perspective {
            acc.saturating_add(v)
        } else {
            acc.saturating_sub(v)
        }
    })
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
