//! Check, checkmate and stalemate detection.

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// End-of-game report for the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEndState {
    pub over: bool,
    pub in_check: bool,
    pub outcome: Outcome,
    pub message: String,
}

impl GameEndState {
    fn from_outcome(outcome: Outcome, in_check: bool) -> Self {
        let message = match outcome {
            Outcome::Checkmate { winner } => format!("{winner} wins by checkmate."),
            Outcome::Stalemate => "Draw by stalemate.".to_string(),
            Outcome::Ongoing if in_check => "Check.".to_string(),
            Outcome::Ongoing => String::new(),
        };
        Self {
            over: outcome != Outcome::Ongoing,
            in_check,
            outcome,
            message,
        }
    }
}

pub fn is_in_check(pos: &Position, color: Color) -> bool {
    pos.in_check(color)
}

/// Classifies a position with and without legal moves. Callers that already
/// hold the legal move count can use this to skip regenerating them.
pub fn outcome_for(pos: &Position, has_legal_moves: bool) -> (Outcome, bool) {
    let in_check = pos.in_check(pos.side_to_move);
    let outcome = match (has_legal_moves, in_check) {
        (true, _) => Outcome::Ongoing,
        (false, true) => Outcome::Checkmate {
            winner: pos.side_to_move.other(),
        },
        (false, false) => Outcome::Stalemate,
    };
    (outcome, in_check)
}

pub fn game_end_state(pos: &Position) -> GameEndState {
    let has_moves = !legal_moves(pos).is_empty();
    let (outcome, in_check) = outcome_for(pos, has_moves);
    GameEndState::from_outcome(outcome, in_check)
}
