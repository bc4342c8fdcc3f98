//! Caller-owned game session: the position plus whose turn belongs to whom.

use crate::Engine;
use crate::apply::apply_move;
use crate::board::Position;
use crate::error::GameError;
use crate::movegen::{find_legal_move, legal_moves_from};
use crate::rules::{GameEndState, game_end_state};
use crate::search::SearchResult;
use crate::types::{Color, Move, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides are entered by hand.
    HumanVsHuman,
    /// The engine answers for `machine` after every human move.
    HumanVsMachine { machine: Color },
}

/// A game in progress. The core holds no global state; everything a UI needs
/// between moves lives here.
pub struct Game<E: Engine> {
    position: Position,
    mode: GameMode,
    engine: E,
    history: Vec<Move>,
    status: GameEndState,
}

impl<E: Engine> Game<E> {
    pub fn new(mode: GameMode, engine: E) -> Self {
        Self::from_position(Position::startpos(), mode, engine)
    }

    pub fn from_position(position: Position, mode: GameMode, engine: E) -> Self {
        let status = game_end_state(&position);
        Self {
            position,
            mode,
            engine,
            history: Vec::new(),
            status,
        }
    }

    /// Back to the initial position, keeping mode and engine.
    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.history.clear();
        self.status = game_end_state(&self.position);
        self.engine.new_game();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn status(&self) -> &GameEndState {
        &self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.over
    }

    pub fn is_machine_turn(&self) -> bool {
        matches!(self.mode, GameMode::HumanVsMachine { machine } if machine == self.position.side_to_move)
    }

    /// Destination squares for the piece on `from`, empty when it cannot move.
    pub fn selectable_targets(&self, from: Square) -> Vec<Square> {
        if self.status.over {
            return Vec::new();
        }
        legal_moves_from(&self.position, from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Plays a human move given by its squares.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&GameEndState, GameError> {
        if self.status.over {
            return Err(GameError::GameOver);
        }
        if self.is_machine_turn() {
            return Err(GameError::NotYourTurn);
        }
        let mv = find_legal_move(&self.position, from, to)
            .ok_or(GameError::IllegalMove { from, to })?;
        self.commit(mv)?;
        Ok(&self.status)
    }

    /// Lets the engine move for the side to move. Returns `None` once the
    /// game is over.
    pub fn machine_move(&mut self) -> Result<Option<SearchResult>, GameError> {
        if self.status.over {
            return Ok(None);
        }
        let result = self.engine.choose_move(&self.position);
        match result.best_move {
            Some(mv) => {
                self.commit(mv)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    fn commit(&mut self, mv: Move) -> Result<(), GameError> {
        self.position = apply_move(&self.position, mv)?;
        self.history.push(mv);
        self.status = game_end_state(&self.position);
        if self.status.over {
            log::info!("game over after {} plies: {}", self.history.len(), self.status.message);
        }
        Ok(())
    }
}
