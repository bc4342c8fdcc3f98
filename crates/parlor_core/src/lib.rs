pub mod apply;
pub mod attacks;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod search;
pub mod session;
pub mod types;

// Re-export core game logic
pub use apply::apply_move;
pub use attacks::is_square_attacked;
pub use board::*;
pub use config::EngineConfig;
pub use engine::TieredEngine;
pub use error::*;
pub use eval::{PieceValues, evaluate};
pub use movegen::*;
pub use perft::perft;
pub use rules::*;
pub use search::{
    SearchConfig, SearchResult, Searcher, Strength, choose_move, order_moves, pick_best_move,
};
pub use session::{Game, GameMode};
pub use types::*;

/// Standard starting position.
pub fn initial_position() -> Position {
    Position::startpos()
}

// =============================================================================
// Engine trait: implemented by the machine player
// =============================================================================

/// A source of machine moves.
///
/// The session talks to this trait rather than to a concrete search, so a
/// different player (scripted, remote, ...) can stand in for the tiers.
pub trait Engine: Send {
    /// Chooses a move for the side to move in `pos`.
    fn choose_move(&mut self, pos: &Position) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset per-game state (counters, caches)
    fn new_game(&mut self) {}
}
