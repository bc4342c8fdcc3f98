//! The machine player: a fixed strength tier over the shared search.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Engine;
use crate::board::Position;
use crate::config::EngineConfig;
use crate::search::{SearchResult, Strength, choose_move};

/// Plays at one [`Strength`], drawing its noise and random picks from an
/// owned RNG so a seeded engine replays the same game.
#[derive(Debug, Clone)]
pub struct TieredEngine {
    strength: Strength,
    config: EngineConfig,
    rng: StdRng,
    nodes: u64,
}

impl TieredEngine {
    pub fn new(strength: Strength, config: EngineConfig) -> Self {
        Self::with_rng(strength, config, StdRng::from_entropy())
    }

    pub fn seeded(strength: Strength, config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(strength, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(strength: Strength, config: EngineConfig, rng: StdRng) -> Self {
        Self {
            strength,
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn set_strength(&mut self, strength: Strength) {
        self.strength = strength;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes searched over the current game.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for TieredEngine {
    fn choose_move(&mut self, pos: &Position) -> SearchResult {
        let result = choose_move(
            pos,
            self.strength,
            &self.config.pieces,
            &self.config.search,
            &mut self.rng,
        );
        self.nodes += result.nodes;
        result
    }

    fn name(&self) -> &str {
        match self.strength {
            Strength::Weak => "Parlor (weak)",
            Strength::Medium => "Parlor (medium)",
            Strength::Strong => "Parlor (strong)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
