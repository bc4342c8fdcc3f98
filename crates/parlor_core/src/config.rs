//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! stock piece values and tier settings.
//!
//! ```toml
//! [pieces]
//! knight = 300
//!
//! [search]
//! weak_random_ratio = 0.5
//! strong_depth = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::PieceValues;
use crate::search::SearchConfig;

/// Largest accepted piece value. Thirty-two pieces at this value plus the
/// mate score stay well inside the search window.
pub const MAX_PIECE_VALUE: i32 = 1_000_000;

pub const MAX_MATE_SCORE: i32 = 100_000_000;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pieces: PieceValues,
    pub search: SearchConfig,
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.search;
        if !(0.0..=1.0).contains(&s.weak_random_ratio) {
            return Err(ConfigError::Invalid(format!(
                "weak_random_ratio must be within [0, 1], got {}",
                s.weak_random_ratio
            )));
        }
        if ![s.weak_noise, s.medium_noise]
            .iter()
            .all(|n| n.is_finite() && *n >= 0.0)
        {
            return Err(ConfigError::Invalid(
                "noise widths must be finite and non-negative".to_string(),
            ));
        }
        if s.medium_depth == 0 || s.strong_depth == 0 {
            return Err(ConfigError::Invalid(
                "search depths must be at least 1".to_string(),
            ));
        }
        if !(1..=MAX_MATE_SCORE).contains(&s.mate_score) {
            return Err(ConfigError::Invalid(format!(
                "mate_score must be within [1, {MAX_MATE_SCORE}], got {}",
                s.mate_score
            )));
        }
        let p = &self.pieces;
        if [p.pawn, p.knight, p.bishop, p.rook, p.queen, p.king]
            .iter()
            .any(|v| !(1..=MAX_PIECE_VALUE).contains(v))
        {
            return Err(ConfigError::Invalid(format!(
                "piece values must be within [1, {MAX_PIECE_VALUE}]"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
