//! Minimax search with alpha-beta pruning and the three strength tiers.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::error::ParseError;
use crate::eval::{PieceValues, evaluate};
use crate::movegen::legal_successors;
use crate::rules::{Outcome, outcome_for};
use crate::types::{Color, Move};

/// Window bound, well outside any mate or material score.
const INF: i32 = i32::MAX / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Mostly random, otherwise a noisy one-ply material grab.
    Weak,
    /// Shallow minimax with a little noise.
    Medium,
    /// Deeper minimax, fully deterministic.
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        })
    }
}

impl FromStr for Strength {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weak" | "easy" => Ok(Strength::Weak),
            "medium" => Ok(Strength::Medium),
            "strong" | "hard" => Ok(Strength::Strong),
            other => Err(ParseError::UnknownStrength(other.to_string())),
        }
    }
}

/// Tuning knobs for the strength tiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Chance that the weak tier plays a uniformly random move.
    pub weak_random_ratio: f64,
    /// Half-width of the uniform noise added to weak one-ply scores.
    pub weak_noise: f64,
    pub medium_depth: u8,
    /// Half-width of the uniform noise added to medium root scores.
    pub medium_noise: f64,
    pub strong_depth: u8,
    /// Score of a mated position, signed for the searching side.
    pub mate_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weak_random_ratio: 0.7,
            weak_noise: 100.0,
            medium_depth: 2,
            medium_noise: 20.0,
            strong_depth: 4,
            mate_score: 999_999,
        }
    }
}

/// Minimax searcher. Scores are always from `maximizer`'s point of view,
/// whichever side is to move at the node being searched.
pub struct Searcher<'a> {
    values: &'a PieceValues,
    mate_score: i32,
    maximizer: Color,
    pruning: bool,
    /// Nodes visited since construction.
    pub nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(values: &'a PieceValues, mate_score: i32, maximizer: Color) -> Self {
        Self {
            values,
            mate_score,
            maximizer,
            pruning: true,
            nodes: 0,
        }
    }

    /// Disables alpha-beta cutoffs; every node is expanded.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn minimax(&mut self, pos: &Position, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        let mut children = legal_successors(pos);
        match outcome_for(pos, !children.is_empty()).0 {
            Outcome::Checkmate { .. } if pos.side_to_move == self.maximizer => {
                return -self.mate_score;
            }
            Outcome::Checkmate { .. } => return self.mate_score,
            Outcome::Stalemate => return 0,
            Outcome::Ongoing => {}
        }
        if depth == 0 {
            return evaluate(pos, self.maximizer, self.values);
        }

        order_moves(&mut children);

        if pos.side_to_move == self.maximizer {
            let mut best = -INF;
            for (_, child) in &children {
                let score = self.minimax(child, depth - 1, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for (_, child) in &children {
                let score = self.minimax(child, depth - 1, alpha, beta);
                best = best.min(score);
                beta = beta.min(best);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Captures first, otherwise generation order.
pub fn order_moves(children: &mut [(Move, Position)]) {
    children.sort_by_key(|(mv, _)| !mv.is_capture());
}

/// Full-depth search from the side to move. Each root move is scored with a
/// full window, so ties go to the first move in generation order.
pub fn pick_best_move(
    pos: &Position,
    depth: u8,
    values: &PieceValues,
    mate_score: i32,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut searcher = Searcher::new(values, mate_score, pos.side_to_move);
    let mut best: Option<(Move, i32)> = None;
    for (mv, child) in legal_successors(pos) {
        let score = searcher.minimax(&child, depth.saturating_sub(1), -INF, INF);
        log::trace!("root {mv}: {score}");
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    *nodes += searcher.nodes;
    best
}

/// Outcome of a single move choice.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Noise-free score of the chosen move for the side that moved
    pub score: i32,
    /// Depth of the search that produced the move (1 for the weak tier)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

impl SearchResult {
    fn none(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Picks a move for the side to move at the requested strength.
pub fn choose_move<R: Rng + ?Sized>(
    pos: &Position,
    strength: Strength,
    values: &PieceValues,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let result = match strength {
        Strength::Weak => choose_weak(pos, values, config, rng),
        Strength::Medium => choose_noisy_minimax(
            pos,
            config.medium_depth,
            config.medium_noise,
            values,
            config.mate_score,
            rng,
        ),
        Strength::Strong => {
            let mut nodes = 0;
            let best = pick_best_move(pos, config.strong_depth, values, config.mate_score, &mut nodes);
            SearchResult {
                best_move: best.map(|(mv, _)| mv),
                score: best.map(|(_, s)| s).unwrap_or(0),
                depth: config.strong_depth,
                nodes,
            }
        }
    };

    match result.best_move {
        Some(mv) => log::debug!(
            "{strength} search chose {mv} (score {}, depth {}, {} nodes)",
            result.score,
            result.depth,
            result.nodes
        ),
        None => log::debug!("{strength} search found no legal move"),
    }
    result
}

fn noise<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..=half_width)
    } else {
        0.0
    }
}

fn choose_weak<R: Rng + ?Sized>(
    pos: &Position,
    values: &PieceValues,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let children = legal_successors(pos);
    let me = pos.side_to_move;

    if rng.gen_bool(config.weak_random_ratio.clamp(0.0, 1.0)) {
        return match children.choose(rng) {
            Some((mv, child)) => SearchResult {
                best_move: Some(*mv),
                score: evaluate(child, me, values),
                depth: 1,
                nodes: children.len() as u64,
            },
            None => SearchResult::none(1),
        };
    }

    let mut best: Option<(Move, i32, f64)> = None;
    for (mv, child) in &children {
        let score = evaluate(child, me, values);
        let noisy = score as f64 + noise(rng, config.weak_noise);
        if best.is_none_or(|(_, _, b)| noisy > b) {
            best = Some((*mv, score, noisy));
        }
    }
    match best {
        Some((mv, score, _)) => SearchResult {
            best_move: Some(mv),
            score,
            depth: 1,
            nodes: children.len() as u64,
        },
        None => SearchResult::none(1),
    }
}

fn choose_noisy_minimax<R: Rng + ?Sized>(
    pos: &Position,
    depth: u8,
    half_width: f64,
    values: &PieceValues,
    mate_score: i32,
    rng: &mut R,
) -> SearchResult {
    let mut searcher = Searcher::new(values, mate_score, pos.side_to_move);
    let mut best: Option<(Move, i32, f64)> = None;
    for (mv, child) in legal_successors(pos) {
        let score = searcher.minimax(&child, depth.saturating_sub(1), -INF, INF);
        let noisy = score as f64 + noise(rng, half_width);
        if best.is_none_or(|(_, _, b)| noisy > b) {
            best = Some((mv, score, noisy));
        }
    }
    match best {
        Some((mv, score, _)) => SearchResult {
            best_move: Some(mv),
            score,
            depth,
            nodes: searcher.nodes,
        },
        None => SearchResult::none(depth),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
