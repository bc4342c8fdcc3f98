//! Error types for the chess core.

use std::path::PathBuf;

use crate::types::{CastlingRight, PieceKind, Square};

/// FEN parsing failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, got {0}")]
    MissingFields(usize),

    #[error("expected 8 rows in board field, got {0}")]
    RowCount(usize),

    #[error("row {row} describes {files} files")]
    RowWidth { row: usize, files: usize },

    #[error("invalid piece letter '{0}'")]
    BadPiece(char),

    #[error("invalid side to move '{0}'")]
    BadSide(String),

    #[error("invalid castling letter '{0}'")]
    BadCastling(char),

    #[error("invalid square '{0}'")]
    BadSquare(String),

    #[error("en-passant square {0} is not on the side to move's target rank")]
    BadEnPassant(Square),

    #[error("invalid move counter '{0}'")]
    BadCounter(String),
}

/// Failures while applying a move to a position.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// A castling move reached the applier while the king was in check or
    /// its path was attacked. Only a faulty legality filter can cause this.
    #[error("castling {right:?} would move the king out of, through or into check")]
    UnsafeCastle { right: CastlingRight },

    /// Pawns always promote to a queen.
    #[error("promotion to {0:?} is not supported")]
    UnsupportedPromotion(PieceKind),
}

/// Unrecognised names for colors and strength tiers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown strength '{0}' (expected weak, medium or strong)")]
    UnknownStrength(String),
}

/// Engine configuration failures.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Rejected requests against a [`crate::Game`] session.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("it is the machine's turn")]
    NotYourTurn,

    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error(transparent)]
    Move(#[from] MoveError),
}
