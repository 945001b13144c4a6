//! Error types for grid_search

use crate::grid::Position;
use thiserror::Error;

/// Problems found while loading a map. Any of these stops the run before a search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("row or col value error: {rows}x{cols} (each must be in 1..=500)")]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("insufficient map data: expected {expected} cells, found {found}")]
    InsufficientCellData { expected: usize, found: usize },

    #[error("start point is duplicated: {first:?} and {second:?}")]
    DuplicateStart { first: Position, second: Position },

    #[error("map must contain exactly one start and at least one goal")]
    MissingStartOrGoal,

    #[error("unknown map data {code} at {position:?}")]
    UnknownCellCode { code: i64, position: Position },

    #[error("malformed token '{0}'")]
    MalformedToken(String),
}

#[derive(Error, Debug)]
pub enum GridSearchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GridSearchError>;
