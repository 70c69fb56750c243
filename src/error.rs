use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a pattern source is rejected. Rows and columns are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern source contains no rows")]
    NoRows,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has illegal character {character:?} at column {column}")]
    IllegalCharacter {
        row: usize,
        column: usize,
        character: char,
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentColumns {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Everything that can stop a run before the first generation is drawn.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("cannot allocate a {rows}x{columns} grid")]
    Allocation { rows: usize, columns: usize },

    #[error("malformed pattern source: {0}")]
    MalformedPattern(#[from] PatternError),

    #[error("cannot read pattern source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{dimension} option is larger than screen ({needed} needed, {available} available)")]
    DisplayTooSmall {
        dimension: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
