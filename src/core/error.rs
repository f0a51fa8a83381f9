//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::color::ColorError;

/// Theme validation faults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("stroke size must be finite and >= 0, got {0}")]
    InvalidStroke(f32),
    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
}

/// What was wrong with a single table row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowFault {
    #[error("expected at least 2 columns, got {0}")]
    TooFewColumns(usize),
    #[error("invalid integer '{0}'")]
    BadInteger(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("attempt to build a series from empty input")]
    EmptyInput,

    #[error("gap between each value must not be zero")]
    InvalidGap,

    #[error("gap {gap} never walks from {first} to {last}")]
    IllogicalRange { first: i64, last: i64, gap: i64 },

    #[error("range {first}..{last} by {gap} holds no values")]
    EmptyRange { first: i64, last: i64, gap: i64 },

    /// `row` is 1-based: the file line when raised while reading CSV, the
    /// table row index when raised by `CoordinateSeries::from_table`.
    #[error("row {row}: {fault}")]
    MalformedRow { row: usize, fault: RowFault },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("extremums {min}..{max} are not far enough apart to show a difference over {rows} rows")]
    DegenerateRange { max: i64, min: i64, rows: usize },

    #[error("terminal too small: need at least {want_w}x{want_h}, got {got_w}x{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },

    #[error("grid too large: at most {max_w}x{max_h}, got {got_w}x{got_h}")]
    GraphTooLarge {
        max_w: usize,
        max_h: usize,
        got_w: usize,
        got_h: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    /// Stable name of the failure class, printed ahead of the message by the CLI.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::InvalidGap => "InvalidGap",
            Self::IllogicalRange { .. } => "IllogicalRange",
            Self::EmptyRange { .. } => "EmptyRange",
            Self::MalformedRow { .. } => "MalformedRow",
            Self::FileNotFound { .. } => "FileNotFound",
            Self::DegenerateRange { .. } => "DegenerateRange",
            Self::GraphTooSmall { .. } => "GraphTooSmall",
            Self::GraphTooLarge { .. } => "GraphTooLarge",
            Self::Config(_) => "ConfigError",
            Self::Color(_) => "ColorError",
            Self::Io(_) => "IoError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_row_names_row_and_fault() {
        let err = GraphError::MalformedRow {
            row: 7,
            fault: RowFault::BadInteger("abc".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("'abc'"));
        assert_eq!(err.kind(), "MalformedRow");
    }

    #[test]
    fn config_error_is_transparent() {
        let err = GraphError::from(ConfigError::InvalidStroke(-1.0));
        assert_eq!(err.to_string(), ConfigError::InvalidStroke(-1.0).to_string());
        assert_eq!(err.kind(), "ConfigError");
    }

    #[test]
    fn file_not_found_shows_path() {
        let err = GraphError::FileNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
