//! Parser error types

use std::fmt;
use thiserror::Error;

/// Category of a structural parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Indentation or token structure does not fit the grammar
    MalformedStructure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedStructure => write!(f, "Malformed structure"),
        }
    }
}

/// Parser error
///
/// Lenient parsing never produces `Structure` errors; they come only from
/// strict mode.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Structural error with source position (1-based)
    #[error("{kind} at line {line}, column {column}: {message}")]
    Structure {
        kind: ErrorKind,
        message: String,
        line: usize,
        column: usize,
    },

    /// I/O error while reading a document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Create a `MalformedStructure` error at the given position
    pub fn malformed(message: impl Into<String>, line: usize, column: usize) -> Self {
        ParseError::Structure {
            kind: ErrorKind::MalformedStructure,
            message: message.into(),
            line,
            column,
        }
    }

    /// Error kind, for structural errors
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ParseError::Structure { kind, .. } => Some(*kind),
            ParseError::Io(_) => None,
        }
    }

    /// Source position `(line, column)`, for structural errors
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Structure { line, column, .. } => Some((*line, *column)),
            ParseError::Io(_) => None,
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
