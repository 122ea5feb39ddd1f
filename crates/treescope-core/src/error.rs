/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for parsing, querying, and serialization.

use thiserror::Error;

/// Errors that can occur while inspecting a syntax tree.
///
/// Every operation here runs over a fixed, already-valid immutable tree, so
/// none of these are transient; nothing is retried.
#[derive(Debug, Error)]
pub enum TreescopeError {
    /// A byte span of the source buffer is not valid UTF-8.
    ///
    /// Grammars that tokenize multi-byte or binary literals can trigger
    /// this. The span is surfaced, never silently replaced.
    #[error("invalid UTF-8 in span {start}..{end}: {source}")]
    Decode {
        start: usize,
        end: usize,
        source: std::str::Utf8Error,
    },

    /// The query pattern references node or field kinds the grammar does
    /// not define.
    #[error("invalid query pattern: {0}")]
    InvalidPattern(#[from] tree_sitter::QueryError),

    /// The parsing engine rejected the grammar or produced no tree.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// I/O error reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error writing the report stream.
    #[error("report error: {0}")]
    Report(std::io::Error),
}

/// Result type for tree inspection operations.
pub type TreescopeResult<T> = Result<T, TreescopeError>;
