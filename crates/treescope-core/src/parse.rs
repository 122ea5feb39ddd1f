/*
 * parse.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Entry point into the external parsing engine.
//!
//! Parsing itself is tree-sitter's job; this module only fixes the error
//! mapping around it. The tree borrows nothing from the buffer, but its
//! nodes carry byte offsets that are only meaningful against it.

use tree_sitter::{Language, Parser, Tree};

use crate::buffer::SourceBuffer;
use crate::error::{TreescopeError, TreescopeResult};

/// Parse a source buffer with the given grammar.
///
/// Deterministic for a fixed grammar and buffer. The returned tree is
/// immutable for the lifetime of the program; no incremental re-parse
/// support is exposed here.
pub fn parse_source(language: &Language, buffer: &SourceBuffer) -> TreescopeResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| TreescopeError::Parse {
            message: format!("failed to load grammar: {}", e),
        })?;

    parser
        .parse(buffer.as_bytes(), None)
        .ok_or_else(|| TreescopeError::Parse {
            message: "tree-sitter parse failed".to_string(),
        })
}
