/*
 * query.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pattern-based capture of candidate nodes.
//!
//! Pattern evaluation itself belongs to tree-sitter; this module compiles a
//! pattern once and materializes the captures it yields. Match order and
//! tie-breaking across overlapping patterns are engine-defined and not
//! reimplemented here.

use tree_sitter::{Language, Node, Query, QueryCursor, StreamingIterator};

use crate::error::TreescopeResult;

/// A node bound to a named capture label by a query pattern.
///
/// Lifetime-bound to the tree that produced it; the label names the pattern
/// slot that matched (e.g. `id` for `(declaration (identifier) @id)`).
#[derive(Debug, Clone)]
pub struct Capture<'tree> {
    pub node: Node<'tree>,
    pub label: String,
}

/// Compiles a query pattern and yields its captures in engine order.
#[derive(Debug)]
pub struct CaptureQueryRunner {
    query: Query,
}

impl CaptureQueryRunner {
    /// Compile `pattern` against a grammar.
    ///
    /// Fails with [`crate::TreescopeError::InvalidPattern`] if the pattern
    /// references node or field kinds the grammar does not define.
    pub fn new(language: &Language, pattern: &str) -> TreescopeResult<Self> {
        let query = Query::new(language, pattern)?;
        Ok(Self { query })
    }

    /// Evaluate the pattern below `root` and materialize the captures.
    ///
    /// Result sets are expected to be far smaller than the tree, so they
    /// are collected eagerly rather than streamed.
    pub fn run<'tree>(&self, root: Node<'tree>, source: &[u8]) -> Vec<Capture<'tree>> {
        let capture_names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut results = Vec::new();

        let mut captures = cursor.captures(&self.query, root, source);
        while let Some((query_match, index)) = captures.next() {
            let capture = query_match.captures[*index];
            let label = capture_names
                .get(capture.index as usize)
                .copied()
                .unwrap_or_default()
                .to_string();

            results.push(Capture {
                node: capture.node,
                label,
            });
        }

        results
    }
}
