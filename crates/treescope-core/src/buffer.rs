/*
 * buffer.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ownership of the raw source bytes and span extraction.

use std::path::Path;

use tree_sitter::Node;

use crate::error::{TreescopeError, TreescopeResult};

/// Owns the raw byte content of one source file.
///
/// Every span handed out by the tree or by captures is a pair of offsets
/// into this buffer, not an independent copy, so the buffer must stay live
/// for as long as any span text extraction may occur.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    /// Read a source file into a buffer.
    pub fn from_path(path: &Path) -> TreescopeResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self { bytes })
    }

    /// The raw bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decode the half-open span `[start, end)` as UTF-8.
    pub fn slice(&self, start: usize, end: usize) -> TreescopeResult<&str> {
        std::str::from_utf8(&self.bytes[start..end]).map_err(|source| TreescopeError::Decode {
            start,
            end,
            source,
        })
    }

    /// Decode the span covered by `node`.
    pub fn node_text(&self, node: &Node) -> TreescopeResult<&str> {
        self.slice(node.start_byte(), node.end_byte())
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self {
            bytes: source.as_bytes().to_vec(),
        }
    }
}

impl From<String> for SourceBuffer {
    fn from(source: String) -> Self {
        Self {
            bytes: source.into_bytes(),
        }
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_decodes_exact_spans() {
        let buffer = SourceBuffer::from("int x;");
        assert_eq!(buffer.slice(4, 5).unwrap(), "x");
        assert_eq!(buffer.slice(0, 6).unwrap(), "int x;");
        assert_eq!(buffer.slice(3, 3).unwrap(), "");
    }

    #[test]
    fn slice_surfaces_invalid_utf8() {
        let buffer = SourceBuffer::from(vec![b'a', 0xff, b'b']);
        let err = buffer.slice(0, 3).unwrap_err();
        match err {
            TreescopeError::Decode { start, end, .. } => {
                assert_eq!((start, end), (0, 3));
            }
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
