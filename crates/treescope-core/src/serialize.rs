/*
 * serialize.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Serialization of concrete syntax trees into owned documents.
//!
//! The document is a pure value: once built it has no tie to the tree or
//! the source buffer and can be inspected, compared, or written as JSON.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;
use treescope_ast::fold_tree;

use crate::buffer::SourceBuffer;
use crate::error::TreescopeResult;

/// Default kind tag for string-literal nodes (the Python grammar's tag).
pub const DEFAULT_STRING_KIND: &str = "string";

/// An owned, acyclic document describing one node of a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CstNode {
    /// The node's grammar kind tag.
    pub kind: String,

    /// Literal span text, present iff the node is a string-literal node or
    /// has no children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Serialized children in source order, present iff the node has at
    /// least one child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CstNode>>,
}

/// Converts subtrees into [`CstNode`] documents.
///
/// The string-literal kind is a parameter because grammars disagree on the
/// tag: the Python grammar calls it `string`, the C grammar
/// `string_literal`. String-literal nodes keep their literal span text even
/// when the grammar gives them children, and leaves always do; both
/// conditions are needed because some grammars report string literals with
/// zero children and some with delimiter children.
#[derive(Debug, Clone)]
pub struct TreeSerializer {
    string_kind: String,
}

impl Default for TreeSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_KIND)
    }
}

impl TreeSerializer {
    /// Create a serializer with the given string-literal kind tag.
    pub fn new(string_kind: impl Into<String>) -> Self {
        Self {
            string_kind: string_kind.into(),
        }
    }

    /// Serialize `node` and everything below it.
    ///
    /// Pure function of the node and the immutable buffer. The traversal is
    /// an explicit-stack bottom-up fold, so deeply nested trees do not
    /// exhaust the call stack. A span that is not valid UTF-8 aborts the
    /// whole serialization.
    pub fn serialize(&self, node: Node<'_>, buffer: &SourceBuffer) -> TreescopeResult<CstNode> {
        let mut cursor = node.walk();
        fold_tree(
            &mut cursor,
            &mut |node, children: Vec<TreescopeResult<CstNode>>| {
                let children = children.into_iter().collect::<TreescopeResult<Vec<_>>>()?;
                let text = if node.kind() == self.string_kind || node.child_count() == 0 {
                    Some(buffer.node_text(&node)?.to_string())
                } else {
                    None
                };
                Ok(CstNode {
                    kind: node.kind().to_string(),
                    text,
                    children: if children.is_empty() {
                        None
                    } else {
                        Some(children)
                    },
                })
            },
        )
    }
}
