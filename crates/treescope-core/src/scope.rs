/*
 * scope.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ancestor-chain scope classification.

use tree_sitter::{Language, Node};
use treescope_ast::ancestors;

/// Default sentinel kind for function scope.
///
/// Both the C and Python grammars tag function bodies with this kind.
pub const DEFAULT_FUNCTION_KIND: &str = "function_definition";

/// Whether a node sits at file scope or inside a function body.
///
/// Derived per classification call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeVerdict {
    Global,
    Local,
}

impl ScopeVerdict {
    /// `true` for [`ScopeVerdict::Global`].
    pub fn is_global(self) -> bool {
        matches!(self, ScopeVerdict::Global)
    }
}

/// Classifies nodes by walking their strict ancestor chain.
///
/// The sentinel kind is configuration, not a constant, so the same walk
/// works across grammars whose function-scope node carries a different tag
/// (another grammar might call it `func_decl`). The kind is an opaque key
/// compared only by equality.
#[derive(Debug, Clone)]
pub struct ScopeClassifier {
    sentinel_kind: String,
}

impl Default for ScopeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTION_KIND)
    }
}

impl ScopeClassifier {
    /// Create a classifier for the given sentinel kind.
    pub fn new(sentinel_kind: impl Into<String>) -> Self {
        Self {
            sentinel_kind: sentinel_kind.into(),
        }
    }

    /// Create a classifier and check the sentinel kind against a grammar.
    ///
    /// An unknown kind is not an error: every verdict simply comes out
    /// [`ScopeVerdict::Global`]. It is almost always a misconfiguration,
    /// so it is logged.
    pub fn for_language(language: &Language, sentinel_kind: impl Into<String>) -> Self {
        let classifier = Self::new(sentinel_kind);
        if language.id_for_node_kind(&classifier.sentinel_kind, true) == 0 {
            tracing::warn!(
                kind = %classifier.sentinel_kind,
                "sentinel kind does not exist in this grammar; every node will classify as global"
            );
        }
        classifier
    }

    /// The configured sentinel kind.
    pub fn sentinel_kind(&self) -> &str {
        &self.sentinel_kind
    }

    /// Classify a node by its strict ancestors.
    ///
    /// `Local` iff some ancestor reached via `parent()` has the sentinel
    /// kind. The starting node's own kind is not consulted, so the root is
    /// vacuously `Global` and a node that is itself a function definition
    /// does not count as local to itself. Cost is linear in node depth;
    /// read-only.
    pub fn classify(&self, node: Node<'_>) -> ScopeVerdict {
        if ancestors(node).any(|ancestor| ancestor.kind() == self.sentinel_kind) {
            ScopeVerdict::Local
        } else {
            ScopeVerdict::Global
        }
    }
}
