/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Syntax tree inspection core for treescope.
//!
//! Given a tree-sitter parse tree, this crate answers a structural question
//! about each node a query pattern captures: is the occurrence declared at
//! file (global) scope, or nested inside a function body? It also converts
//! subtrees into owned, JSON-serializable documents.
//!
//! Tokenizing, grammar construction, tree building, and pattern evaluation
//! all belong to tree-sitter; the pieces here operate purely on an
//! already-parsed tree:
//!
//! - [`SourceBuffer`]: sole owner of the raw input bytes
//! - [`TreeSerializer`]: subtree → owned [`CstNode`] document
//! - [`ScopeClassifier`]: ancestor walk → [`ScopeVerdict`]
//! - [`CaptureQueryRunner`]: pattern text → ordered [`Capture`]s
//! - [`Reporter`]: one `"<span>: global:<True|False>"` line per capture
//!
//! # Example
//!
//! ```ignore
//! use treescope_core::{
//!     parse_source, CaptureQueryRunner, Reporter, ScopeClassifier, SourceBuffer,
//! };
//!
//! let buffer = SourceBuffer::from("int x;");
//! let language = tree_sitter_c::LANGUAGE.into();
//! let tree = parse_source(&language, &buffer)?;
//!
//! let runner = CaptureQueryRunner::new(&language, "(declaration (identifier) @id)")?;
//! let captures = runner.run(tree.root_node(), buffer.as_bytes());
//!
//! let classifier = ScopeClassifier::default();
//! Reporter::new(&buffer, &classifier).report(&captures, &mut std::io::stdout())?;
//! // prints: x: global:True
//! ```

pub mod buffer;
pub mod error;
pub mod parse;
pub mod query;
pub mod report;
pub mod scope;
pub mod serialize;

// Re-export main types at crate root
pub use buffer::SourceBuffer;
pub use error::{TreescopeError, TreescopeResult};
pub use parse::parse_source;
pub use query::{Capture, CaptureQueryRunner};
pub use report::Reporter;
pub use scope::{ScopeClassifier, ScopeVerdict, DEFAULT_FUNCTION_KIND};
pub use serialize::{CstNode, TreeSerializer, DEFAULT_STRING_KIND};
