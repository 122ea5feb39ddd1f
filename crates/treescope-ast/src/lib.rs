/*
 * lib.rs
 *
 * Copyright (c) 2025 Posit, PBC
 *
 * treescope-ast: Generic tree-sitter traversal utilities.
 *
 * This crate provides grammar-agnostic infrastructure for walking
 * tree-sitter parse trees:
 *
 * - An ancestor iterator over parent links
 * - An explicit-stack bottom-up fold over a TreeCursor
 */

pub mod traversals;

// Re-export commonly used items at crate root
pub use traversals::{ancestors, fold_tree, Ancestors};
