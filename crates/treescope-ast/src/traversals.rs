/*
 * traversals.rs
 *
 * Copyright (c) 2025 Posit, PBC
 *
 * Generic traversal helpers for tree-sitter trees.
 *
 * These work with any tree-sitter grammar; nothing here inspects node
 * kinds beyond handing them to the caller.
 */

use tree_sitter::{Node, TreeCursor};

/// Iterator over the strict ancestors of a node, nearest parent first.
///
/// The starting node itself is not yielded. Parent links in tree-sitter are
/// non-owning handles into the tree's node table, so this walk borrows the
/// tree and never extends any lifetime.
#[derive(Debug, Clone)]
pub struct Ancestors<'tree> {
    current: Option<Node<'tree>>,
}

impl<'tree> Iterator for Ancestors<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Node<'tree>> {
        let parent = self.current.take()?.parent();
        self.current = parent;
        parent
    }
}

/// Iterate the strict ancestors of `node`, from its parent up to the root.
///
/// A root node yields nothing.
pub fn ancestors(node: Node<'_>) -> Ancestors<'_> {
    Ancestors {
        current: Some(node),
    }
}

/// Phase tracking for the bottom-up fold, holding accumulated children.
enum FoldPhase<'tree, T> {
    Enter(Node<'tree>),
    Siblings(Node<'tree>, Vec<T>),
    Exit(Node<'tree>),
}

/// Bottom-up fold over a tree-sitter tree.
///
/// Children are folded before their parent; the visitor receives each node
/// together with the already-folded results of its direct children, in
/// source order. The traversal keeps its own phase stack, so tree depth is
/// bounded by heap, not by the call stack.
///
/// # Arguments
/// * `cursor` - A tree-sitter cursor positioned at the starting node
/// * `visitor` - A function called once per node with its folded children
///
/// # Returns
/// The visitor's result for the starting node.
pub fn fold_tree<'tree, F, T>(cursor: &mut TreeCursor<'tree>, visitor: &mut F) -> T
where
    F: FnMut(Node<'tree>, Vec<T>) -> T,
{
    let mut stack: Vec<FoldPhase<'tree, T>> = vec![FoldPhase::Enter(cursor.node())];

    loop {
        let top = stack
            .pop()
            .expect("fold stack drains only when the root exits");
        match top {
            FoldPhase::Enter(node) => {
                stack.push(FoldPhase::Siblings(node, Vec::new()));
                if cursor.goto_first_child() {
                    stack.push(FoldPhase::Enter(cursor.node()));
                } else {
                    stack.push(FoldPhase::Exit(node));
                }
            }
            FoldPhase::Siblings(node, results) => {
                stack.push(FoldPhase::Siblings(node, results));
                if cursor.goto_next_sibling() {
                    stack.push(FoldPhase::Enter(cursor.node()));
                } else {
                    stack.push(FoldPhase::Exit(node));
                    cursor.goto_parent();
                }
            }
            FoldPhase::Exit(node) => {
                let Some(FoldPhase::Siblings(_, children)) = stack.pop() else {
                    unreachable!("an exit phase always sits above its siblings phase");
                };
                let result = visitor(node, children);
                match stack.last_mut() {
                    None => return result, // the starting node has exited
                    Some(FoldPhase::Siblings(_, parent_children)) => {
                        parent_children.push(result);
                    }
                    _ => {
                        unreachable!("an exit phase always sits above its siblings phase");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse_c(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn fold_visits_every_node_once() {
        // translation_unit > declaration > (primitive_type, identifier, ";")
        let tree = parse_c("int x;");
        let mut cursor = tree.walk();
        let total = fold_tree(&mut cursor, &mut |_node, children: Vec<usize>| {
            1 + children.iter().sum::<usize>()
        });
        assert_eq!(total, 5);
    }

    #[test]
    fn fold_preserves_source_order() {
        let tree = parse_c("int x;");
        let mut cursor = tree.walk();
        let leaves = fold_tree(&mut cursor, &mut |node, children: Vec<Vec<String>>| {
            if children.is_empty() {
                vec![node.kind().to_string()]
            } else {
                children.into_iter().flatten().collect()
            }
        });
        assert_eq!(leaves, vec!["primitive_type", "identifier", ";"]);
    }

    #[test]
    fn fold_starts_at_the_cursor_node() {
        let tree = parse_c("int x;");
        let declaration = tree.root_node().child(0).unwrap();
        let mut cursor = declaration.walk();
        let kinds = fold_tree(&mut cursor, &mut |node, children: Vec<Vec<String>>| {
            let mut kinds: Vec<String> = children.into_iter().flatten().collect();
            kinds.push(node.kind().to_string());
            kinds
        });
        assert_eq!(kinds.last().map(String::as_str), Some("declaration"));
        assert!(!kinds.iter().any(|k| k == "translation_unit"));
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let tree = parse_c("int x;");
        let identifier = tree
            .root_node()
            .descendant_for_byte_range(4, 5)
            .expect("identifier node");
        assert_eq!(identifier.kind(), "identifier");

        let kinds: Vec<&str> = ancestors(identifier).map(|n| n.kind()).collect();
        assert_eq!(kinds, vec!["declaration", "translation_unit"]);
    }

    #[test]
    fn ancestors_of_the_root_are_empty() {
        let tree = parse_c("int x;");
        assert_eq!(ancestors(tree.root_node()).count(), 0);
    }
}
