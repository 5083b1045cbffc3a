//! Nested view of grouped tokens
//!
//! Nested outputs (Kotlin objects, Swift enums) mirror the canonical path hierarchy: every
//! segment but the last names a container, the last one names a member of that container.
//! Children live in a `BTreeMap` and leaves are pushed in the grouped (lexicographic) order, so a
//! depth-first walk of the tree is already sorted.

use crate::modes::{ModeGroups, ModePair};
use std::collections::BTreeMap;

/// A member of a container: the final canonical segment and its mode pair.
#[derive(Debug, Clone)]
pub struct Leaf<'a> {
    pub path: Vec<String>,
    pub pair: ModePair<'a>,
}

impl Leaf<'_> {
    /// The final canonical segment.
    pub fn key(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeNode<'a> {
    pub leaves: Vec<Leaf<'a>>,
    pub children: BTreeMap<String, TreeNode<'a>>,
}

impl TreeNode<'_> {
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.children.is_empty()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
            + self
                .children
                .values()
                .map(|child| child.leaf_count())
                .sum::<usize>()
    }
}

/// Builds the tree; empty canonical paths are skipped.
pub fn build<'a>(groups: &ModeGroups<'a>) -> TreeNode<'a> {
    let mut root = TreeNode::default();
    for (path, pair) in groups.iter() {
        let Some((_, parents)) = path.split_last() else {
            tracing::debug!("skipping token with empty path");
            continue;
        };
        let mut node = &mut root;
        for segment in parents {
            node = node.children.entry(segment.clone()).or_default();
        }
        node.leaves.push(Leaf {
            path: path.clone(),
            pair: *pair,
        });
    }
    root
}
