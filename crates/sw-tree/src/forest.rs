//! Frozen navigation forest.

use std::collections::HashSet;

/// Glyph used when a node does not set its own (folder icon).
pub const DEFAULT_GLYPH: &str = "\u{E8B7}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub glyph: String,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable set of independent tree roots.
#[derive(Debug, Clone, Default)]
pub struct DriveForest {
    pub(crate) roots: Vec<TreeNode>,
    pub(crate) names: HashSet<String>,
}

impl DriveForest {
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&TreeNode> {
        self.walk()
            .into_iter()
            .map(|(_, node)| node)
            .find(|node| node.name == name)
    }

    /// Pre-order traversal with depth (roots are depth 0).
    pub fn walk(&self) -> Vec<(usize, &TreeNode)> {
        let mut out = Vec::with_capacity(self.names.len());
        let mut stack: Vec<(usize, &TreeNode)> =
            self.roots.iter().rev().map(|root| (0, root)).collect();
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
        out
    }

    /// Leaf names in display order.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.name.as_str())
            .collect()
    }

    /// Leaves for which `has_data` is false, i.e. selectable nodes that
    /// would bind an empty panel.
    pub fn unbound_leaves(&self, has_data: impl Fn(&str) -> bool) -> Vec<&str> {
        self.leaf_names()
            .into_iter()
            .filter(|name| !has_data(*name))
            .collect()
    }
}
