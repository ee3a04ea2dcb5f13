//! Incremental forest builder.

use sw_core::NodeId;

use crate::error::TreeResult;
use crate::forest::{DEFAULT_GLYPH, DriveForest, TreeNode};
use crate::validate;

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) name: String,
    pub(crate) glyph: String,
    pub(crate) expanded: bool,
}

/// Arena of tree entries in insertion order.
///
/// Parents must be added before their children. `build()` checks names
/// and parent links, then nests the entries into a `DriveForest`.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    entries: Vec<Entry>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node and return its ID.
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeId {
        self.push(None, name.into())
    }

    /// Add a node under `parent` and return its ID.
    ///
    /// Children keep insertion order.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.push(Some(parent), name.into())
    }

    pub fn set_expanded(&mut self, node: NodeId, expanded: bool) {
        if let Some(entry) = self.entries.get_mut(node.index()) {
            entry.expanded = expanded;
        }
    }

    pub fn set_glyph(&mut self, node: NodeId, glyph: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(node.index()) {
            entry.glyph = glyph.into();
        }
    }

    fn push(&mut self, parent: Option<NodeId>, name: String) -> NodeId {
        let id = NodeId::from_index(self.entries.len());
        self.entries.push(Entry {
            id,
            parent,
            name,
            glyph: DEFAULT_GLYPH.to_string(),
            expanded: false,
        });
        id
    }

    /// Validate and freeze the forest.
    pub fn build(self) -> TreeResult<DriveForest> {
        let names = validate::validate_entries(&self.entries)?;

        // Parent -> children adjacency, in insertion order
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); self.entries.len()];
        let mut roots = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            match entry.parent {
                Some(parent) => children[parent.index()].push(i),
                None => roots.push(i),
            }
        }

        let roots = roots
            .into_iter()
            .map(|i| assemble(i, &self.entries, &children))
            .collect();

        Ok(DriveForest { roots, names })
    }
}

fn assemble(index: usize, entries: &[Entry], children: &[Vec<usize>]) -> TreeNode {
    let entry = &entries[index];
    TreeNode {
        name: entry.name.clone(),
        glyph: entry.glyph.clone(),
        expanded: entry.expanded,
        children: children[index]
            .iter()
            .map(|&child| assemble(child, entries, children))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;

    #[test]
    fn builder_basic() {
        let mut builder = TreeBuilder::new();
        let r = builder.add_root("Root");
        let a = builder.add_child(r, "A");
        let b = builder.add_child(r, "B");

        assert_eq!(r.index(), 0);
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 2);
        assert_eq!(builder.entries.len(), 3);
        assert_eq!(builder.entries[2].parent, Some(r));
    }

    #[test]
    fn builder_keeps_child_order() {
        let mut builder = TreeBuilder::new();
        let r = builder.add_root("Root");
        builder.add_child(r, "Zeta");
        let g = builder.add_child(r, "Group");
        builder.add_child(r, "Alpha");
        builder.add_child(g, "Inner");
        builder.set_expanded(r, true);
        builder.set_glyph(g, "*");

        let forest = builder.build().unwrap();
        let root = &forest.roots()[0];
        assert!(root.expanded);
        let names: Vec<_> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Group", "Alpha"]);
        assert_eq!(root.children[1].glyph, "*");
        assert_eq!(root.children[1].children[0].name, "Inner");
        assert_eq!(root.children[0].glyph, DEFAULT_GLYPH);
    }

    #[test]
    fn build_rejects_duplicates() {
        let mut builder = TreeBuilder::new();
        let r = builder.add_root("Root");
        builder.add_child(r, "Motor");
        builder.add_child(r, "Motor");
        assert_eq!(
            builder.build().unwrap_err(),
            TreeError::DuplicateName {
                name: "Motor".to_string()
            }
        );
    }

    #[test]
    fn build_rejects_dangling_parent() {
        let mut builder = TreeBuilder::new();
        builder.add_root("Root");
        builder.add_child(NodeId::from_index(9), "Orphan");
        assert!(matches!(
            builder.build(),
            Err(TreeError::InvalidParent { .. })
        ));
    }

    #[test]
    fn build_rejects_empty_name() {
        let mut builder = TreeBuilder::new();
        builder.add_root(" ");
        assert!(matches!(builder.build(), Err(TreeError::EmptyName { .. })));
    }
}
