//! Read-only node → parameter-set store.
//!
//! The table is built once from a validated fixture and shared behind an
//! `Arc`. Lookups are total: an unknown node yields no parameters and a
//! single placeholder status entry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::item::{ParameterItem, StatusEntry};
use crate::schema::FixtureFile;

#[derive(Debug)]
struct NodeEntry {
    name: String,
    parameters: Vec<ParameterItem>,
    status: Option<Vec<StatusEntry>>,
}

/// Immutable fixture table. Entries keep their authoring order.
#[derive(Debug, Default)]
pub struct ParameterTable {
    entries: Vec<NodeEntry>,
    by_name: HashMap<String, usize>,
}

impl ParameterTable {
    pub fn from_fixture(fixture: FixtureFile) -> Self {
        let mut table = Self::default();
        for node in fixture.nodes {
            // First definition wins; validated fixtures never hit this.
            if table.by_name.contains_key(&node.name) {
                continue;
            }
            table.by_name.insert(node.name.clone(), table.entries.len());
            table.entries.push(NodeEntry {
                name: node.name,
                parameters: node.parameters,
                status: node.status,
            });
        }
        table
    }

    fn get(&self, node_name: &str) -> Option<&NodeEntry> {
        self.by_name.get(node_name).map(|&i| &self.entries[i])
    }
}

/// Shared, cheaply clonable handle to a `ParameterTable`.
#[derive(Debug, Clone, Default)]
pub struct ParameterRepository {
    table: Arc<ParameterTable>,
}

impl ParameterRepository {
    pub fn new(table: ParameterTable) -> Self {
        debug!(nodes = table.entries.len(), "parameter repository built");
        Self {
            table: Arc::new(table),
        }
    }

    /// Ordered parameter set of `node_name`, empty if unknown.
    pub fn lookup_parameters(&self, node_name: &str) -> &[ParameterItem] {
        self.table
            .get(node_name)
            .map(|e| e.parameters.as_slice())
            .unwrap_or(&[])
    }

    /// Owned copy of the parameter set, used to bind a panel.
    pub fn snapshot(&self, node_name: &str) -> Vec<ParameterItem> {
        self.lookup_parameters(node_name).to_vec()
    }

    /// Status rows of `node_name`, or a one-row placeholder.
    pub fn lookup_status(&self, node_name: &str) -> Vec<StatusEntry> {
        match self.table.get(node_name).and_then(|e| e.status.as_ref()) {
            Some(status) => status.clone(),
            None => vec![StatusEntry::placeholder(node_name)],
        }
    }

    pub fn contains(&self, node_name: &str) -> bool {
        self.table.by_name.contains_key(node_name)
    }

    /// Node names in authoring order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.table.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }
}
