//! Forest validation logic.

use std::collections::HashSet;

use crate::builder::Entry;
use crate::error::{TreeError, TreeResult};

/// Validate builder entries: names present and unique, parents exist and
/// precede their children.
pub(crate) fn validate_entries(entries: &[Entry]) -> TreeResult<HashSet<String>> {
    let mut names = HashSet::with_capacity(entries.len());

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(TreeError::EmptyName { node: entry.id });
        }

        if let Some(parent) = entry.parent {
            if parent.index() >= entry.id.index() {
                return Err(TreeError::InvalidParent {
                    node: entry.id,
                    parent,
                });
            }
        }

        if !names.insert(entry.name.clone()) {
            return Err(TreeError::DuplicateName {
                name: entry.name.clone(),
            });
        }
    }

    Ok(names)
}
