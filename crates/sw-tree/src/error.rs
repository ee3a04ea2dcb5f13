//! Tree construction errors.

use sw_core::NodeId;
use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A node was added with a blank name.
    #[error("Tree node {node} has an empty name")]
    EmptyName { node: NodeId },

    /// Node names are repository keys and must be unique across the forest.
    #[error("Duplicate tree node name: {name}")]
    DuplicateName { name: String },

    /// A child refers to a parent that was never added.
    #[error("Tree node {node} refers to non-existent parent {parent}")]
    InvalidParent { node: NodeId, parent: NodeId },
}
