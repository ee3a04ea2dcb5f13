//! Fixture file schema.

use serde::{Deserialize, Serialize};

use crate::item::{ParameterItem, StatusEntry};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureFile {
    pub version: u32,
    #[serde(default)]
    pub nodes: Vec<NodeFixture>,
}

/// Parameter and status sets for one tree node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeFixture {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<StatusEntry>>,
}
