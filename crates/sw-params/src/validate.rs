//! Fixture validation logic.

use std::collections::HashSet;

use crate::schema::{FixtureFile, NodeFixture};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_fixture(fixture: &FixtureFile) -> Result<(), ValidationError> {
    if fixture.version == 0 || fixture.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: fixture.version,
        });
    }

    let mut names = HashSet::new();
    for node in &fixture.nodes {
        if node.name.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                context: "nodes".to_string(),
            });
        }
        if !names.insert(node.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.name.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    Ok(())
}

fn validate_node(node: &NodeFixture) -> Result<(), ValidationError> {
    let mut ft_numbers = HashSet::new();
    for item in &node.parameters {
        if item.ft_number.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("node '{}' parameters", node.name),
            });
        }
        if !ft_numbers.insert(item.ft_number.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: item.ft_number.clone(),
                context: format!("node '{}' parameters", node.name),
            });
        }
    }
    Ok(())
}
