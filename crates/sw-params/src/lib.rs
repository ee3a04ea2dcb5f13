//! sw-params: parameter records, fixture file format and the read-only
//! node → parameter-set repository.

pub mod item;
pub mod repository;
pub mod schema;
pub mod validate;

pub use item::{ParameterItem, StatusEntry};
pub use repository::{ParameterRepository, ParameterTable};
pub use schema::{FixtureFile, NodeFixture};
pub use validate::{ValidationError, validate_fixture};

/// Fixture shipped with the workbench, embedded at compile time.
pub const BUILTIN_FIXTURE: &str = include_str!("../fixtures/drive.yaml");

/// Latest fixture schema version understood by this crate.
pub const LATEST_VERSION: u32 = 1;

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn parse_yaml(content: &str) -> FixtureResult<FixtureFile> {
    let fixture: FixtureFile = serde_yaml::from_str(content)?;
    validate_fixture(&fixture)?;
    Ok(fixture)
}

pub fn load_yaml(path: &std::path::Path) -> FixtureResult<FixtureFile> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Parse and validate the embedded fixture.
pub fn builtin_fixture() -> FixtureResult<FixtureFile> {
    parse_yaml(BUILTIN_FIXTURE)
}

/// Repository over the embedded fixture.
pub fn builtin_repository() -> FixtureResult<ParameterRepository> {
    Ok(ParameterRepository::new(ParameterTable::from_fixture(
        builtin_fixture()?,
    )))
}
