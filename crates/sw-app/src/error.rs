//! Error types for the sw-app service layer.

use std::path::PathBuf;

use sw_core::PanelId;

/// Application error type that wraps errors from the lower crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Tree error: {0}")]
    Tree(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read script file: {path}")]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script error: {0}")]
    Script(String),

    #[error("Parameter {ft_number} is not bound in panel {panel}")]
    ParameterNotFound { panel: PanelId, ft_number: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for sw-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sw_params::FixtureError> for AppError {
    fn from(err: sw_params::FixtureError) -> Self {
        AppError::Fixture(err.to_string())
    }
}

impl From<sw_tree::TreeError> for AppError {
    fn from(err: sw_tree::TreeError) -> Self {
        AppError::Tree(err.to_string())
    }
}

impl From<sw_layout::LayoutError> for AppError {
    fn from(err: sw_layout::LayoutError) -> Self {
        AppError::Layout(err.to_string())
    }
}

impl From<sw_core::CoreError> for AppError {
    fn from(err: sw_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
