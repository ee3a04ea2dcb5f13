//! Workbench configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sw_params::ParameterRepository;
use tracing::info;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Prefix of the window title.
    pub app_name: String,
    /// Node bound into panel A at startup.
    pub initial_node: String,
    pub drive_info: String,
    pub selected_port: String,
    pub view: ViewOptions,
    /// External fixture replacing the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            app_name: "RswareDesign".to_string(),
            initial_node: "ECAT Homing".to_string(),
            drive_info: "CSD7N".to_string(),
            selected_port: "COM3".to_string(),
            view: ViewOptions::default(),
            fixture_path: None,
        }
    }
}

impl WorkbenchConfig {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        // An empty document deserializes as unit, not as a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))
    }

    pub fn load_yaml(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Build the parameter repository this config points at.
    pub fn load_repository(&self) -> AppResult<ParameterRepository> {
        match &self.fixture_path {
            Some(path) => {
                info!(path = %path.display(), "loading external fixture");
                let fixture = sw_params::load_yaml(path)?;
                Ok(ParameterRepository::new(
                    sw_params::ParameterTable::from_fixture(fixture),
                ))
            }
            None => Ok(sw_params::builtin_repository()?),
        }
    }
}

/// Visibility of the auxiliary panes around the compare area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub show_helps: bool,
    pub show_status: bool,
    pub show_commands: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_helps: false,
            show_status: true,
            show_commands: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPane {
    Helps,
    Status,
    Commands,
}

impl ViewOptions {
    /// Flip one pane and return its new visibility.
    pub fn toggle(&mut self, pane: ViewPane) -> bool {
        let flag = match pane {
            ViewPane::Helps => &mut self.show_helps,
            ViewPane::Status => &mut self.show_status,
            ViewPane::Commands => &mut self.show_commands,
        };
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            WorkbenchConfig::from_yaml_str("").unwrap(),
            WorkbenchConfig::default()
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = WorkbenchConfig::from_yaml_str(
            "initial_node: Motor\nview:\n  show_helps: true\n",
        )
        .unwrap();
        assert_eq!(config.initial_node, "Motor");
        assert_eq!(config.drive_info, "CSD7N");
        assert!(config.view.show_helps);
        assert!(config.view.show_status);
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = WorkbenchConfig::from_yaml_str("initial_node: [").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn toggle_view_pane() {
        let mut view = ViewOptions::default();
        assert!(!view.toggle(ViewPane::Status));
        assert!(view.toggle(ViewPane::Helps));
        assert!(view.toggle(ViewPane::Status));
        assert!(view.show_commands);
    }

    #[test]
    fn builtin_repository_by_default() {
        let repo = WorkbenchConfig::default().load_repository().unwrap();
        assert_eq!(repo.lookup_parameters("ECAT Homing").len(), 8);
    }
}
