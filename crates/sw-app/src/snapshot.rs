//! Serializable view of a workbench session.

use serde::Serialize;
use sw_core::{PanelId, PanelSet};
use sw_layout::GridLayout;
use sw_params::StatusEntry;

use crate::commands::ConnectionState;
use crate::config::ViewOptions;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSummary {
    pub panel: PanelId,
    pub label: String,
    pub visible: bool,
    pub active: bool,
    /// Empty when the panel was never bound.
    pub bound_node: String,
    pub parameter_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbenchSnapshot {
    pub title: String,
    pub selected_node: String,
    pub active_panel: PanelId,
    pub visible: PanelSet,
    pub panels: Vec<PanelSummary>,
    pub status: Vec<StatusEntry>,
    pub connection: ConnectionState,
    pub drive_info: String,
    pub selected_port: String,
    pub action_message: String,
    pub view: ViewOptions,
    pub layout: GridLayout,
}
