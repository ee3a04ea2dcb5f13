//! Shared application service layer for the servo workbench.
//!
//! This crate owns the session state a front end drives: which compare
//! panels are visible, which node each panel shows, the active panel,
//! the status pane and the stub device commands. Front ends talk to a
//! [`Workbench`] and listen for [`WorkbenchEvent`]s; all work happens
//! synchronously on the caller's thread.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod panels;
pub mod script;
pub mod snapshot;
pub mod workbench;

// Re-export key types for convenience
pub use commands::{Command, CommandOutcome, ConnectionState};
pub use config::{ViewOptions, ViewPane, WorkbenchConfig};
pub use error::{AppError, AppResult};
pub use events::{EventBus, ListenerId, WorkbenchEvent};
pub use panels::{PanelBoard, PanelSlot, ToggleOutcome};
pub use script::{ScriptStep, SessionScript, Transcript, TranscriptEntry, run_script};
pub use snapshot::{PanelSummary, WorkbenchSnapshot};
pub use workbench::Workbench;

pub use sw_core::{PanelId, PanelSet};
