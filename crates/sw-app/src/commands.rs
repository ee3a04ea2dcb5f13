//! Ribbon commands.
//!
//! There is no device link behind these: apart from `Revert` (re-snapshot
//! the active panel) and `Enable`/`DisableAll` (session flags) they only
//! produce an action message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sw_core::PanelId;
use tracing::info;

use crate::error::AppError;
use crate::panels::PanelBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Enable,
    DisableAll,
    ClearFaultAll,
    ReadAll,
    WriteAll,
    SaveToFlash,
    Compare,
    Export,
    Revert,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Enable,
        Command::DisableAll,
        Command::ClearFaultAll,
        Command::ReadAll,
        Command::WriteAll,
        Command::SaveToFlash,
        Command::Compare,
        Command::Export,
        Command::Revert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Enable => "enable",
            Command::DisableAll => "disable_all",
            Command::ClearFaultAll => "clear_fault_all",
            Command::ReadAll => "read_all",
            Command::WriteAll => "write_all",
            Command::SaveToFlash => "save_to_flash",
            Command::Compare => "compare",
            Command::Export => "export",
            Command::Revert => "revert",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Command::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown command: {}", s)))
    }
}

/// Drive arming and link state shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionState {
    pub is_enabled: bool,
    pub is_connected: bool,
    pub connection_status: String,
    pub mode_info: String,
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self {
            is_enabled: false,
            is_connected: false,
            connection_status: "Disconnected".to_string(),
            mode_info: "Offline".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub message: String,
    /// Panel whose data was re-snapshotted.
    pub reverted: Option<PanelId>,
    pub connection_changed: bool,
}

impl CommandOutcome {
    fn message(message: String) -> Self {
        Self {
            message,
            reverted: None,
            connection_changed: false,
        }
    }
}

/// Run `command` against the active panel.
pub fn execute(
    command: Command,
    board: &mut PanelBoard,
    connection: &mut ConnectionState,
) -> CommandOutcome {
    let panel = board.active();
    let count = board.active_slot().parameters().len();
    info!(%command, %panel, "dispatching command");

    match command {
        Command::Enable => {
            connection.is_enabled = true;
            connection.is_connected = true;
            connection.connection_status = "Connected".to_string();
            connection.mode_info = "Enabled".to_string();
            CommandOutcome {
                connection_changed: true,
                ..CommandOutcome::message("Drive enabled".to_string())
            }
        }
        Command::DisableAll => {
            connection.is_enabled = false;
            connection.mode_info = "Disabled".to_string();
            CommandOutcome {
                connection_changed: true,
                ..CommandOutcome::message("All drives disabled".to_string())
            }
        }
        Command::ClearFaultAll => CommandOutcome::message("All faults cleared".to_string()),
        Command::ReadAll => CommandOutcome::message(format!(
            "Read All [{panel}] — {count} parameters loaded"
        )),
        Command::WriteAll => CommandOutcome::message(format!(
            "Write All [{panel}] — {count} parameters written"
        )),
        Command::SaveToFlash => {
            CommandOutcome::message(format!("Parameters [{panel}] saved to flash"))
        }
        Command::Compare => CommandOutcome::message("Compare panel opened".to_string()),
        Command::Export => CommandOutcome::message(format!("Parameters [{panel}] exported")),
        Command::Revert => {
            let reverted = board.revert(panel).then_some(panel);
            CommandOutcome {
                reverted,
                ..CommandOutcome::message(format!(
                    "Parameters [{panel}] reverted to saved values"
                ))
            }
        }
    }
}
