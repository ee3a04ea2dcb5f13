//! Scripted sessions.
//!
//! A session script is a YAML list of front-end gestures replayed against a
//! `Workbench`:
//!
//! ```yaml
//! steps:
//!   - toggle: B
//!   - select: Motor
//!   - edit: { panel: B, ft_number: "Ft-1.01", value: "2500" }
//!   - command: revert
//!   - view: helps
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use sw_core::PanelId;

use crate::commands::Command;
use crate::config::ViewPane;
use crate::error::{AppError, AppResult};
use crate::events::WorkbenchEvent;
use crate::panels::ToggleOutcome;
use crate::workbench::Workbench;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Select(String),
    Toggle(PanelId),
    Command(Command),
    Edit {
        panel: PanelId,
        ft_number: String,
        value: String,
    },
    View(ViewPane),
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Select(node) => write!(f, "select {}", node),
            ScriptStep::Toggle(panel) => write!(f, "toggle {}", panel),
            ScriptStep::Command(command) => write!(f, "command {}", command),
            ScriptStep::Edit {
                panel,
                ft_number,
                value,
            } => write!(f, "edit {} {} = {}", panel, ft_number, value),
            ScriptStep::View(pane) => write!(f, "view {:?}", pane),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScript {
    // Steps are written as one-key maps (`- toggle: B`), not YAML tags
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<ScriptStep>,
}

impl SessionScript {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Script(format!("Failed to parse script YAML: {}", e)))
    }

    pub fn load_yaml(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ScriptRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub step: String,
    pub message: Option<String>,
    pub events: Vec<WorkbenchEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

/// Replay `script` step by step, collecting the events each step raised.
///
/// Stops at the first failing step.
pub fn run_script(workbench: &mut Workbench, script: &SessionScript) -> AppResult<Transcript> {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let listener = workbench.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let result = replay(workbench, script, &captured);
    workbench.unsubscribe(listener);
    result
}

fn replay(
    workbench: &mut Workbench,
    script: &SessionScript,
    captured: &RefCell<Vec<WorkbenchEvent>>,
) -> AppResult<Transcript> {
    let mut transcript = Transcript::default();

    for step in &script.steps {
        let message = apply(workbench, step)?;
        let events = captured.borrow_mut().drain(..).collect();
        transcript.entries.push(TranscriptEntry {
            step: step.to_string(),
            message,
            events,
        });
    }

    Ok(transcript)
}

fn apply(workbench: &mut Workbench, step: &ScriptStep) -> AppResult<Option<String>> {
    let message = match step {
        ScriptStep::Select(node) => {
            workbench.select_node(node);
            None
        }
        ScriptStep::Toggle(panel) => match workbench.toggle_visibility(*panel) {
            ToggleOutcome::Ignored => Some(format!("{} is the last visible panel", panel.label())),
            _ => None,
        },
        ScriptStep::Command(command) => Some(workbench.dispatch(*command)),
        ScriptStep::Edit {
            panel,
            ft_number,
            value,
        } => {
            workbench.edit_value(*panel, ft_number, value)?;
            None
        }
        ScriptStep::View(pane) => {
            let shown = workbench.toggle_view(*pane);
            Some(format!("{:?} pane {}", pane, if shown { "shown" } else { "hidden" }))
        }
    };
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_step_kinds() {
        let script = SessionScript::from_yaml_str(
            r#"
steps:
  - select: Motor
  - toggle: B
  - command: read_all
  - edit: { panel: A, ft_number: "Ft-1.01", value: "2500" }
  - view: status
"#,
        )
        .unwrap();
        assert_eq!(
            script.steps,
            vec![
                ScriptStep::Select("Motor".to_string()),
                ScriptStep::Toggle(PanelId::B),
                ScriptStep::Command(Command::ReadAll),
                ScriptStep::Edit {
                    panel: PanelId::A,
                    ft_number: "Ft-1.01".to_string(),
                    value: "2500".to_string(),
                },
                ScriptStep::View(ViewPane::Status),
            ]
        );
    }

    #[test]
    fn invalid_panel_is_rejected_at_parse_time() {
        let err = SessionScript::from_yaml_str("steps:\n  - toggle: E\n").unwrap_err();
        match err {
            AppError::Script(message) => assert!(
                message.contains("Invalid panel id"),
                "unexpected message: {message}"
            ),
            other => panic!("expected a script error, got {other:?}"),
        }
    }

    #[test]
    fn map_form_steps_parse_like_the_demo() {
        let demo = include_str!("../../../demos/compare_session.yaml");
        let script = SessionScript::from_yaml_str(demo).unwrap();
        assert_eq!(script.steps.len(), 10);
        assert_eq!(script.steps[0], ScriptStep::Toggle(PanelId::B));
        assert_eq!(script.steps[9], ScriptStep::View(ViewPane::Helps));
    }

    #[test]
    fn failed_step_removes_listener() {
        let mut bench = Workbench::with_defaults().unwrap();
        let script = SessionScript {
            steps: vec![ScriptStep::Edit {
                panel: PanelId::A,
                ft_number: "nope".to_string(),
                value: "1".to_string(),
            }],
        };
        let err = run_script(&mut bench, &script).unwrap_err();
        assert!(matches!(err, AppError::ParameterNotFound { .. }));
        assert_eq!(bench.listener_count(), 0);
    }
}
