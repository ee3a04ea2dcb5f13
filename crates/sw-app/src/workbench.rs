//! Workbench session: the single entry point for a front end.
//!
//! Tree selections, panel toggles, command buttons and cell edits all go
//! through `Workbench`, which updates the panel board and then publishes
//! the matching `WorkbenchEvent`s.

use sw_core::{PanelId, PanelSet};
use sw_layout::{GridLayout, compute_layout};
use sw_params::{ParameterRepository, StatusEntry};
use sw_tree::DriveForest;
use tracing::{info, warn};

use crate::commands::{self, Command, ConnectionState};
use crate::config::{ViewOptions, ViewPane, WorkbenchConfig};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ListenerId, WorkbenchEvent};
use crate::panels::{PanelBoard, PanelSlot, ToggleOutcome};
use crate::snapshot::{PanelSummary, WorkbenchSnapshot};

#[derive(Debug)]
pub struct Workbench {
    config: WorkbenchConfig,
    forest: DriveForest,
    board: PanelBoard,
    selected_node: String,
    title: String,
    connection: ConnectionState,
    view: ViewOptions,
    action_message: String,
    bus: EventBus,
}

impl Workbench {
    pub fn new(
        config: WorkbenchConfig,
        repository: ParameterRepository,
        forest: DriveForest,
    ) -> Self {
        let initial = config.initial_node.clone();
        if !forest.contains(&initial) {
            warn!(node = %initial, "initial node is not in the navigation tree");
        }
        info!(
            node = %initial,
            parameter_sets = repository.len(),
            tree_nodes = forest.len(),
            "workbench started"
        );

        let board = PanelBoard::new(repository, &initial);
        let title = title_for(&config.app_name, &initial);
        let view = config.view;

        Self {
            config,
            forest,
            board,
            selected_node: initial,
            title,
            connection: ConnectionState::default(),
            view,
            action_message: String::new(),
            bus: EventBus::new(),
        }
    }

    /// Load the repository named by `config` and the built-in drive tree.
    pub fn from_config(config: WorkbenchConfig) -> AppResult<Self> {
        let repository = config.load_repository()?;
        let forest = sw_tree::drive_forest()?;
        Ok(Self::new(config, repository, forest))
    }

    pub fn with_defaults() -> AppResult<Self> {
        Self::from_config(WorkbenchConfig::default())
    }

    // --- queries -------------------------------------------------------

    pub fn repository(&self) -> &ParameterRepository {
        self.board.repository()
    }

    pub fn forest(&self) -> &DriveForest {
        &self.forest
    }

    pub fn panel(&self, panel: PanelId) -> &PanelSlot {
        self.board.slot(panel)
    }

    pub fn active_panel(&self) -> PanelId {
        self.board.active()
    }

    pub fn visible_panels(&self) -> PanelSet {
        self.board.visible()
    }

    pub fn visible_count(&self) -> usize {
        self.board.visible_count()
    }

    pub fn selected_node(&self) -> &str {
        &self.selected_node
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status_entries(&self) -> &[StatusEntry] {
        self.board.status()
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn view(&self) -> ViewOptions {
        self.view
    }

    pub fn action_message(&self) -> &str {
        &self.action_message
    }

    pub fn drive_info(&self) -> &str {
        &self.config.drive_info
    }

    pub fn selected_port(&self) -> &str {
        &self.config.selected_port
    }

    /// Grid arrangement of the currently visible panels.
    pub fn layout(&self) -> AppResult<GridLayout> {
        Ok(compute_layout(self.board.visible())?)
    }

    // --- listeners -----------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(&WorkbenchEvent) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.bus.len()
    }

    // --- operations ----------------------------------------------------

    /// Tree selection: remember the node, retitle, and load it into the
    /// active panel.
    pub fn select_node(&mut self, name: &str) {
        if !self.forest.contains(name) {
            warn!(node = name, "selected node is not in the navigation tree");
        }
        self.selected_node = name.to_string();
        self.title = title_for(&self.config.app_name, name);
        self.route_selection(name);
    }

    /// Bind the active panel to `name` without changing the selection.
    pub fn route_selection(&mut self, name: &str) {
        let panel = self.board.route_selection(name);
        self.bus.publish(WorkbenchEvent::PanelDataChanged { panel });
        self.bus.publish(WorkbenchEvent::StatusChanged);
    }

    /// Show or hide a panel. Hiding the last visible panel is ignored.
    pub fn toggle_visibility(&mut self, panel: PanelId) -> ToggleOutcome {
        let outcome = self.board.toggle_visibility(panel, &self.selected_node);
        if let ToggleOutcome::Shown {
            auto_loaded: true, ..
        } = outcome
        {
            self.bus.publish(WorkbenchEvent::PanelDataChanged { panel });
        }
        if outcome.changed_visibility() {
            self.bus.publish(WorkbenchEvent::LayoutChanged {
                visible: self.board.visible(),
            });
        }
        outcome
    }

    /// Run a ribbon command and return its action message.
    pub fn dispatch(&mut self, command: Command) -> String {
        let outcome = commands::execute(command, &mut self.board, &mut self.connection);
        self.action_message = outcome.message.clone();

        if let Some(panel) = outcome.reverted {
            self.bus.publish(WorkbenchEvent::PanelDataChanged { panel });
        }
        if outcome.connection_changed {
            self.bus.publish(WorkbenchEvent::ConnectionChanged);
        }
        self.bus.publish(WorkbenchEvent::ActionMessage {
            message: outcome.message.clone(),
        });
        outcome.message
    }

    /// Edit one value in a panel's snapshot. Revert restores it.
    pub fn edit_value(&mut self, panel: PanelId, ft_number: &str, value: &str) -> AppResult<()> {
        if !self.board.edit_value(panel, ft_number, value) {
            return Err(AppError::ParameterNotFound {
                panel,
                ft_number: ft_number.to_string(),
            });
        }
        self.bus.publish(WorkbenchEvent::PanelDataChanged { panel });
        Ok(())
    }

    /// Flip an auxiliary pane and return its new visibility.
    pub fn toggle_view(&mut self, pane: ViewPane) -> bool {
        self.view.toggle(pane)
    }

    pub fn snapshot(&self) -> AppResult<WorkbenchSnapshot> {
        let active = self.board.active();
        let panels = PanelId::ALL
            .into_iter()
            .map(|panel| {
                let slot = self.board.slot(panel);
                PanelSummary {
                    panel,
                    label: panel.label(),
                    visible: slot.is_visible(),
                    active: panel == active,
                    bound_node: slot.bound_node().unwrap_or_default().to_string(),
                    parameter_count: slot.parameters().len(),
                }
            })
            .collect();

        Ok(WorkbenchSnapshot {
            title: self.title.clone(),
            selected_node: self.selected_node.clone(),
            active_panel: active,
            visible: self.board.visible(),
            panels,
            status: self.board.status().to_vec(),
            connection: self.connection.clone(),
            drive_info: self.config.drive_info.clone(),
            selected_port: self.config.selected_port.clone(),
            action_message: self.action_message.clone(),
            view: self.view,
            layout: self.layout()?,
        })
    }
}

fn title_for(app_name: &str, node: &str) -> String {
    format!("{} - [Drive - {}]", app_name, node)
}
