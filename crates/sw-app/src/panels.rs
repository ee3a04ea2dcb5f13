//! Compare-panel state machine.
//!
//! Four fixed slots, at least one of which is always visible. The active
//! slot is always visible and receives tree selections. Each slot holds a
//! detached snapshot of its node's parameter set.

use sw_core::{PanelId, PanelSet};
use sw_params::{ParameterItem, ParameterRepository, StatusEntry};
use tracing::debug;

/// One compare panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSlot {
    visible: bool,
    /// Empty means the slot was never bound.
    bound_node: String,
    parameters: Vec<ParameterItem>,
}

impl PanelSlot {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_bound(&self) -> bool {
        !self.bound_node.is_empty()
    }

    pub fn bound_node(&self) -> Option<&str> {
        if self.is_bound() {
            Some(&self.bound_node)
        } else {
            None
        }
    }

    pub fn parameters(&self) -> &[ParameterItem] {
        &self.parameters
    }

    fn bind(&mut self, repository: &ParameterRepository, node_name: &str) {
        self.bound_node = node_name.to_string();
        self.parameters = repository.snapshot(node_name);
    }
}

/// What a visibility toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Hiding the last visible panel was refused.
    Ignored,
    /// The panel became visible and active.
    Shown { panel: PanelId, auto_loaded: bool },
    /// The panel was hidden; `active` is the active panel afterwards.
    Hidden { panel: PanelId, active: PanelId },
}

impl ToggleOutcome {
    pub fn changed_visibility(self) -> bool {
        !matches!(self, ToggleOutcome::Ignored)
    }
}

#[derive(Debug, Clone)]
pub struct PanelBoard {
    repository: ParameterRepository,
    slots: [PanelSlot; 4],
    active: PanelId,
    status: Vec<StatusEntry>,
}

impl PanelBoard {
    /// Panel A visible, active and bound to `initial_node`; B to D hidden
    /// and unbound.
    pub fn new(repository: ParameterRepository, initial_node: &str) -> Self {
        let mut slots: [PanelSlot; 4] = Default::default();
        slots[PanelId::A.index()].visible = true;
        slots[PanelId::A.index()].bind(&repository, initial_node);
        let status = repository.lookup_status(initial_node);

        Self {
            repository,
            slots,
            active: PanelId::A,
            status,
        }
    }

    pub fn repository(&self) -> &ParameterRepository {
        &self.repository
    }

    pub fn slot(&self, panel: PanelId) -> &PanelSlot {
        &self.slots[panel.index()]
    }

    pub fn active(&self) -> PanelId {
        self.active
    }

    pub fn active_slot(&self) -> &PanelSlot {
        self.slot(self.active)
    }

    pub fn visible(&self) -> PanelSet {
        PanelId::ALL
            .into_iter()
            .filter(|p| self.slot(*p).visible)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }

    /// Status rows of the node last routed into the board.
    pub fn status(&self) -> &[StatusEntry] {
        &self.status
    }

    /// Show or hide `panel`.
    ///
    /// A newly shown panel that was never bound loads `selected_node` so it
    /// does not open blank. Hiding the active panel hands activity to the
    /// lowest remaining visible panel.
    pub fn toggle_visibility(&mut self, panel: PanelId, selected_node: &str) -> ToggleOutcome {
        let was_visible = self.slot(panel).visible;
        if was_visible && self.visible_count() <= 1 {
            debug!(%panel, "refusing to hide the last visible panel");
            return ToggleOutcome::Ignored;
        }

        let slot = &mut self.slots[panel.index()];
        slot.visible = !was_visible;

        if was_visible {
            if self.active == panel {
                // visible_count was >= 2, so another panel remains
                if let Some(next) = self.visible().first() {
                    self.active = next;
                }
            }
            debug!(%panel, active = %self.active, "panel hidden");
            ToggleOutcome::Hidden {
                panel,
                active: self.active,
            }
        } else {
            let auto_loaded = !slot.is_bound();
            if auto_loaded {
                slot.bind(&self.repository, selected_node);
            }
            self.active = panel;
            debug!(%panel, auto_loaded, "panel shown");
            ToggleOutcome::Shown { panel, auto_loaded }
        }
    }

    /// Bind the active panel to `node_name` and refresh the status rows.
    /// Returns the panel that received the data.
    pub fn route_selection(&mut self, node_name: &str) -> PanelId {
        let panel = self.active;
        self.slots[panel.index()].bind(&self.repository, node_name);
        self.status = self.repository.lookup_status(node_name);
        debug!(%panel, node = node_name, "selection routed");
        panel
    }

    /// Re-snapshot `panel` from its bound node, discarding edits.
    /// Returns false for an unbound panel, which is left untouched.
    pub fn revert(&mut self, panel: PanelId) -> bool {
        let slot = &mut self.slots[panel.index()];
        if !slot.is_bound() {
            return false;
        }
        slot.parameters = self.repository.snapshot(&slot.bound_node);
        true
    }

    /// Change one value in the panel's snapshot. The repository is not
    /// touched. Returns false if `ft_number` is not in the panel.
    pub fn edit_value(&mut self, panel: PanelId, ft_number: &str, value: &str) -> bool {
        match self.slots[panel.index()]
            .parameters
            .iter_mut()
            .find(|p| p.ft_number == ft_number)
        {
            Some(item) => {
                item.value = value.to_string();
                true
            }
            None => false,
        }
    }
}
