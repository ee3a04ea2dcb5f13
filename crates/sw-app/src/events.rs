//! Synchronous change notifications.
//!
//! Listeners run on the caller's thread, in subscription order, at the end
//! of the operation that raised the event.

use std::fmt;

use serde::Serialize;
use sw_core::{PanelId, PanelSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkbenchEvent {
    /// The visible set changed; geometry must be recomputed.
    LayoutChanged { visible: PanelSet },
    /// The bound parameter list of one panel was replaced or edited.
    PanelDataChanged { panel: PanelId },
    /// The status pane was refreshed.
    StatusChanged,
    /// Enable/disable flags or connection text changed.
    ConnectionChanged,
    /// A command produced a new action message.
    ActionMessage { message: String },
}

impl fmt::Display for WorkbenchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkbenchEvent::LayoutChanged { visible } => write!(f, "layout-changed [{}]", visible),
            WorkbenchEvent::PanelDataChanged { panel } => write!(f, "data-changed {}", panel),
            WorkbenchEvent::StatusChanged => write!(f, "status-changed"),
            WorkbenchEvent::ConnectionChanged => write!(f, "connection-changed"),
            WorkbenchEvent::ActionMessage { message } => write!(f, "message \"{}\"", message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&WorkbenchEvent)>;

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WorkbenchEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, event: WorkbenchEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |e| first.borrow_mut().push(format!("1:{e}")));
        let second = Rc::clone(&log);
        bus.subscribe(move |e| second.borrow_mut().push(format!("2:{e}")));

        bus.publish(WorkbenchEvent::StatusChanged);
        assert_eq!(
            *log.borrow(),
            vec!["1:status-changed".to_string(), "2:status-changed".to_string()]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let sink = Rc::clone(&count);
        let id = bus.subscribe(move |_| *sink.borrow_mut() += 1);

        bus.publish(WorkbenchEvent::ConnectionChanged);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(WorkbenchEvent::ConnectionChanged);

        assert_eq!(*count.borrow(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn display_formats() {
        let visible = PanelSet::single(PanelId::A).with(PanelId::C);
        assert_eq!(
            WorkbenchEvent::LayoutChanged { visible }.to_string(),
            "layout-changed [A,C]"
        );
        assert_eq!(
            WorkbenchEvent::PanelDataChanged { panel: PanelId::B }.to_string(),
            "data-changed B"
        );
    }
}
