//! sw-core: stable foundation for the servo workbench.
//!
//! Contains:
//! - panel (closed `PanelId` enum + `PanelSet` bit set)
//! - ids (compact arena handles for tree nodes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod panel;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use panel::{PanelId, PanelSet};
