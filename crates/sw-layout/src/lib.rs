//! sw-layout: grid arrangement of the visible compare panels.
//!
//! `compute_layout` is a pure function of the visible set:
//! - 1 panel: one cell covering the whole area
//! - 2 panels: two equal columns with a seam between them
//! - 3 or 4 panels: a fixed 2×2 grid filled row-major in A, B, C, D order;
//!   with 3 panels the bottom-right cell stays empty
//!
//! # Example
//!
//! ```
//! use sw_core::{PanelId, PanelSet};
//! use sw_layout::compute_layout;
//!
//! let visible = PanelSet::single(PanelId::C).with(PanelId::A);
//! let layout = compute_layout(visible).unwrap();
//! assert_eq!(layout.columns, 2);
//! assert_eq!(layout.placement(PanelId::A).unwrap().column, 0);
//! assert_eq!(layout.placement(PanelId::C).unwrap().column, 1);
//! ```

pub mod error;
pub mod grid;

pub use error::{LayoutError, LayoutResult};
pub use grid::{Arrangement, GridLayout, Insets, Placement, SEAM_INSET, compute_layout};
