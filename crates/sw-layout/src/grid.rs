//! Grid geometry for the compare-panel area.

use serde::Serialize;
use sw_core::{PanelId, PanelSet};

use crate::error::{LayoutError, LayoutResult};

/// Gap left on each side of a shared panel edge, in layout units.
pub const SEAM_INSET: u16 = 2;

/// Per-edge margin of a placed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Insets {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Which of the three fixed arrangements a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arrangement {
    Single,
    SideBySide,
    Quad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub panel: PanelId,
    pub column: u8,
    pub row: u8,
    pub column_span: u8,
    pub row_span: u8,
    pub margin: Insets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub arrangement: Arrangement,
    pub columns: u8,
    pub rows: u8,
    /// Placements in natural panel order.
    pub placements: Vec<Placement>,
}

impl GridLayout {
    pub fn placement(&self, panel: PanelId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.panel == panel)
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    /// Grid cells `(column, row)` not covered by any placement, row-major.
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        let mut empty = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let covered = self.placements.iter().any(|p| {
                    column >= p.column
                        && column < p.column + p.column_span
                        && row >= p.row
                        && row < p.row + p.row_span
                });
                if !covered {
                    empty.push((column, row));
                }
            }
        }
        empty
    }

    pub fn visible(&self) -> PanelSet {
        self.placements.iter().map(|p| p.panel).collect()
    }
}

const SIDE_BY_SIDE: [(u8, Insets); 2] = [
    (0, Insets::new(0, 0, SEAM_INSET, 0)),
    (1, Insets::new(SEAM_INSET, 0, 0, 0)),
];

const QUAD: [(u8, u8, Insets); 4] = [
    (0, 0, Insets::new(0, 0, SEAM_INSET, SEAM_INSET)),
    (1, 0, Insets::new(SEAM_INSET, 0, 0, SEAM_INSET)),
    (0, 1, Insets::new(0, SEAM_INSET, SEAM_INSET, 0)),
    (1, 1, Insets::new(SEAM_INSET, SEAM_INSET, 0, 0)),
];

/// Arrange the visible panels.
///
/// The result depends only on set membership, never on the order in which
/// panels were opened.
pub fn compute_layout(visible: PanelSet) -> LayoutResult<GridLayout> {
    let panels: Vec<PanelId> = visible.iter().collect();

    let layout = match panels.len() {
        0 => return Err(LayoutError::NoVisiblePanels),
        1 => GridLayout {
            arrangement: Arrangement::Single,
            columns: 1,
            rows: 1,
            placements: vec![Placement {
                panel: panels[0],
                column: 0,
                row: 0,
                column_span: 1,
                row_span: 1,
                margin: Insets::ZERO,
            }],
        },
        2 => GridLayout {
            arrangement: Arrangement::SideBySide,
            columns: 2,
            rows: 1,
            placements: panels
                .iter()
                .zip(SIDE_BY_SIDE)
                .map(|(&panel, (column, margin))| Placement {
                    panel,
                    column,
                    row: 0,
                    column_span: 1,
                    row_span: 1,
                    margin,
                })
                .collect(),
        },
        // 3 or 4: fixed 2x2 frame, unused cells stay empty
        _ => GridLayout {
            arrangement: Arrangement::Quad,
            columns: 2,
            rows: 2,
            placements: panels
                .iter()
                .zip(QUAD)
                .map(|(&panel, (column, row, margin))| Placement {
                    panel,
                    column,
                    row,
                    column_span: 1,
                    row_span: 1,
                    margin,
                })
                .collect(),
        },
    };

    Ok(layout)
}
