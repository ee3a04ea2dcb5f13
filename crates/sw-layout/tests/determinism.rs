//! Layout depends only on which panels are visible.

use proptest::prelude::*;
use sw_core::{PanelId, PanelSet};
use sw_layout::{Arrangement, compute_layout};

fn ids(indices: &[usize]) -> Vec<PanelId> {
    indices.iter().filter_map(|&i| PanelId::from_index(i)).collect()
}

#[test]
fn a_and_c_always_side_by_side() {
    let forward: PanelSet = [PanelId::A, PanelId::C].into_iter().collect();
    let backward: PanelSet = [PanelId::C, PanelId::A].into_iter().collect();
    let first = compute_layout(forward).unwrap();
    let second = compute_layout(backward).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.arrangement, Arrangement::SideBySide);
    assert_eq!(first.placements[0].panel, PanelId::A);
    assert_eq!(first.placements[1].panel, PanelId::C);
}

proptest! {
    #[test]
    fn toggle_order_is_irrelevant(order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(), take in 1usize..=4) {
        let chosen = ids(&order[..take]);
        let mut sorted = chosen.clone();
        sorted.sort();

        let shuffled: PanelSet = chosen.into_iter().collect();
        let natural: PanelSet = sorted.iter().copied().collect();
        let layout = compute_layout(shuffled).unwrap();
        prop_assert_eq!(&layout, &compute_layout(natural).unwrap());

        // Placements follow natural order and every visible panel is placed once
        let placed: Vec<PanelId> = layout.placements.iter().map(|p| p.panel).collect();
        prop_assert_eq!(placed, sorted);
        prop_assert_eq!(layout.empty_cells().len(), layout.cell_count() - take);
    }

    #[test]
    fn no_two_panels_share_a_cell(mask in 1u8..16) {
        let visible: PanelSet = PanelId::ALL
            .into_iter()
            .filter(|p| mask & (1 << p.index()) != 0)
            .collect();
        let layout = compute_layout(visible).unwrap();
        let mut cells: Vec<(u8, u8)> = layout.placements.iter().map(|p| (p.column, p.row)).collect();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), visible.len());
        prop_assert!(layout.placements.iter().all(|p| p.column < layout.columns && p.row < layout.rows));
    }
}
