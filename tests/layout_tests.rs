//! Geometry properties: determinism, fan symmetry, grid wrapping, mapping.

use std::collections::HashSet;

use ccg_table::core::{GameVariant, PlayerId};
use ccg_table::device::LayoutProfile;
use ccg_table::layout::{arrange, grid_cell, map_2d, map_3d, ArrangeConfig, Size, ZoneParams};
use ccg_table::zones::{LayoutKind, ZoneId};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = LayoutKind> {
    prop_oneof![Just(LayoutKind::Stack), Just(LayoutKind::Fan), Just(LayoutKind::Grid)]
}

proptest! {
    /// Same inputs, same slots.
    #[test]
    fn prop_arrange_is_deterministic(
        layout in layout_strategy(),
        count in 0usize..40,
        zone_w in 1.0f32..2000.0,
        zone_h in 1.0f32..600.0,
        max_rows in 1u32..4,
        overlap in 0.0f32..0.9,
    ) {
        let zone = Size::new(zone_w, zone_h);
        let card = Size::new(80.0, 112.0);
        let params = ZoneParams::new(8.0, max_rows, overlap);
        let config = ArrangeConfig::default();

        let first = arrange(layout, zone, card, count, &params, &config);
        let second = arrange(layout, zone, card, count, &params, &config);

        prop_assert_eq!(first.len(), count);
        prop_assert_eq!(first, second);
    }

    /// Fan rotations mirror around the center and never decrease.
    #[test]
    fn prop_fan_symmetric_and_monotonic(count in 1usize..30, zone_w in 100.0f32..1500.0) {
        let slots = arrange(
            LayoutKind::Fan,
            Size::new(zone_w, 120.0),
            Size::new(60.0, 84.0),
            count,
            &ZoneParams::default(),
            &ArrangeConfig::default(),
        );
        let limit = ArrangeConfig::default().fan_max_degrees;

        for i in 0..count {
            let j = count - 1 - i;
            prop_assert!((slots[i].rotation_deg + slots[j].rotation_deg).abs() < 1e-4);
            prop_assert!((slots[i].dx + slots[j].dx).abs() < 1e-2);
            prop_assert!(slots[i].rotation_deg.abs() <= limit);
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[1].rotation_deg >= pair[0].rotation_deg);
            prop_assert!(pair[1].dx >= pair[0].dx);
        }
        if count % 2 == 1 {
            prop_assert_eq!(slots[count / 2].rotation_deg, 0.0);
        }
    }

    /// The card at floor(N/2) is the least rotated, and tilt grows away from it.
    #[test]
    fn prop_fan_tilt_grows_from_center(count in 1usize..30, zone_w in 100.0f32..1500.0) {
        let slots = arrange(
            LayoutKind::Fan,
            Size::new(zone_w, 120.0),
            Size::new(60.0, 84.0),
            count,
            &ZoneParams::default(),
            &ArrangeConfig::default(),
        );
        let tilt: Vec<f32> = slots.iter().map(|slot| slot.rotation_deg.abs()).collect();
        let center = count / 2;

        for &t in &tilt {
            prop_assert!(t + 1e-4 >= tilt[center]);
        }
        for i in center + 1..count {
            prop_assert!(tilt[i] + 1e-4 >= tilt[i - 1]);
        }
        for i in 0..center {
            prop_assert!(tilt[i] + 1e-4 >= tilt[i + 1]);
        }
    }

    /// Grid cells are distinct and respect the row limit.
    #[test]
    fn prop_grid_wraps(count in 1usize..50, max_rows in 1u32..5) {
        let mut seen = HashSet::new();
        for index in 0..count {
            let (row, col, columns) = grid_cell(index, count, max_rows);
            prop_assert!(row < max_rows as usize);
            prop_assert!(col < columns);
            prop_assert!(seen.insert((row, col)));
        }
    }

    /// Mapping is stable for any viewport and keeps the world width.
    #[test]
    fn prop_map_3d_idempotent(width in 200.0f32..4000.0, height in 200.0f32..3000.0, world in 1.0f32..100.0) {
        let zones = LayoutProfile::desktop()
            .declared_zones(GameVariant::Konivrer, PlayerId::new(0))
            .unwrap();
        let viewport = Size::new(width, height);

        let first = map_3d(&zones, viewport, world);
        let second = map_3d(&zones, viewport, world);

        prop_assert_eq!(&first, &second);
        prop_assert!((first.world.width - world).abs() < 1e-3 * world);
        prop_assert!(first.world.height.is_finite() && first.world.height > 0.0);
    }
}

#[test]
fn test_grid_wrap_example() {
    // 7 cards, 2 rows: 4 columns, last card at row 1 column 2.
    assert_eq!(grid_cell(6, 7, 2), (1, 2, 4));
    assert_eq!(grid_cell(3, 7, 2), (0, 3, 4));
}

#[test]
fn test_mirrored_zones_point_reflect() {
    let viewport = Size::new(1200.0, 800.0);
    let zones = LayoutProfile::desktop()
        .declared_zones(GameVariant::Classic, PlayerId::new(0))
        .unwrap();
    let mapped = map_2d(&zones, viewport);

    let find = |id: ZoneId| mapped.iter().find(|z| z.id == id).unwrap().rect;
    for kind in GameVariant::Classic.zone_kinds() {
        let mine = find(ZoneId::of(PlayerId::new(0), *kind)).center();
        let theirs = find(ZoneId::of(PlayerId::new(1), *kind)).center();

        assert!((mine.x + theirs.x - viewport.width).abs() < 1e-2, "{kind}");
        assert!((mine.y + theirs.y - viewport.height).abs() < 1e-2, "{kind}");
    }
}
