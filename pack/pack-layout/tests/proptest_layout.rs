//! Property-based tests for the layout engine.
//!
//! These tests use proptest to generate random cell types, counts and
//! spacing values and verify the engine's invariants.
//!
//! Run with: cargo test -p pack-layout -- proptest

use std::collections::HashSet;

use pack_layout::{
    HEX_PACKING_ROW_COMPRESSION, closest_to_voltage, enumerate_configurations, generate_layouts,
    rank_layouts,
};
use pack_types::{
    CellOrientation, CellSpec, ElectricalConfig, LayoutPriority, PackInputs, PhysicalLayout,
    catalog,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// =============================================================================
// Strategies
// =============================================================================

fn arb_cell_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(catalog::KEYS.to_vec())
}

fn arb_orientation() -> impl Strategy<Value = CellOrientation> {
    prop_oneof![
        Just(CellOrientation::Standing),
        Just(CellOrientation::Laying),
        Just(CellOrientation::Mixed),
    ]
}

fn arb_priority() -> impl Strategy<Value = LayoutPriority> {
    prop_oneof![
        Just(LayoutPriority::MinimizeZ),
        Just(LayoutPriority::MinimizeXy),
        Just(LayoutPriority::Balanced),
        Just(LayoutPriority::Custom),
    ]
}

/// Random inputs for up to `max_cells` cells, with no envelope limit.
fn arb_inputs(max_cells: usize) -> impl Strategy<Value = PackInputs> {
    (
        arb_cell_key(),
        1..=max_cells,
        any::<bool>(),
        arb_orientation(),
        any::<bool>(),
        arb_priority(),
        prop::array::uniform4(0.0..6.0f64),
    )
        .prop_map(
            |(key, count, exact, orientation, honeycomb, priority, spacing)| {
                PackInputs::new(key, count)
                    .with_exact_only(exact)
                    .with_orientation(orientation)
                    .with_honeycomb(honeycomb)
                    .with_layout_priority(priority)
                    .with_spacing(spacing[0], spacing[1], spacing[2], spacing[3])
            },
        )
}

/// Inputs plus the cell and one configuration picked from the enumeration.
fn arb_case(max_cells: usize) -> impl Strategy<Value = (PackInputs, CellSpec, ElectricalConfig)> {
    (arb_inputs(max_cells), any::<prop::sample::Index>()).prop_map(|(inputs, index)| {
        let cell = catalog::lookup(&inputs.cell_type).unwrap();
        let configs = enumerate_configurations(&cell, &inputs).unwrap();
        let config = index.get(&configs).clone();
        (inputs, cell, config)
    })
}

fn layouts_for(inputs: &PackInputs, cell: &CellSpec, config: &ElectricalConfig) -> Vec<PhysicalLayout> {
    generate_layouts(config, cell, inputs).unwrap()
}

// =============================================================================
// Property Tests: Enumeration
// =============================================================================

proptest! {
    /// Every configuration accounts for all available cells.
    #[test]
    fn enumeration_conserves_cells(inputs in arb_inputs(200)) {
        let cell = catalog::lookup(&inputs.cell_type).unwrap();
        let configs = enumerate_configurations(&cell, &inputs).unwrap();

        for config in &configs {
            prop_assert!(config.series >= 1 && config.parallel >= 1);
            prop_assert_eq!(config.series * config.parallel, config.cells_used);
            prop_assert_eq!(config.cells_used + config.cells_unused, inputs.cell_count);
            prop_assert_eq!(&config.code, &format!("{}S{}P", config.series, config.parallel));
        }
    }

    /// The exactness filter never lets an inexact split through.
    #[test]
    fn exact_filter_holds(inputs in arb_inputs(200)) {
        let inputs = inputs.with_exact_only(true);
        let cell = catalog::lookup(&inputs.cell_type).unwrap();
        let configs = enumerate_configurations(&cell, &inputs).unwrap();
        prop_assert!(configs.iter().all(|c| c.cells_unused == 0));
    }

    /// The all-series split is always present, so the result is never empty.
    #[test]
    fn enumeration_never_empty(inputs in arb_inputs(200)) {
        let cell = catalog::lookup(&inputs.cell_type).unwrap();
        let configs = enumerate_configurations(&cell, &inputs).unwrap();
        let n = inputs.cell_count;
        prop_assert!(configs.iter().any(|c| c.series == n && c.parallel == 1));
    }

    /// The closest configuration really minimises the voltage error.
    #[test]
    fn closest_minimises_error(inputs in arb_inputs(100), target in 0.0..200.0f64) {
        let cell = catalog::lookup(&inputs.cell_type).unwrap();
        let configs = enumerate_configurations(&cell, &inputs).unwrap();
        let closest = closest_to_voltage(&configs, target).unwrap();
        for config in &configs {
            prop_assert!(closest.voltage_error(target) <= config.voltage_error(target));
        }
    }
}

// =============================================================================
// Property Tests: Layout Generation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Grid shape and placed cells both match the configuration.
    #[test]
    fn layouts_conserve_cells((inputs, cell, config) in arb_case(48)) {
        let layouts = layouts_for(&inputs, &cell, &config);
        prop_assert!(!layouts.is_empty());

        for layout in &layouts {
            prop_assert_eq!(layout.cols * layout.rows_per_layer * layout.layers, config.cells_used);
            prop_assert_eq!(layout.cell_positions.len(), config.cells_used);
        }
    }

    /// (series, parallel) pairs form a bijection onto the S×P grid.
    #[test]
    fn series_parallel_bijection((inputs, cell, config) in arb_case(48)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            let pairs: HashSet<_> = layout
                .cell_positions
                .iter()
                .map(|p| (p.series_position, p.parallel_group))
                .collect();
            prop_assert_eq!(pairs.len(), config.cells_used);
            for (s, p) in pairs {
                prop_assert!(s < config.series);
                prop_assert!(p < config.parallel);
            }
        }
    }

    /// Adjacent series groups have opposite polarity.
    #[test]
    fn polarity_alternates((inputs, cell, config) in arb_case(48)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            for a in &layout.cell_positions {
                for b in &layout.cell_positions {
                    if b.series_position == a.series_position + 1 {
                        prop_assert_ne!(a.polarity_up, b.polarity_up);
                    }
                }
            }
        }
    }

    /// Total envelope grows by exactly twice the wall clearance.
    #[test]
    fn dimension_monotonicity((inputs, cell, config) in arb_case(48)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            let grown = layout.total_dimensions - layout.pack_dimensions;
            for axis in grown.iter() {
                prop_assert!((axis - 2.0 * inputs.wall_clearance).abs() < EPS);
            }
            let zero_wall = inputs.wall_clearance == 0.0;
            prop_assert_eq!(layout.total_dimensions == layout.pack_dimensions, zero_wall);
        }
    }

    /// Cells sit inside the pack envelope along X and Z.
    #[test]
    fn cells_within_envelope((inputs, cell, config) in arb_case(36)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            let half = layout.cell_extents / 2.0;
            let pack = layout.pack_dimensions;
            for p in &layout.cell_positions {
                prop_assert!(p.x() - half.x >= -pack.x / 2.0 - EPS);
                prop_assert!(p.x() + half.x <= pack.x / 2.0 + EPS);
                prop_assert!(p.z() >= inputs.nickel_strip_bottom - EPS);
                prop_assert!(p.z() + layout.cell_extents.z <= pack.z - inputs.nickel_strip_top + EPS);
                // honeycomb outer rows may overhang by the row compression
                let overhang = if layout.honeycomb {
                    layout.cell_pitch.y * (1.0 - HEX_PACKING_ROW_COMPRESSION) / 2.0
                } else {
                    0.0
                };
                prop_assert!(p.y().abs() <= pack.y / 2.0 + EPS);
                prop_assert!(p.y() - half.y >= -pack.y / 2.0 - overhang - EPS);
                prop_assert!(p.y() + half.y <= pack.y / 2.0 + overhang + EPS);
            }
        }
    }

    /// No two cells in the same layer overlap.
    #[test]
    fn cells_do_not_overlap((inputs, cell, config) in arb_case(24)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            let e = layout.cell_extents;
            for (i, a) in layout.cell_positions.iter().enumerate() {
                for b in &layout.cell_positions[i + 1..] {
                    if a.layer != b.layer {
                        prop_assert!((a.z() - b.z()).abs() >= e.z - EPS);
                        continue;
                    }
                    if layout.honeycomb {
                        let d = (a.position - b.position).norm();
                        prop_assert!(d >= e.x - EPS, "centres {} mm apart", d);
                    } else {
                        let dx = (a.x() - b.x()).abs();
                        let dy = (a.y() - b.y()).abs();
                        prop_assert!(dx >= e.x - EPS || dy >= e.y - EPS);
                    }
                }
            }
        }
    }

    /// Honeycomb is only ever applied to standing cylinders.
    #[test]
    fn honeycomb_only_standing((inputs, cell, config) in arb_case(36)) {
        for layout in layouts_for(&inputs, &cell, &config) {
            if layout.honeycomb {
                prop_assert!(inputs.use_honeycomb);
                prop_assert!(layout.orientation.supports_honeycomb());
            }
        }
    }

    /// A custom envelope is a hard limit on every surviving layout.
    #[test]
    fn custom_envelope_is_hard_limit(
        (inputs, cell, config) in arb_case(36),
        max in prop::array::uniform3(20.0..400.0f64),
    ) {
        let inputs = inputs.with_max_dimensions(max[0], max[1], max[2]);
        for layout in layouts_for(&inputs, &cell, &config) {
            let t = layout.total_dimensions;
            prop_assert!(t.x <= max[0] && t.y <= max[1] && t.z <= max[2]);
        }
    }
}

// =============================================================================
// Property Tests: Ranking
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Ranking a ranked list changes nothing.
    #[test]
    fn ranking_is_idempotent((inputs, cell, config) in arb_case(36)) {
        let ranked = rank_layouts(layouts_for(&inputs, &cell, &config), inputs.layout_priority);
        let again = rank_layouts(ranked.clone(), inputs.layout_priority);
        prop_assert_eq!(ranked, again);
    }

    /// Ranking the same candidates twice gives the same result.
    #[test]
    fn ranking_is_deterministic((inputs, cell, config) in arb_case(36)) {
        let layouts = layouts_for(&inputs, &cell, &config);
        let first = rank_layouts(layouts.clone(), inputs.layout_priority);
        let second = rank_layouts(layouts, inputs.layout_priority);
        prop_assert_eq!(first, second);
    }

    /// No two ranked layouts share an envelope at 0.1 mm precision.
    #[test]
    fn ranked_envelopes_are_unique((inputs, cell, config) in arb_case(36)) {
        let ranked = rank_layouts(layouts_for(&inputs, &cell, &config), inputs.layout_priority);
        let keys: HashSet<_> = ranked.iter().map(PhysicalLayout::dedup_key).collect();
        prop_assert_eq!(keys.len(), ranked.len());
    }

    /// Every candidate envelope is represented after deduplication.
    #[test]
    fn dedup_keeps_every_envelope((inputs, cell, config) in arb_case(36)) {
        let layouts = layouts_for(&inputs, &cell, &config);
        let before: HashSet<_> = layouts.iter().map(PhysicalLayout::dedup_key).collect();
        let ranked = rank_layouts(layouts, inputs.layout_priority);
        let after: HashSet<_> = ranked.iter().map(PhysicalLayout::dedup_key).collect();
        prop_assert_eq!(before, after);
    }

    /// The top MinimizeZ layout has the lowest height of all candidates.
    #[test]
    fn minimize_z_puts_lowest_first((inputs, cell, config) in arb_case(36)) {
        let layouts = layouts_for(&inputs, &cell, &config);
        let lowest = layouts
            .iter()
            .map(|l| l.total_dimensions.z)
            .fold(f64::INFINITY, f64::min);
        let ranked = rank_layouts(layouts, LayoutPriority::MinimizeZ);
        prop_assert!((ranked[0].total_dimensions.z - lowest).abs() < EPS);
    }
}
