//! API Regression Tests for the Pack Crate Ecosystem
//!
//! These tests pin the public API of the pack-* crates as seen through the
//! umbrella crate. They are organized in 3 tiers:
//!
//! - Tier 1: Foundation (pack-types: cells, catalog, inputs, configs)
//! - Tier 2: Layout Engine (pack-layout: enumerate, generate, rank)
//! - Tier 3: Exports (pack-spec: document, wiring, enclosure, README)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use pack::{layout, prelude::*, spec, types};

// =============================================================================
// TIER 1: Foundation - Cells, Catalog, Inputs
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn catalog_lookup_and_listing() {
        let cell = catalog::lookup("18650").unwrap();
        assert!((cell.nominal_voltage - 3.7).abs() < f64::EPSILON);
        assert!(cell.shape.is_cylinder());

        let pouch = catalog::lookup("POUCH_MEDIUM").unwrap();
        assert!(pouch.shape.is_box());

        assert_eq!(catalog::all().len(), catalog::KEYS.len());
        assert!(matches!(
            catalog::lookup("NOPE"),
            Err(PackError::UnknownCellType(_))
        ));
    }

    #[test]
    fn custom_cell_construction() {
        let cell = CellSpec::cylinder("custom 26650", 26.0, 65.0)
            .with_voltages(3.2, 3.65, 2.5)
            .with_capacity_mah(3000.0)
            .with_weight_grams(85.0);
        assert!(cell.validate().is_ok());
        assert!((cell.energy_wh() - 9.6).abs() < 1e-9);

        let prismatic = types::CellSpec::prismatic("prism", 30.0, 40.0, 10.0);
        assert!(prismatic.shape.is_box());
    }

    #[test]
    fn inputs_defaults_and_builders() {
        let inputs = PackInputs::new("21700", 12);
        assert_eq!(inputs.layout_priority, LayoutPriority::MinimizeZ);
        assert_eq!(inputs.cell_orientation, CellOrientation::Standing);
        assert!(inputs.show_only_exact);
        assert!(inputs.validate().is_ok());

        let tight = PackInputs::tight("21700", 12);
        assert!(tight.cell_gap.abs() < f64::EPSILON);

        let bad = PackInputs::new("21700", 0);
        assert!(matches!(
            bad.validate(),
            Err(PackError::InvalidCellCount(0))
        ));
    }

    #[test]
    fn electrical_config_metrics() {
        let cell = catalog::lookup("18650").unwrap();
        let config = ElectricalConfig::new(3, 4, 13, &cell);
        assert_eq!(config.code, "3S4P");
        assert_eq!(config.cells_used, 12);
        assert_eq!(config.cells_unused, 1);
        assert!(!config.is_exact());
        assert!((config.nominal_voltage - 11.1).abs() < 1e-9);
    }
}

// =============================================================================
// TIER 2: Layout Engine
// =============================================================================

mod tier2_layout {
    use super::*;

    #[test]
    fn enumeration() {
        let cell = catalog::lookup("18650").unwrap();
        let inputs = PackInputs::new("18650", 12);
        let configs = layout::enumerate_configurations(&cell, &inputs).unwrap();
        let codes: Vec<_> = configs.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["1S12P", "2S6P", "3S4P", "4S3P", "6S2P", "12S1P"]);

        let closest = layout::closest_to_voltage(&configs, 11.1).unwrap();
        assert_eq!(closest.code, "3S4P");
    }

    #[test]
    fn generation_and_ranking() {
        let cell = catalog::lookup("18650").unwrap();
        let inputs = PackInputs::new("18650", 8);
        let config = ElectricalConfig::new(2, 4, 8, &cell);

        let layouts = layout::generate_layouts(&config, &cell, &inputs).unwrap();
        assert_eq!(layouts.len(), layout::grid_factorizations(8).len());
        for l in &layouts {
            assert_eq!(l.cell_positions.len(), 8);
            assert_eq!(l.orientation, Orientation::Standing);
        }

        let ranked = rank_layouts(layouts, LayoutPriority::MinimizeZ);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].total_dimensions.z <= w[1].total_dimensions.z));
    }

    #[test]
    fn design_pipeline() {
        let inputs = PackInputs::new("18650", 24).with_target_voltage(14.8);
        let (cell, design) = design_pack_for(&inputs).unwrap();
        assert_eq!(cell.name, "18650 Lithium Ion");
        assert!(!design.is_empty());
        assert_eq!(design.best().unwrap().configuration.code, "4S6P");
        assert_eq!(
            design.layouts_for("4S6P").len(),
            design.options.iter().find(|o| o.configuration.code == "4S6P").unwrap().layouts.len()
        );

        let again = design_pack(&cell, &inputs).unwrap();
        assert_eq!(again.layout_count(), design.layout_count());
    }

    #[test]
    fn sort_keys() {
        let (_, design) = design_pack_for(&PackInputs::new("21700", 12)).unwrap();
        let mut layouts: Vec<PhysicalLayout> = design
            .options
            .into_iter()
            .flat_map(|o| o.layouts)
            .collect();
        layout::sort_layouts(&mut layouts, layout::SortKey::Footprint);
        assert!(layouts
            .windows(2)
            .all(|w| w[0].footprint_cm2 <= w[1].footprint_cm2));
    }
}

// =============================================================================
// TIER 3: Exports
// =============================================================================

mod tier3_exports {
    use super::*;

    fn best(inputs: &PackInputs) -> (CellSpec, PhysicalLayout) {
        let (cell, design) = design_pack_for(inputs).unwrap();
        let layout = design.best().unwrap().clone();
        (cell, layout)
    }

    #[test]
    fn spec_document() {
        let inputs = PackInputs::new("18650", 12).with_target_voltage(11.1);
        let (cell, layout) = best(&inputs);
        let document = generate_pack_spec(&layout, &cell, &inputs)
            .unwrap()
            .with_generated_date("2026-10-18");
        assert_eq!(document.file_name(), "specs-3S4P.json");
        assert_eq!(document.pack_specification.version, spec::SPEC_VERSION);
        assert_eq!(document.wiring_notes.len(), 6);

        let parsed = BatteryPackSpec::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed.cell_positions.len(), 12);
    }

    #[test]
    fn wiring_and_enclosure() {
        let inputs = PackInputs::new("21700", 6);
        let (_, layout) = best(&inputs);

        let plan = plan_wiring(&layout);
        assert_eq!(plan.series * plan.parallel, 6);
        assert_eq!(
            plan.count(spec::StripKind::Series),
            layout.configuration.series - 1
        );

        let enclosure = enclosure_for(&layout, &EnclosureParams::default()).unwrap();
        assert!(enclosure.inner_volume_cm3() > 0.0);
        assert!(enclosure.shell_volume_cm3() > 0.0);
    }

    #[test]
    fn readme_and_package() {
        let inputs = PackInputs::new("32650", 4).with_target_voltage(12.8);
        let (cell, layout) = best(&inputs);
        let document = generate_pack_spec(&layout, &cell, &inputs).unwrap();
        let readme = manufacturing_readme(&document);
        assert!(readme.starts_with("BATTERY PACK MANUFACTURING INSTRUCTIONS\n"));

        let files = spec::package_files(&document.configuration.code);
        assert_eq!(files[0].0, document.file_name());
    }
}
