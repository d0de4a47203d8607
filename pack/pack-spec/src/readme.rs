//! Plain-text manufacturing instruction sheet.

use std::fmt::Write;

use pack_types::CellShape;

use crate::spec::BatteryPackSpec;
use crate::wiring::{PARALLEL_STRIP_MM, SERIES_STRIP_MM};

const SAFETY_NOTES: [&str; 5] = [
    "Always wear appropriate PPE when working with lithium batteries",
    "Work in a well-ventilated area",
    "Have fire suppression equipment available",
    "Test all connections before final assembly",
    "Verify voltage and polarity before connecting load",
];

/// Files of a manufacturing package, as `(file name, description)`.
#[must_use]
pub fn package_files(code: &str) -> [(String, &'static str); 4] {
    [
        (format!("specs-{code}.json"), "Complete technical specifications"),
        (format!("wiring-{code}.svg"), "Wiring diagram"),
        (format!("pack-{code}.stl"), "3D model for reference"),
        (format!("enclosure-{code}.stl"), "Enclosure model"),
    ]
}

/// Renders the instruction sheet that accompanies a manufacturing package.
///
/// Everything is taken from `spec`, so the sheet always agrees with the
/// JSON document.
///
/// # Example
///
/// ```
/// use pack_layout::design_pack_for;
/// use pack_spec::{generate_pack_spec, manufacturing_readme};
/// use pack_types::PackInputs;
///
/// let inputs = PackInputs::new("21700", 10);
/// let (cell, design) = design_pack_for(&inputs).unwrap();
/// let spec = generate_pack_spec(design.best().unwrap(), &cell, &inputs).unwrap();
///
/// let readme = manufacturing_readme(&spec);
/// assert!(readme.contains("ASSEMBLY INSTRUCTIONS"));
/// assert!(readme.contains("Type: 21700 Lithium Ion"));
/// ```
#[must_use]
#[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
pub fn manufacturing_readme(spec: &BatteryPackSpec) -> String {
    let mut out = String::new();
    let _ = write_readme(&mut out, spec);
    out
}

fn write_readme(out: &mut String, spec: &BatteryPackSpec) -> std::fmt::Result {
    let cell = &spec.cell_type;
    let config = &spec.configuration;
    let electrical = &spec.electrical;
    let physical = &spec.physical;
    let spacing = &spec.spacing;

    heading(out, "BATTERY PACK MANUFACTURING INSTRUCTIONS", '=')?;
    writeln!(out, "Configuration: {}", config.code)?;
    if let Some(date) = &spec.pack_specification.generated_date {
        writeln!(out, "Generated: {date}")?;
    }
    writeln!(out)?;

    heading(out, "CELL SPECIFICATIONS", '-')?;
    writeln!(out, "Type: {}", cell.name)?;
    match cell.shape {
        CellShape::Cylinder { diameter, length } => {
            writeln!(out, "Dimensions: {diameter}mm diameter × {length}mm length")?;
        }
        CellShape::Box {
            width,
            length,
            thickness,
        } => {
            writeln!(out, "Dimensions: {width}mm × {length}mm × {thickness}mm")?;
        }
    }
    writeln!(out, "Nominal Voltage: {}V", cell.nominal_voltage)?;
    writeln!(out, "Capacity: {}mAh", cell.typical_capacity_mah)?;
    writeln!(out, "Weight: {}g", cell.weight_grams)?;
    writeln!(out)?;

    heading(out, "PACK CONFIGURATION", '-')?;
    writeln!(out, "Series: {} groups", config.series_count)?;
    writeln!(out, "Parallel: {} cells per group", config.parallel_count)?;
    writeln!(out, "Total Cells: {}", config.cells_used)?;
    if config.cells_unused > 0 {
        writeln!(out, "Unused Cells: {}", config.cells_unused)?;
    }
    writeln!(out, "Nominal Voltage: {:.1}V", electrical.nominal_voltage_v)?;
    writeln!(out, "Capacity: {:.2}Ah", electrical.capacity_ah)?;
    writeln!(out, "Energy: {:.1}Wh", electrical.energy_wh)?;
    writeln!(out, "Total Weight: {:.0}g", physical.total_weight_kg * 1000.0)?;
    writeln!(out)?;

    let d = &physical.with_clearance_mm;
    heading(out, "PHYSICAL LAYOUT", '-')?;
    writeln!(out, "Dimensions: {:.1} × {:.1} × {:.1} mm", d.x, d.y, d.z)?;
    writeln!(out, "Volume: {:.1} cm³", physical.volume_cm3)?;
    writeln!(
        out,
        "Layout: {} × {} × {}",
        physical.layout.columns,
        physical.layout.rows / physical.layout.layers.max(1),
        physical.layout.layers
    )?;
    writeln!(out, "Orientation: {}", physical.orientation)?;
    let packing = if physical.packing == "honeycomb" {
        "Honeycomb"
    } else {
        "Rectangular"
    };
    writeln!(out, "Packing: {packing}")?;
    writeln!(out)?;

    heading(out, "SPACING", '-')?;
    writeln!(out, "Cell Gap: {}mm", spacing.cell_gap_mm)?;
    writeln!(out, "Wall Clearance: {}mm", spacing.wall_clearance_mm)?;
    writeln!(out, "Nickel Strip Top: {}mm", spacing.nickel_strip_top_mm)?;
    writeln!(out, "Nickel Strip Bottom: {}mm", spacing.nickel_strip_bottom_mm)?;
    writeln!(out)?;

    heading(out, "ASSEMBLY INSTRUCTIONS", '-')?;
    let steps = [
        "Arrange cells according to the layout specifications".to_string(),
        format!(
            "Connect parallel groups with nickel strips ({}mm × {}mm recommended)",
            PARALLEL_STRIP_MM.0, PARALLEL_STRIP_MM.1
        ),
        format!(
            "Connect series groups with nickel strips ({}mm × {}mm recommended)",
            SERIES_STRIP_MM.0, SERIES_STRIP_MM.1
        ),
        "Apply spot welds at all connection points".to_string(),
        "Test electrical continuity before enclosure".to_string(),
        "Install BMS if required".to_string(),
        "Place in enclosure with proper ventilation".to_string(),
    ];
    for (i, step) in steps.iter().enumerate() {
        writeln!(out, "{}. {step}", i + 1)?;
    }
    writeln!(out)?;

    heading(out, "SAFETY NOTES", '-')?;
    for note in SAFETY_NOTES {
        writeln!(out, "- {note}")?;
    }
    writeln!(out)?;

    heading(out, "FILES INCLUDED", '-')?;
    for (name, description) in package_files(&config.code) {
        writeln!(out, "- {name}: {description}")?;
    }
    writeln!(out)?;
    writeln!(out, "For additional support, contact your battery pack engineer.")
}

fn heading(out: &mut String, title: &str, underline: char) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    let rule: String = std::iter::repeat_n(underline, title.chars().count()).collect();
    writeln!(out, "{rule}")
}
