//! Manufacturing records for battery pack layouts.
//!
//! Once a layout has been chosen, this crate produces everything a builder
//! needs:
//!
//! - [`BatteryPackSpec`]: the JSON manufacturing document, via
//!   [`generate_pack_spec`]
//! - [`WiringPlan`]: terminal-level nickel strip segments, via
//!   [`plan_wiring`], plus the fixed [`wiring_notes`]
//! - [`EnclosureSpec`]: enclosure dimensions and features, via
//!   [`enclosure_for`]
//! - [`manufacturing_readme`]: the plain-text instruction sheet
//!
//! No function here performs I/O; writing files is left to the caller.
//!
//! # Example
//!
//! ```
//! use pack_layout::design_pack_for;
//! use pack_spec::{generate_pack_spec, plan_wiring, StripKind};
//! use pack_types::PackInputs;
//!
//! let inputs = PackInputs::new("18650", 12).with_target_voltage(11.1);
//! let (cell, design) = design_pack_for(&inputs).unwrap();
//! let layout = design.best().unwrap();
//!
//! let spec = generate_pack_spec(layout, &cell, &inputs)
//!     .unwrap()
//!     .with_generated_date("2026-10-18");
//! let json = spec.to_json().unwrap();
//! assert!(json.contains("\"code\": \"3S4P\""));
//!
//! let plan = plan_wiring(layout);
//! assert_eq!(plan.count(StripKind::Series), 2);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod enclosure;
mod readme;
mod spec;
mod wiring;

pub use enclosure::{EnclosureParams, EnclosureSpec, enclosure_for};
pub use readme::{manufacturing_readme, package_files};
pub use spec::{
    BatteryPackSpec, CellRecord, ConfigurationSummary, DEFAULT_DISCHARGE_C_RATE, DimensionsMm,
    ElectricalSummary, GENERATOR, GridSummary, PhysicalSummary, SPEC_VERSION, SpacingSummary,
    SpecMetadata, generate_pack_spec,
};
pub use wiring::{
    PARALLEL_STRIP_MM, SERIES_STRIP_MM, StripKind, StripSegment, Terminal, WiringPlan,
    plan_wiring, terminal_point, wiring_notes,
};
