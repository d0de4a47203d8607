//! Battery pack design toolkit: cell catalog, layout engine and
//! manufacturing exports.
//!
//! This umbrella crate re-exports the pack-* crates behind one API. None of
//! them perform I/O, so they can be embedded in CLI tools, servers or WASM
//! front-ends alike.
//!
//! # Quick Start
//!
//! ```
//! use pack::prelude::*;
//!
//! let inputs = PackInputs::new("21700", 20)
//!     .with_target_voltage(18.5)
//!     .with_layout_priority(LayoutPriority::Balanced);
//!
//! // Enumerate, place and rank in one call
//! let (cell, design) = design_pack_for(&inputs).unwrap();
//! let best = design.best().unwrap();
//! assert_eq!(best.configuration.code, "5S4P");
//!
//! // Manufacturing package
//! let spec = generate_pack_spec(best, &cell, &inputs).unwrap();
//! let json = spec.to_json().unwrap();
//! let readme = manufacturing_readme(&spec);
//! assert!(json.contains("cellPositions"));
//! assert!(readme.contains("5S4P"));
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Cells, catalog, inputs, electrical configs, layouts, errors
//! - [`layout`] - Configuration enumeration, layout generation and ranking
//! - [`spec`] - JSON spec document, wiring plan, enclosure and README
//!
//! # Feature Flags
//!
//! - `serde` (default) - Serialization for the value types in [`types`]

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Cells, catalog, inputs, electrical configs, layouts and errors.
pub use pack_types as types;

/// Configuration enumeration, layout generation and ranking.
pub use pack_layout as layout;

/// JSON spec document, wiring plan, enclosure and README.
pub use pack_spec as spec;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for pack design.
///
/// # Usage
///
/// ```
/// use pack::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pack_types::{
        CellOrientation, CellSpec, ElectricalConfig, LayoutPriority, Orientation, PackError,
        PackInputs, PackResult, PhysicalLayout, catalog,
    };

    // Layout engine
    pub use pack_layout::{PackDesign, design_pack, design_pack_for, rank_layouts};

    // Exports
    pub use pack_spec::{
        BatteryPackSpec, EnclosureParams, enclosure_for, generate_pack_spec, manufacturing_readme,
        plan_wiring,
    };
}

// =============================================================================
// Tests
// =============================================================================
