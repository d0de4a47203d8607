//! Battery pack configuration and layout engine.
//!
//! This crate turns a cell type and a cell count into ranked, manufacturable
//! pack layouts:
//!
//! 1. [`enumerate_configurations`] lists every series/parallel split
//! 2. [`generate_layouts`] expands one split into every orientation and
//!    rectangular `cols × rows × layers` grid, placing each cell
//! 3. [`rank_layouts`] sorts by the chosen [`LayoutPriority`] and drops
//!    layouts with identical envelopes
//!
//! [`design_pack`] runs all three stages.
//!
//! # Quick Start
//!
//! ```
//! use pack_layout::design_pack_for;
//! use pack_types::{LayoutPriority, PackInputs};
//!
//! let inputs = PackInputs::new("18650", 24)
//!     .with_target_voltage(14.8)
//!     .with_layout_priority(LayoutPriority::MinimizeXy);
//!
//! let (_cell, design) = design_pack_for(&inputs).unwrap();
//! let best = design.best().unwrap();
//! assert_eq!(best.configuration.code, "4S6P");
//! println!("{} -> {:?} mm", best.label(), best.total_dimensions);
//! ```
//!
//! # Honeycomb Packing
//!
//! Standing cylinders can be packed hexagonally, with odd rows offset by
//! half a cell and rows pulled together by [`HEX_PACKING_ROW_COMPRESSION`].
//! Every other orientation falls back to a rectangular grid.
//!
//! # Architecture
//!
//! Every stage is a pure function over values from `pack_types`; nothing is
//! cached or shared between calls.
//!
//! [`LayoutPriority`]: pack_types::LayoutPriority

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod enumerate;
mod generate;
mod pipeline;
mod rank;

pub use enumerate::{closest_to_voltage, enumerate_configurations};
pub use generate::{
    GridShape, HEX_PACKING_ROW_COMPRESSION, HEX_PACKING_ROW_OFFSET, generate_layouts,
    grid_factorizations,
};
pub use pipeline::{ConfigurationLayouts, PackDesign, design_pack, design_pack_for};
pub use rank::{SortKey, compare_layouts, dedup_envelopes, rank_layouts, sort_layouts};
