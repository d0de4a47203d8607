//! Core value types for battery pack configuration and layout.
//!
//! This crate provides the data model shared by the layout engine and the
//! manufacturing exporters:
//!
//! - **Cells**: [`CellSpec`] with its [`CellShape`], and a built-in
//!   [`catalog`] keyed by identifiers such as `"18650"` or `"POUCH_MEDIUM"`
//! - **Inputs**: [`PackInputs`] with [`LayoutPriority`] and [`CellOrientation`]
//! - **Electrical**: [`ElectricalConfig`], one series/parallel split
//! - **Physical**: [`Orientation`], [`CellPosition`] and [`PhysicalLayout`]
//! - **Errors**: [`PackError`]
//!
//! Every type is a plain value: created fresh for each generation run and
//! never mutated after construction.
//!
//! # Example
//!
//! ```
//! use pack_types::{catalog, ElectricalConfig, PackInputs};
//!
//! let inputs = PackInputs::new("18650", 24).with_target_voltage(48.0);
//! inputs.validate().unwrap();
//!
//! let cell = catalog::lookup(&inputs.cell_type).unwrap();
//! let config = ElectricalConfig::new(13, 1, inputs.cell_count, &cell);
//! assert_eq!(config.cells_unused, 11);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod cell;
pub mod config;
pub mod error;
pub mod inputs;
pub mod layout;
pub mod orientation;

pub use cell::{CellShape, CellSpec};
pub use config::ElectricalConfig;
pub use error::{PackError, PackResult};
pub use inputs::{CellOrientation, LayoutPriority, PackInputs};
pub use layout::{CellPosition, PhysicalLayout, envelope_metrics};
pub use orientation::{Axis, Orientation};

// Re-export the math types that appear in the public API.
pub use nalgebra::{Point3, Vector3};
