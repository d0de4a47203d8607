//! Physical pack layouts and per-cell placement.

// Grid counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};

use crate::config::ElectricalConfig;
use crate::orientation::Orientation;

/// One physical cell slot within a layout.
///
/// `position.x` and `position.y` are the cell centre in the pack-centred
/// frame; `position.z` is the cell's bottom face, measured from the bottom
/// of the pack envelope (before wall clearance).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CellPosition {
    /// Linear placement index (layer-major, then row, then column).
    pub index: usize,
    /// Grid column.
    pub col: usize,
    /// Grid row within the layer.
    pub row: usize,
    /// Grid layer (0 = bottom).
    pub layer: usize,
    /// Position in mm.
    pub position: Point3<f64>,
    /// Series group, `index / parallel`.
    pub series_position: usize,
    /// Slot within the parallel group, `index % parallel`.
    pub parallel_group: usize,
    /// Positive terminal points up (+axis); alternates between series groups.
    pub polarity_up: bool,
}

impl CellPosition {
    /// Places the cell with linear index `index` in a pack wired with
    /// `parallel` cells per group.
    ///
    /// # Panics
    ///
    /// Panics if `parallel` is zero.
    #[must_use]
    pub const fn new(
        index: usize,
        grid: (usize, usize, usize),
        position: Point3<f64>,
        parallel: usize,
    ) -> Self {
        let series_position = index / parallel;
        Self {
            index,
            col: grid.0,
            row: grid.1,
            layer: grid.2,
            position,
            series_position,
            parallel_group: index % parallel,
            polarity_up: series_position % 2 == 0,
        }
    }

    /// X coordinate in mm.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate in mm.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Z coordinate (bottom face) in mm.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

/// One candidate arrangement of an electrical configuration.
///
/// Created by the layout generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhysicalLayout {
    /// The electrical configuration this layout realises.
    pub configuration: ElectricalConfig,
    /// How each cell sits in the grid.
    pub orientation: Orientation,
    /// Columns along X.
    pub cols: usize,
    /// Rows along Y in each layer.
    pub rows_per_layer: usize,
    /// Layers stacked along Z.
    pub layers: usize,
    /// Every cell slot, in placement order.
    pub cell_positions: Vec<CellPosition>,
    /// Hexagonal close packing was applied.
    pub honeycomb: bool,
    /// Bare cell extents for the orientation.
    pub cell_extents: Vector3<f64>,
    /// Grid pitch (extents plus gap on X/Y).
    pub cell_pitch: Vector3<f64>,
    /// Cell envelope including nickel strips, before wall clearance.
    pub pack_dimensions: Vector3<f64>,
    /// Manufacturable envelope including wall clearance.
    pub total_dimensions: Vector3<f64>,
    /// Volume of the total envelope in cm³.
    pub volume_cm3: f64,
    /// X×Y area of the total envelope in cm².
    pub footprint_cm2: f64,
    /// Smallest over largest total dimension; 1.0 is a cube.
    pub cubeness: f64,
}

impl PhysicalLayout {
    /// Number of placed cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_positions.len()
    }

    /// Total rows across all layers.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows_per_layer * self.layers
    }

    /// `"honeycomb"` or `"rectangular"`.
    #[must_use]
    pub const fn packing(&self) -> &'static str {
        if self.honeycomb {
            "honeycomb"
        } else {
            "rectangular"
        }
    }

    /// Cells belonging to series group `series`, in placement order.
    pub fn series_group(&self, series: usize) -> impl Iterator<Item = &CellPosition> + '_ {
        self.cell_positions
            .iter()
            .filter(move |p| p.series_position == series)
    }

    /// Longest side of the total envelope in mm.
    #[must_use]
    pub fn longest_side(&self) -> f64 {
        self.total_dimensions.max()
    }

    /// Key identifying the envelope at 0.1 mm resolution.
    ///
    /// Layouts with the same key are interchangeable from a manufacturing
    /// point of view.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        let d = &self.total_dimensions;
        format!("{:.1}-{:.1}-{:.1}", d.x, d.y, d.z)
    }

    /// Short description such as `4S6P standing 6×4×1`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} {} {}×{}×{}",
            self.configuration.code, self.orientation, self.cols, self.rows_per_layer, self.layers
        )
    }
}

/// Volume in cm³, footprint in cm² and cubeness for an envelope in mm.
#[must_use]
pub fn envelope_metrics(total: &Vector3<f64>) -> (f64, f64, f64) {
    let volume_cm3 = total.x * total.y * total.z / 1000.0;
    let footprint_cm2 = total.x * total.y / 100.0;
    let largest = total.max();
    let cubeness = if largest > 0.0 {
        total.min() / largest
    } else {
        0.0
    };
    (volume_cm3, footprint_cm2, cubeness)
}
