//! User-supplied parameters for one layout generation run.

use nalgebra::Vector3;

use crate::error::{PackError, PackResult};

/// Which envelope property the ranking stage optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutPriority {
    /// Lowest pack height first.
    #[default]
    MinimizeZ,
    /// Smallest X×Y footprint first.
    MinimizeXy,
    /// Most cube-like envelope first.
    Balanced,
    /// Smallest volume first, within the custom maximum envelope.
    Custom,
}

impl LayoutPriority {
    /// Returns the wire name of this priority.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MinimizeZ => "MINIMIZE_Z",
            Self::MinimizeXy => "MINIMIZE_XY",
            Self::Balanced => "BALANCED",
            Self::Custom => "CUSTOM",
        }
    }
}

/// Which cell orientations the generator may try.
///
/// For cylindrical cells, standing means the terminal axis is vertical.
/// For box cells, standing means the cell rests on an edge (upright) and
/// laying means it rests on its largest face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CellOrientation {
    /// Upright cells only.
    #[default]
    Standing,
    /// Cells on their side only.
    Laying,
    /// Both.
    Mixed,
}

impl CellOrientation {
    /// Returns true if upright orientations should be generated.
    #[must_use]
    pub const fn allows_standing(&self) -> bool {
        matches!(self, Self::Standing | Self::Mixed)
    }

    /// Returns true if lying orientations should be generated.
    #[must_use]
    pub const fn allows_laying(&self) -> bool {
        matches!(self, Self::Laying | Self::Mixed)
    }
}

/// Configuration for one pack generation run.
///
/// All lengths are in mm. Use the builder methods to adjust the defaults,
/// then [`validate`](Self::validate) (every engine entry point does this
/// for you).
///
/// # Examples
///
/// ```
/// use pack_types::{LayoutPriority, PackInputs};
///
/// let inputs = PackInputs::new("21700", 30)
///     .with_target_voltage(36.0)
///     .with_layout_priority(LayoutPriority::Balanced)
///     .with_honeycomb(true);
///
/// assert!(inputs.validate().is_ok());
/// assert_eq!(inputs.cell_count, 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PackInputs {
    /// Catalog key of the cell type (e.g. `"18650"`).
    #[cfg_attr(feature = "serde", serde(alias = "batteryType"))]
    pub cell_type: String,

    /// Number of cells available. Must be at least 1.
    pub cell_count: usize,

    /// Desired nominal pack voltage in V.
    ///
    /// Only used to pick the closest configuration for presentation; it never
    /// filters the enumeration.
    pub target_voltage: f64,

    /// Ranking criterion.
    pub layout_priority: LayoutPriority,

    /// Hard upper bound on the total (clearance-inclusive) envelope.
    ///
    /// Candidates exceeding it on any axis are discarded.
    pub custom_max_dimensions: Option<Vector3<f64>>,

    /// Which orientations to try.
    pub cell_orientation: CellOrientation,

    /// Use hexagonal close packing for standing cylindrical cells.
    pub use_honeycomb: bool,

    /// Gap added between neighbouring cells in X and Y.
    pub cell_gap: f64,

    /// Clearance between the cells and each enclosure wall.
    pub wall_clearance: f64,

    /// Z allowance for the top nickel strip layer.
    pub nickel_strip_top: f64,

    /// Z allowance for the bottom nickel strip layer.
    pub nickel_strip_bottom: f64,

    /// Only emit configurations that use every cell.
    pub show_only_exact: bool,
}

impl Default for PackInputs {
    fn default() -> Self {
        Self {
            cell_type: "18650".to_string(),
            cell_count: 24,
            target_voltage: 48.0,
            layout_priority: LayoutPriority::MinimizeZ,
            custom_max_dimensions: None,
            cell_orientation: CellOrientation::Standing,
            use_honeycomb: false,
            cell_gap: 2.0,
            wall_clearance: 3.0,
            nickel_strip_top: 5.0,
            nickel_strip_bottom: 5.0,
            show_only_exact: true,
        }
    }
}

impl PackInputs {
    /// Creates inputs for `cell_count` cells of the given catalog type,
    /// with default spacing.
    #[must_use]
    pub fn new(cell_type: impl Into<String>, cell_count: usize) -> Self {
        Self {
            cell_type: cell_type.into(),
            cell_count,
            ..Default::default()
        }
    }

    /// Creates inputs with every spacing value set to zero.
    ///
    /// Useful when the caller wants bare cell-grid dimensions.
    #[must_use]
    pub fn tight(cell_type: impl Into<String>, cell_count: usize) -> Self {
        Self::new(cell_type, cell_count).with_spacing(0.0, 0.0, 0.0, 0.0)
    }

    /// Sets the cell count.
    #[must_use]
    pub const fn with_cell_count(mut self, cell_count: usize) -> Self {
        self.cell_count = cell_count;
        self
    }

    /// Sets the target nominal voltage.
    #[must_use]
    pub const fn with_target_voltage(mut self, voltage: f64) -> Self {
        self.target_voltage = voltage;
        self
    }

    /// Sets the ranking priority.
    #[must_use]
    pub const fn with_layout_priority(mut self, priority: LayoutPriority) -> Self {
        self.layout_priority = priority;
        self
    }

    /// Sets a hard maximum envelope and switches the priority to
    /// [`LayoutPriority::Custom`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pack_types::{LayoutPriority, PackInputs};
    ///
    /// let inputs = PackInputs::default().with_max_dimensions(200.0, 150.0, 80.0);
    /// assert_eq!(inputs.layout_priority, LayoutPriority::Custom);
    /// assert!(inputs.custom_max_dimensions.is_some());
    /// ```
    #[must_use]
    pub fn with_max_dimensions(mut self, x: f64, y: f64, z: f64) -> Self {
        self.custom_max_dimensions = Some(Vector3::new(x, y, z));
        self.layout_priority = LayoutPriority::Custom;
        self
    }

    /// Sets the orientation switch.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: CellOrientation) -> Self {
        self.cell_orientation = orientation;
        self
    }

    /// Enables or disables honeycomb packing.
    #[must_use]
    pub const fn with_honeycomb(mut self, enable: bool) -> Self {
        self.use_honeycomb = enable;
        self
    }

    /// Sets cell gap, wall clearance and both nickel strip allowances.
    #[must_use]
    pub const fn with_spacing(
        mut self,
        cell_gap: f64,
        wall_clearance: f64,
        nickel_strip_top: f64,
        nickel_strip_bottom: f64,
    ) -> Self {
        self.cell_gap = cell_gap;
        self.wall_clearance = wall_clearance;
        self.nickel_strip_top = nickel_strip_top;
        self.nickel_strip_bottom = nickel_strip_bottom;
        self
    }

    /// Sets the cell gap.
    #[must_use]
    pub const fn with_cell_gap(mut self, gap: f64) -> Self {
        self.cell_gap = gap;
        self
    }

    /// Sets the wall clearance.
    #[must_use]
    pub const fn with_wall_clearance(mut self, clearance: f64) -> Self {
        self.wall_clearance = clearance;
        self
    }

    /// Restricts enumeration to configurations that use every cell.
    #[must_use]
    pub const fn with_exact_only(mut self, exact: bool) -> Self {
        self.show_only_exact = exact;
        self
    }

    /// Total Z allowance reserved for nickel strips.
    #[must_use]
    pub fn nickel_strip_total(&self) -> f64 {
        self.nickel_strip_top + self.nickel_strip_bottom
    }

    /// Validates the inputs.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: [`PackError::InvalidCellCount`],
    /// [`PackError::InvalidSpacing`], [`PackError::InvalidTargetVoltage`] or
    /// [`PackError::InvalidMaxDimensions`].
    pub fn validate(&self) -> PackResult<()> {
        if self.cell_count == 0 {
            return Err(PackError::InvalidCellCount(self.cell_count));
        }

        let spacing = [
            ("cell_gap", self.cell_gap),
            ("wall_clearance", self.wall_clearance),
            ("nickel_strip_top", self.nickel_strip_top),
            ("nickel_strip_bottom", self.nickel_strip_bottom),
        ];
        for (field, value) in spacing {
            if !value.is_finite() || value < 0.0 {
                return Err(PackError::InvalidSpacing { field, value });
            }
        }

        if !self.target_voltage.is_finite() || self.target_voltage < 0.0 {
            return Err(PackError::InvalidTargetVoltage(self.target_voltage));
        }

        if let Some(max) = self.custom_max_dimensions {
            if max.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(PackError::InvalidMaxDimensions {
                    x: max.x,
                    y: max.y,
                    z: max.z,
                });
            }
        }

        Ok(())
    }
}
