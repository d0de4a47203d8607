//! Physical and electrical description of a single cell.

use crate::error::{PackError, PackResult};

/// Physical form factor of a cell, with its dimensions in mm.
///
/// Cylindrical cells are described by diameter and length (terminal to
/// terminal). Box cells (pouch, prismatic, 9V) by width, length and
/// thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model_type", rename_all = "lowercase"))]
pub enum CellShape {
    /// Cylindrical cell such as an 18650.
    Cylinder {
        /// Outer diameter in mm.
        diameter: f64,
        /// Length along the terminal axis in mm.
        length: f64,
    },
    /// Rectangular cell such as a LiPo pouch or prismatic LiFePO4.
    Box {
        /// Width in mm.
        width: f64,
        /// Length in mm (tab side to far side).
        length: f64,
        /// Thickness in mm.
        thickness: f64,
    },
}

impl CellShape {
    /// Returns the model type name (`"cylinder"` or `"box"`).
    #[must_use]
    pub const fn model_type(&self) -> &'static str {
        match self {
            Self::Cylinder { .. } => "cylinder",
            Self::Box { .. } => "box",
        }
    }

    /// Returns true for cylindrical cells.
    #[must_use]
    pub const fn is_cylinder(&self) -> bool {
        matches!(self, Self::Cylinder { .. })
    }

    /// Returns true for box cells.
    #[must_use]
    pub const fn is_box(&self) -> bool {
        matches!(self, Self::Box { .. })
    }

    /// Returns the volume of the bare cell in mm³.
    #[must_use]
    pub fn volume_mm3(&self) -> f64 {
        match *self {
            Self::Cylinder { diameter, length } => {
                std::f64::consts::PI * (diameter / 2.0).powi(2) * length
            }
            Self::Box {
                width,
                length,
                thickness,
            } => width * length * thickness,
        }
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Cylinder { diameter, length } => vec![("diameter", diameter), ("length", length)],
            Self::Box {
                width,
                length,
                thickness,
            } => vec![
                ("width", width),
                ("length", length),
                ("thickness", thickness),
            ],
        }
    }
}

/// Immutable reference data for one cell type.
///
/// # Example
///
/// ```
/// use pack_types::CellSpec;
///
/// let cell = CellSpec::cylinder("Custom 18650", 18.4, 65.0)
///     .with_voltages(3.6, 4.2, 2.5)
///     .with_capacity_mah(3000.0)
///     .with_weight_grams(46.0);
///
/// assert!(cell.validate().is_ok());
/// assert_eq!(cell.shape.model_type(), "cylinder");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSpec {
    /// Human readable name.
    pub name: String,

    /// Form factor and dimensions.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shape: CellShape,

    /// Nominal cell voltage in V.
    pub nominal_voltage: f64,

    /// Fully charged cell voltage in V.
    pub max_voltage: f64,

    /// Cut-off cell voltage in V.
    pub min_voltage: f64,

    /// Typical capacity in mAh.
    #[cfg_attr(feature = "serde", serde(rename = "typical_capacity"))]
    pub typical_capacity_mah: f64,

    /// Cell mass in g.
    #[cfg_attr(feature = "serde", serde(rename = "weight"))]
    pub weight_grams: f64,
}

impl CellSpec {
    /// Creates a cylindrical cell with lithium-ion voltages (3.7 / 4.2 / 2.5 V).
    ///
    /// Capacity and weight start at zero and must be set before the cell
    /// passes [`validate`](Self::validate).
    #[must_use]
    pub fn cylinder(name: impl Into<String>, diameter: f64, length: f64) -> Self {
        Self::new(name, CellShape::Cylinder { diameter, length })
    }

    /// Creates a box cell with lithium-ion voltages (3.7 / 4.2 / 2.5 V).
    #[must_use]
    pub fn prismatic(name: impl Into<String>, width: f64, length: f64, thickness: f64) -> Self {
        Self::new(
            name,
            CellShape::Box {
                width,
                length,
                thickness,
            },
        )
    }

    fn new(name: impl Into<String>, shape: CellShape) -> Self {
        Self {
            name: name.into(),
            shape,
            nominal_voltage: 3.7,
            max_voltage: 4.2,
            min_voltage: 2.5,
            typical_capacity_mah: 0.0,
            weight_grams: 0.0,
        }
    }

    /// Sets nominal, maximum and minimum voltage.
    #[must_use]
    pub const fn with_voltages(mut self, nominal: f64, max: f64, min: f64) -> Self {
        self.nominal_voltage = nominal;
        self.max_voltage = max;
        self.min_voltage = min;
        self
    }

    /// Sets the typical capacity in mAh.
    #[must_use]
    pub const fn with_capacity_mah(mut self, capacity: f64) -> Self {
        self.typical_capacity_mah = capacity;
        self
    }

    /// Sets the cell weight in grams.
    #[must_use]
    pub const fn with_weight_grams(mut self, weight: f64) -> Self {
        self.weight_grams = weight;
        self
    }

    /// Returns the stored energy of one cell in Wh.
    #[must_use]
    pub fn energy_wh(&self) -> f64 {
        self.nominal_voltage * self.typical_capacity_mah / 1000.0
    }

    /// Validates the cell data.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidCellSpec`] if a dimension is not positive,
    /// the voltages are not ordered `min <= nominal <= max`, the capacity is
    /// not positive or the weight is negative.
    pub fn validate(&self) -> PackResult<()> {
        for (field, value) in self.shape.dimensions() {
            if !value.is_finite() || value <= 0.0 {
                return Err(PackError::invalid_cell_spec(format!(
                    "{} {field} must be positive, got {value}",
                    self.name
                )));
            }
        }

        let voltages = [self.min_voltage, self.nominal_voltage, self.max_voltage];
        if voltages.iter().any(|v| !v.is_finite() || *v <= 0.0)
            || self.min_voltage > self.nominal_voltage
            || self.nominal_voltage > self.max_voltage
        {
            return Err(PackError::invalid_cell_spec(format!(
                "{} voltages must satisfy 0 < min <= nominal <= max, got {} / {} / {}",
                self.name, self.min_voltage, self.nominal_voltage, self.max_voltage
            )));
        }

        if !self.typical_capacity_mah.is_finite() || self.typical_capacity_mah <= 0.0 {
            return Err(PackError::invalid_cell_spec(format!(
                "{} capacity must be positive, got {}",
                self.name, self.typical_capacity_mah
            )));
        }

        if !self.weight_grams.is_finite() || self.weight_grams < 0.0 {
            return Err(PackError::invalid_cell_spec(format!(
                "{} weight must be non-negative, got {}",
                self.name, self.weight_grams
            )));
        }

        Ok(())
    }
}
