//! Manufacturing specification document for one selected layout.

use nalgebra::Vector3;
use pack_types::{
    CellPosition, CellSpec, ElectricalConfig, Orientation, PackError, PackInputs, PackResult,
    PhysicalLayout,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::wiring::wiring_notes;

/// Name written into the document metadata.
pub const GENERATOR: &str = "CellForge Battery Box Creator";

/// Document format version.
pub const SPEC_VERSION: &str = "1.0";

/// C-rate used to estimate the continuous discharge current.
///
/// A rough 0.2C figure, not a measured or datasheet value.
pub const DEFAULT_DISCHARGE_C_RATE: f64 = 0.2;

/// The exported manufacturing record.
///
/// Serializes to the camelCase JSON document consumed by the export
/// collaborators. Built once from a selected layout and never mutated,
/// apart from [`with_generated_date`](Self::with_generated_date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryPackSpec {
    /// Document metadata.
    pub pack_specification: SpecMetadata,
    /// The cell the pack is built from.
    pub cell_type: CellSpec,
    /// Series/parallel summary.
    pub configuration: ConfigurationSummary,
    /// Electrical ratings.
    pub electrical: ElectricalSummary,
    /// Envelope and grid.
    pub physical: PhysicalSummary,
    /// Spacing values the layout was generated with.
    pub spacing: SpacingSummary,
    /// One record per placed cell.
    pub cell_positions: Vec<CellRecord>,
    /// Assembly hints.
    pub wiring_notes: Vec<String>,
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMetadata {
    /// Generation timestamp, supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_date: Option<String>,
    /// Producing tool.
    pub generator: String,
    /// Document format version.
    pub version: String,
}

impl Default for SpecMetadata {
    fn default() -> Self {
        Self {
            generated_date: None,
            generator: GENERATOR.to_string(),
            version: SPEC_VERSION.to_string(),
        }
    }
}

/// Series/parallel summary of the chosen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSummary {
    /// Configuration code, e.g. `4S6P`.
    pub code: String,
    /// Series groups.
    pub series_count: usize,
    /// Cells per parallel group.
    pub parallel_count: usize,
    /// Cells available, including unused ones.
    pub total_cells: usize,
    /// Cells placed in the pack.
    pub cells_used: usize,
    /// Cells left out of the pack.
    pub cells_unused: usize,
}

/// Pack-level electrical ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricalSummary {
    /// Nominal pack voltage.
    pub nominal_voltage_v: f64,
    /// Fully charged pack voltage.
    pub max_voltage_v: f64,
    /// Cut-off pack voltage.
    pub min_voltage_v: f64,
    /// Pack capacity.
    pub capacity_ah: f64,
    /// Stored energy at nominal voltage.
    pub energy_wh: f64,
    /// Estimated at [`DEFAULT_DISCHARGE_C_RATE`].
    pub max_discharge_a: f64,
}

impl ElectricalSummary {
    fn from_config(config: &ElectricalConfig) -> Self {
        Self {
            nominal_voltage_v: config.nominal_voltage,
            max_voltage_v: config.max_voltage,
            min_voltage_v: config.min_voltage,
            capacity_ah: config.capacity_ah,
            energy_wh: config.energy_wh,
            max_discharge_a: config.capacity_ah * DEFAULT_DISCHARGE_C_RATE,
        }
    }
}

/// Grid counts. `rows` counts every row across all layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSummary {
    /// Columns along X.
    pub columns: usize,
    /// Rows along Y, summed over layers.
    pub rows: usize,
    /// Layers along Z.
    pub layers: usize,
}

/// An `{x, y, z}` size in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionsMm {
    /// Width.
    pub x: f64,
    /// Depth.
    pub y: f64,
    /// Height.
    pub z: f64,
}

impl From<Vector3<f64>> for DimensionsMm {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<DimensionsMm> for Vector3<f64> {
    fn from(d: DimensionsMm) -> Self {
        Self::new(d.x, d.y, d.z)
    }
}

/// Envelope, orientation and grid of the chosen layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalSummary {
    /// Mass of the placed cells.
    pub total_weight_kg: f64,
    /// Cell orientation.
    pub orientation: Orientation,
    /// `"honeycomb"` or `"rectangular"`.
    pub packing: String,
    /// Grid counts.
    pub layout: GridSummary,
    /// Envelope before wall clearance.
    pub pack_dimensions_mm: DimensionsMm,
    /// Envelope including wall clearance.
    pub with_clearance_mm: DimensionsMm,
    /// Volume of the clearance envelope.
    pub volume_cm3: f64,
}

/// Spacing values echoed from the inputs, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSummary {
    /// Gap between neighbouring cells.
    pub cell_gap_mm: f64,
    /// Clearance to each wall.
    pub wall_clearance_mm: f64,
    /// Top nickel strip allowance.
    pub nickel_strip_top_mm: f64,
    /// Bottom nickel strip allowance.
    pub nickel_strip_bottom_mm: f64,
}

impl From<&PackInputs> for SpacingSummary {
    fn from(inputs: &PackInputs) -> Self {
        Self {
            cell_gap_mm: inputs.cell_gap,
            wall_clearance_mm: inputs.wall_clearance,
            nickel_strip_top_mm: inputs.nickel_strip_top,
            nickel_strip_bottom_mm: inputs.nickel_strip_bottom,
        }
    }
}

/// One row of the cell position table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    /// Placement index.
    pub index: usize,
    /// Centre X.
    pub x_mm: f64,
    /// Centre Y.
    pub y_mm: f64,
    /// Bottom face of the cell.
    pub z_mm: f64,
    /// Series group of the cell.
    pub series_group: usize,
    /// Slot within the parallel group.
    pub parallel_group: usize,
    /// Positive terminal faces +axis.
    pub polarity_up: bool,
}

impl From<&CellPosition> for CellRecord {
    fn from(p: &CellPosition) -> Self {
        Self {
            index: p.index,
            x_mm: p.x(),
            y_mm: p.y(),
            z_mm: p.z(),
            series_group: p.series_position,
            parallel_group: p.parallel_group,
            polarity_up: p.polarity_up,
        }
    }
}

/// Builds the manufacturing record for `layout`.
///
/// # Errors
///
/// Returns [`PackError`] if `inputs` or `cell` fail validation.
///
/// # Example
///
/// ```
/// use pack_layout::design_pack_for;
/// use pack_spec::generate_pack_spec;
/// use pack_types::PackInputs;
///
/// let inputs = PackInputs::new("18650", 24).with_target_voltage(14.8);
/// let (cell, design) = design_pack_for(&inputs).unwrap();
/// let layout = design.best().unwrap();
///
/// let spec = generate_pack_spec(layout, &cell, &inputs).unwrap();
/// assert_eq!(spec.configuration.code, "4S6P");
/// assert_eq!(spec.cell_positions.len(), 24);
/// ```
pub fn generate_pack_spec(
    layout: &PhysicalLayout,
    cell: &CellSpec,
    inputs: &PackInputs,
) -> PackResult<BatteryPackSpec> {
    inputs.validate()?;
    cell.validate()?;

    let config = &layout.configuration;
    let spec = BatteryPackSpec {
        pack_specification: SpecMetadata::default(),
        cell_type: cell.clone(),
        configuration: ConfigurationSummary {
            code: config.code.clone(),
            series_count: config.series,
            parallel_count: config.parallel,
            total_cells: inputs.cell_count,
            cells_used: config.cells_used,
            cells_unused: config.cells_unused,
        },
        electrical: ElectricalSummary::from_config(config),
        physical: PhysicalSummary {
            total_weight_kg: config.weight_kg,
            orientation: layout.orientation,
            packing: layout.packing().to_string(),
            layout: GridSummary {
                columns: layout.cols,
                rows: layout.rows(),
                layers: layout.layers,
            },
            pack_dimensions_mm: layout.pack_dimensions.into(),
            with_clearance_mm: layout.total_dimensions.into(),
            volume_cm3: layout.volume_cm3,
        },
        spacing: SpacingSummary::from(inputs),
        cell_positions: layout.cell_positions.iter().map(CellRecord::from).collect(),
        wiring_notes: wiring_notes(config),
    };

    debug!(
        code = %config.code,
        cells = spec.cell_positions.len(),
        layout = %layout.label(),
        "Generated pack specification"
    );

    Ok(spec)
}

impl BatteryPackSpec {
    /// Stamps the document with a caller-supplied timestamp.
    #[must_use]
    pub fn with_generated_date(mut self, date: impl Into<String>) -> Self {
        self.pack_specification.generated_date = Some(date.into());
        self
    }

    /// Configuration code, e.g. `"4S6P"`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.configuration.code
    }

    /// File name the document is exported under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("specs-{}.json", self.code())
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> PackResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PackError::Serialization(e.to_string()))
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Serialization`] if the document is malformed or
    /// missing required fields.
    pub fn from_json(json: &str) -> PackResult<Self> {
        serde_json::from_str(json).map_err(|e| PackError::Serialization(e.to_string()))
    }
}
