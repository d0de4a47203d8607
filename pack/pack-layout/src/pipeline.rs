//! End-to-end pack design: enumerate, generate, rank.

use pack_types::{
    CellSpec, ElectricalConfig, LayoutPriority, PackInputs, PackResult, PhysicalLayout, catalog,
};
use tracing::info;

use crate::enumerate::{closest_to_voltage, enumerate_configurations};
use crate::generate::generate_layouts;
use crate::rank::rank_layouts;

/// Ranked layouts of one electrical configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationLayouts {
    /// The configuration.
    pub configuration: ElectricalConfig,
    /// Its layouts, ranked and deduplicated.
    pub layouts: Vec<PhysicalLayout>,
}

/// Result of one design run.
#[derive(Debug, Clone, PartialEq)]
pub struct PackDesign {
    /// One entry per enumerated configuration, by increasing series count.
    pub options: Vec<ConfigurationLayouts>,
    /// Configuration whose nominal voltage is closest to the target.
    pub closest: Option<ElectricalConfig>,
    /// Number of layout candidates before deduplication.
    pub candidates: usize,
    /// Priority every option was ranked with.
    pub priority: LayoutPriority,
}

impl PackDesign {
    /// Every enumerated configuration.
    pub fn configurations(&self) -> impl Iterator<Item = &ElectricalConfig> + '_ {
        self.options.iter().map(|option| &option.configuration)
    }

    /// Ranked layouts of the configuration with the given code.
    ///
    /// Returns an empty slice for an unknown code.
    #[must_use]
    pub fn layouts_for(&self, code: &str) -> &[PhysicalLayout] {
        self.options
            .iter()
            .find(|option| option.configuration.code == code)
            .map(|option| option.layouts.as_slice())
            .unwrap_or_default()
    }

    /// The top-ranked layout of the closest-to-target configuration.
    #[must_use]
    pub fn best(&self) -> Option<&PhysicalLayout> {
        let closest = self.closest.as_ref()?;
        self.layouts_for(&closest.code).first()
    }

    /// Every configuration's layouts merged into one list and ranked once
    /// with [`priority`](Self::priority).
    ///
    /// Envelopes are unique across the whole list, so configurations sharing
    /// a cell count collapse onto the first configuration that produced each
    /// envelope.
    #[must_use]
    pub fn merged_layouts(&self) -> Vec<PhysicalLayout> {
        let merged = self
            .options
            .iter()
            .flat_map(|option| option.layouts.iter().cloned())
            .collect();
        rank_layouts(merged, self.priority)
    }

    /// Total number of ranked layouts across all configurations.
    #[must_use]
    pub fn layout_count(&self) -> usize {
        self.options.iter().map(|option| option.layouts.len()).sum()
    }

    /// Returns true if no layout satisfied the constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.iter().all(|option| option.layouts.is_empty())
    }
}

/// Runs the full pipeline for `cell`.
///
/// Each configuration's layouts are ranked and deduplicated separately, so
/// configurations that share a cell count keep their own envelopes. An
/// empty result is not an error.
///
/// # Errors
///
/// Returns [`PackError`](pack_types::PackError) if the inputs or the cell
/// specification fail validation.
///
/// # Example
///
/// ```
/// use pack_layout::design_pack;
/// use pack_types::{catalog, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 24).with_target_voltage(48.0);
/// let design = design_pack(&cell, &inputs).unwrap();
///
/// assert_eq!(design.closest.as_ref().unwrap().code, "12S2P");
/// assert_eq!(design.best().unwrap().configuration.code, "12S2P");
/// ```
pub fn design_pack(cell: &CellSpec, inputs: &PackInputs) -> PackResult<PackDesign> {
    let configurations = enumerate_configurations(cell, inputs)?;
    let closest = closest_to_voltage(&configurations, inputs.target_voltage).cloned();

    let mut candidates = 0;
    let mut options = Vec::with_capacity(configurations.len());
    for configuration in configurations {
        let generated = generate_layouts(&configuration, cell, inputs)?;
        candidates += generated.len();
        options.push(ConfigurationLayouts {
            layouts: rank_layouts(generated, inputs.layout_priority),
            configuration,
        });
    }

    let design = PackDesign {
        options,
        closest,
        candidates,
        priority: inputs.layout_priority,
    };

    info!(
        cell = %cell.name,
        cell_count = inputs.cell_count,
        configurations = design.options.len(),
        candidates,
        layouts = design.layout_count(),
        closest = design.closest.as_ref().map_or("none", |c| c.code.as_str()),
        "Designed battery pack"
    );

    Ok(design)
}

/// Looks up `inputs.cell_type` in the catalog and runs [`design_pack`].
///
/// # Errors
///
/// Returns [`PackError::UnknownCellType`](pack_types::PackError::UnknownCellType)
/// for an unknown key, otherwise the same errors as [`design_pack`].
pub fn design_pack_for(inputs: &PackInputs) -> PackResult<(CellSpec, PackDesign)> {
    let cell = catalog::lookup(&inputs.cell_type)?;
    let design = design_pack(&cell, inputs)?;
    Ok((cell, design))
}
