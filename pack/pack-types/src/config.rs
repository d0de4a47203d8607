//! Series/parallel electrical configurations.

use std::fmt;

use crate::cell::CellSpec;
use crate::error::{PackError, PackResult};

/// One candidate series/parallel split of the available cells.
///
/// Cells beyond `series × parallel` are simply left out of the pack; they
/// are reported in [`cells_unused`](Self::cells_unused) and not tracked as
/// spares.
///
/// # Example
///
/// ```
/// use pack_types::{catalog, ElectricalConfig};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let config = ElectricalConfig::new(4, 6, 24, &cell);
///
/// assert_eq!(config.code, "4S6P");
/// assert_eq!(config.cells_used, 24);
/// assert!((config.nominal_voltage - 14.8).abs() < 1e-9);
/// assert!((config.capacity_ah - 15.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ElectricalConfig {
    /// Number of parallel groups wired in series (S).
    pub series: usize,
    /// Number of cells in each parallel group (P).
    pub parallel: usize,
    /// Short code, e.g. `"4S6P"`.
    pub code: String,
    /// `series × parallel`.
    pub cells_used: usize,
    /// Available cells left out of the pack.
    pub cells_unused: usize,
    /// Pack nominal voltage in V.
    pub nominal_voltage: f64,
    /// Pack fully charged voltage in V.
    pub max_voltage: f64,
    /// Pack cut-off voltage in V.
    pub min_voltage: f64,
    /// Pack capacity in Ah.
    pub capacity_ah: f64,
    /// Pack energy in Wh.
    pub energy_wh: f64,
    /// Mass of the used cells in kg.
    pub weight_kg: f64,
}

impl ElectricalConfig {
    /// Derives the electrical metrics of an `series`S`parallel`P split.
    ///
    /// `cell_count` is the number of cells available; it must be at least
    /// `series × parallel`, otherwise `cells_unused` saturates at zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(series: usize, parallel: usize, cell_count: usize, cell: &CellSpec) -> Self {
        let cells_used = series * parallel;
        let s = series as f64;
        let p = parallel as f64;

        let nominal_voltage = s * cell.nominal_voltage;
        let capacity_ah = p * cell.typical_capacity_mah / 1000.0;

        Self {
            series,
            parallel,
            code: format!("{series}S{parallel}P"),
            cells_used,
            cells_unused: cell_count.saturating_sub(cells_used),
            nominal_voltage,
            max_voltage: s * cell.max_voltage,
            min_voltage: s * cell.min_voltage,
            capacity_ah,
            energy_wh: nominal_voltage * capacity_ah,
            weight_kg: cells_used as f64 * cell.weight_grams / 1000.0,
        }
    }

    /// Returns true if every available cell is used.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.cells_unused == 0
    }

    /// Checks that the split is non-empty and that `cells_used` equals
    /// `series × parallel`.
    ///
    /// Configurations built with [`new`](Self::new) always pass; this
    /// guards hand-assembled values.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidConfiguration`] otherwise.
    pub fn validate(&self) -> PackResult<()> {
        if self.series == 0
            || self.parallel == 0
            || self.series.checked_mul(self.parallel) != Some(self.cells_used)
        {
            return Err(PackError::InvalidConfiguration {
                series: self.series,
                parallel: self.parallel,
                cells_used: self.cells_used,
            });
        }
        Ok(())
    }

    /// Absolute difference between the nominal voltage and `target`.
    #[must_use]
    pub fn voltage_error(&self, target: f64) -> f64 {
        (self.nominal_voltage - target).abs()
    }
}

impl fmt::Display for ElectricalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1} V, {:.2} Ah, {:.1} Wh ({} cells",
            self.code, self.nominal_voltage, self.capacity_ah, self.energy_wh, self.cells_used
        )?;
        if self.cells_unused > 0 {
            write!(f, ", {} unused", self.cells_unused)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cell() -> CellSpec {
        CellSpec::cylinder("Test", 18.6, 65.2)
            .with_voltages(3.7, 4.2, 2.5)
            .with_capacity_mah(2600.0)
            .with_weight_grams(48.0)
    }

    #[test]
    fn test_derived_metrics() {
        let config = ElectricalConfig::new(13, 4, 52, &cell());
        assert_eq!(config.code, "13S4P");
        assert_eq!(config.cells_used, 52);
        assert_eq!(config.cells_unused, 0);
        assert_relative_eq!(config.nominal_voltage, 48.1, epsilon = 1e-9);
        assert_relative_eq!(config.max_voltage, 54.6, epsilon = 1e-9);
        assert_relative_eq!(config.min_voltage, 32.5, epsilon = 1e-9);
        assert_relative_eq!(config.capacity_ah, 10.4, epsilon = 1e-9);
        assert_relative_eq!(config.energy_wh, 48.1 * 10.4, epsilon = 1e-9);
        assert_relative_eq!(config.weight_kg, 2.496, epsilon = 1e-9);
        assert!(config.is_exact());
    }

    #[test]
    fn test_validate() {
        assert!(ElectricalConfig::new(4, 6, 24, &cell()).validate().is_ok());

        let no_parallel = ElectricalConfig {
            parallel: 0,
            ..ElectricalConfig::new(4, 1, 4, &cell())
        };
        assert!(matches!(
            no_parallel.validate(),
            Err(PackError::InvalidConfiguration { parallel: 0, .. })
        ));

        let no_series = ElectricalConfig {
            series: 0,
            ..ElectricalConfig::new(1, 4, 4, &cell())
        };
        assert!(no_series.validate().is_err());

        let miscounted = ElectricalConfig {
            cells_used: 6,
            ..ElectricalConfig::new(2, 2, 4, &cell())
        };
        assert!(matches!(
            miscounted.validate(),
            Err(PackError::InvalidConfiguration { cells_used: 6, .. })
        ));
    }

    #[test]
    fn test_unused_cells() {
        let config = ElectricalConfig::new(3, 3, 10, &cell());
        assert_eq!(config.cells_used, 9);
        assert_eq!(config.cells_unused, 1);
        assert!(!config.is_exact());
    }

    #[test]
    fn test_voltage_error() {
        let config = ElectricalConfig::new(4, 1, 4, &cell());
        assert_relative_eq!(config.voltage_error(12.0), 2.8, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let config = ElectricalConfig::new(3, 3, 10, &cell());
        let text = config.to_string();
        assert!(text.starts_with("3S3P: 11.1 V"));
        assert!(text.contains("1 unused"));
    }
}
