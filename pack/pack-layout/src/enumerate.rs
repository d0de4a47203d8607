//! Series/parallel configuration enumeration.

use pack_types::{CellSpec, ElectricalConfig, PackInputs, PackResult};
use tracing::debug;

/// Enumerates every series/parallel split of the available cells.
///
/// For each series count `s` in `1..=cell_count` the parallel count is
/// `cell_count / s` (floor). Splits that leave cells unused are skipped when
/// `inputs.show_only_exact` is set. The result is ordered by increasing
/// series count and is never filtered by voltage; use
/// [`closest_to_voltage`] to pick a configuration for presentation.
///
/// The `s = cell_count, p = 1` split always qualifies, so the result is
/// never empty.
///
/// # Errors
///
/// Returns [`PackError`](pack_types::PackError) if the inputs or the cell
/// specification fail validation.
///
/// # Example
///
/// ```
/// use pack_layout::enumerate_configurations;
/// use pack_types::{catalog, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 24).with_exact_only(true);
/// let configs = enumerate_configurations(&cell, &inputs).unwrap();
///
/// let codes: Vec<_> = configs.iter().map(|c| c.code.as_str()).collect();
/// assert_eq!(
///     codes,
///     ["1S24P", "2S12P", "3S8P", "4S6P", "6S4P", "8S3P", "12S2P", "24S1P"]
/// );
/// ```
pub fn enumerate_configurations(
    cell: &CellSpec,
    inputs: &PackInputs,
) -> PackResult<Vec<ElectricalConfig>> {
    inputs.validate()?;
    cell.validate()?;

    let cell_count = inputs.cell_count;
    let mut configs = Vec::new();
    let mut skipped = 0usize;

    for series in 1..=cell_count {
        let parallel = cell_count / series;
        if parallel < 1 {
            continue;
        }

        let cells_unused = cell_count - series * parallel;
        if inputs.show_only_exact && cells_unused > 0 {
            skipped += 1;
            continue;
        }

        configs.push(ElectricalConfig::new(series, parallel, cell_count, cell));
    }

    debug!(
        cell_count,
        configurations = configs.len(),
        inexact_skipped = skipped,
        "Enumerated electrical configurations"
    );

    Ok(configs)
}

/// Picks the configuration whose nominal voltage is closest to `target`.
///
/// Ties keep the earliest configuration (the one with fewer series groups).
/// Returns `None` only for an empty slice.
///
/// # Example
///
/// ```
/// use pack_layout::{closest_to_voltage, enumerate_configurations};
/// use pack_types::{catalog, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 52).with_exact_only(false);
/// let configs = enumerate_configurations(&cell, &inputs).unwrap();
///
/// let closest = closest_to_voltage(&configs, 48.0).unwrap();
/// assert_eq!(closest.code, "13S4P");
/// ```
#[must_use]
pub fn closest_to_voltage(configs: &[ElectricalConfig], target: f64) -> Option<&ElectricalConfig> {
    configs.iter().reduce(|best, candidate| {
        if candidate.voltage_error(target) < best.voltage_error(target) {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pack_types::{PackError, catalog};

    fn cell_18650() -> CellSpec {
        catalog::lookup("18650").unwrap()
    }

    #[test]
    fn test_single_cell() {
        let inputs = PackInputs::new("18650", 1);
        let configs = enumerate_configurations(&cell_18650(), &inputs).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].code, "1S1P");
        assert_eq!(configs[0].cells_unused, 0);
    }

    #[test]
    fn test_inexact_included_when_allowed() {
        let inputs = PackInputs::new("18650", 10).with_exact_only(false);
        let configs = enumerate_configurations(&cell_18650(), &inputs).unwrap();
        assert_eq!(configs.len(), 10);
        let three = &configs[2];
        assert_eq!(three.code, "3S3P");
        assert_eq!(three.cells_used, 9);
        assert_eq!(three.cells_unused, 1);
        // s > n/2 collapses to p = 1
        assert_eq!(configs[6].code, "7S1P");
        assert_eq!(configs[6].cells_unused, 3);
    }

    #[test]
    fn test_exact_filter() {
        let inputs = PackInputs::new("18650", 10).with_exact_only(true);
        let configs = enumerate_configurations(&cell_18650(), &inputs).unwrap();
        let codes: Vec<_> = configs.iter().map(|c| c.code.clone()).collect();
        assert_eq!(codes, ["1S10P", "2S5P", "5S2P", "10S1P"]);
        assert!(configs.iter().all(ElectricalConfig::is_exact));
    }

    #[test]
    fn test_prime_count_exact() {
        let inputs = PackInputs::new("18650", 13).with_exact_only(true);
        let configs = enumerate_configurations(&cell_18650(), &inputs).unwrap();
        let codes: Vec<_> = configs.iter().map(|c| c.code.clone()).collect();
        assert_eq!(codes, ["1S13P", "13S1P"]);
    }

    #[test]
    fn test_ordered_by_series() {
        let inputs = PackInputs::new("18650", 36).with_exact_only(false);
        let configs = enumerate_configurations(&cell_18650(), &inputs).unwrap();
        assert!(configs.windows(2).all(|w| w[0].series < w[1].series));
    }

    #[test]
    fn test_rejects_zero_cells() {
        let inputs = PackInputs::new("18650", 0);
        assert_eq!(
            enumerate_configurations(&cell_18650(), &inputs),
            Err(PackError::InvalidCellCount(0))
        );
    }

    #[test]
    fn test_rejects_invalid_cell() {
        let cell = CellSpec::cylinder("blank", 18.0, 65.0);
        let inputs = PackInputs::new("custom", 4);
        assert!(matches!(
            enumerate_configurations(&cell, &inputs),
            Err(PackError::InvalidCellSpec(_))
        ));
    }

    #[test]
    fn test_closest_prefers_earliest_on_tie() {
        let cell = CellSpec::cylinder("unit", 10.0, 10.0)
            .with_voltages(1.0, 1.0, 1.0)
            .with_capacity_mah(1000.0);
        let configs = vec![
            ElectricalConfig::new(2, 1, 4, &cell),
            ElectricalConfig::new(4, 1, 4, &cell),
        ];
        // both are 1 V away from 3 V
        assert_eq!(closest_to_voltage(&configs, 3.0).unwrap().code, "2S1P");
        assert_eq!(closest_to_voltage(&configs, 3.9).unwrap().code, "4S1P");
        assert!(closest_to_voltage(&[], 3.0).is_none());
    }
}
