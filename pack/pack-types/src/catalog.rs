//! Built-in cell catalog keyed by the usual industry identifiers.
//!
//! Values are typical datasheet figures; capacity in mAh and weight in g.

use crate::cell::CellSpec;
use crate::error::{PackError, PackResult};

/// Catalog keys in display order.
pub const KEYS: [&str; 15] = [
    "18650",
    "21700",
    "26650",
    "32650",
    "14500",
    "18350",
    "AA_NIMH",
    "AAA_NIMH",
    "D_NIMH",
    "POUCH_SMALL",
    "POUCH_MEDIUM",
    "POUCH_LARGE",
    "PRISMATIC_SMALL",
    "PRISMATIC_LARGE",
    "9V_NIMH",
];

/// Looks up a catalog cell by key.
///
/// # Errors
///
/// Returns [`PackError::UnknownCellType`] if the key is not in the catalog.
///
/// # Example
///
/// ```
/// use pack_types::catalog;
///
/// let cell = catalog::lookup("21700").unwrap();
/// assert_eq!(cell.name, "21700 Lithium Ion");
/// assert!(catalog::lookup("99999").is_err());
/// ```
pub fn lookup(key: &str) -> PackResult<CellSpec> {
    builtin(key).ok_or_else(|| PackError::UnknownCellType(key.to_string()))
}

/// Returns `(key, display name)` pairs for every catalog entry.
#[must_use]
pub fn options() -> Vec<(&'static str, String)> {
    KEYS.iter()
        .filter_map(|key| builtin(key).map(|cell| (*key, cell.name)))
        .collect()
}

/// Returns every catalog entry with its key.
#[must_use]
pub fn all() -> Vec<(&'static str, CellSpec)> {
    KEYS.iter()
        .filter_map(|key| builtin(key).map(|cell| (*key, cell)))
        .collect()
}

fn li_ion(name: &str, diameter: f64, length: f64, capacity: f64, weight: f64) -> CellSpec {
    CellSpec::cylinder(name, diameter, length)
        .with_voltages(3.7, 4.2, 2.5)
        .with_capacity_mah(capacity)
        .with_weight_grams(weight)
}

fn nimh(name: &str, diameter: f64, length: f64, capacity: f64, weight: f64) -> CellSpec {
    CellSpec::cylinder(name, diameter, length)
        .with_voltages(1.2, 1.4, 1.0)
        .with_capacity_mah(capacity)
        .with_weight_grams(weight)
}

fn lipo_pouch(
    name: &str,
    width: f64,
    length: f64,
    thickness: f64,
    capacity: f64,
    weight: f64,
) -> CellSpec {
    CellSpec::prismatic(name, width, length, thickness)
        .with_voltages(3.7, 4.2, 3.0)
        .with_capacity_mah(capacity)
        .with_weight_grams(weight)
}

fn lifepo4_prismatic(
    name: &str,
    width: f64,
    length: f64,
    thickness: f64,
    capacity: f64,
    weight: f64,
) -> CellSpec {
    CellSpec::prismatic(name, width, length, thickness)
        .with_voltages(3.2, 3.65, 2.5)
        .with_capacity_mah(capacity)
        .with_weight_grams(weight)
}

fn builtin(key: &str) -> Option<CellSpec> {
    let cell = match key {
        "18650" => li_ion("18650 Lithium Ion", 18.6, 65.2, 2600.0, 48.0),
        "21700" => li_ion("21700 Lithium Ion", 21.7, 70.2, 4000.0, 68.0),
        "26650" => li_ion("26650 Lithium Ion", 26.5, 65.4, 5000.0, 95.0),
        "32650" => CellSpec::cylinder("32650 LiFePO4", 32.4, 67.7)
            .with_voltages(3.2, 3.65, 2.0)
            .with_capacity_mah(6000.0)
            .with_weight_grams(145.0),
        "14500" => li_ion("14500 (AA Size) Lithium", 14.5, 50.5, 800.0, 23.0),
        "18350" => li_ion("18350 Lithium Ion", 18.6, 35.0, 900.0, 30.0),
        "AA_NIMH" => nimh("AA NiMH Rechargeable", 14.5, 50.5, 2000.0, 28.0),
        "AAA_NIMH" => nimh("AAA NiMH Rechargeable", 10.5, 44.5, 800.0, 12.0),
        "D_NIMH" => nimh("D Cell NiMH", 34.2, 61.5, 10000.0, 160.0),
        "POUCH_SMALL" => lipo_pouch("LiPo Pouch 103040", 30.0, 40.0, 10.0, 1200.0, 25.0),
        "POUCH_MEDIUM" => lipo_pouch("LiPo Pouch 505068", 50.0, 68.0, 5.0, 2500.0, 45.0),
        "POUCH_LARGE" => lipo_pouch("LiPo Pouch 7565121", 65.0, 121.0, 7.5, 5000.0, 95.0),
        "PRISMATIC_SMALL" => {
            lifepo4_prismatic("Prismatic LiFePO4 10Ah", 70.0, 130.0, 27.0, 10000.0, 330.0)
        }
        "PRISMATIC_LARGE" => {
            lifepo4_prismatic("Prismatic LiFePO4 100Ah", 130.0, 200.0, 50.0, 100_000.0, 3200.0)
        }
        "9V_NIMH" => CellSpec::prismatic("9V NiMH Rechargeable", 26.5, 48.5, 17.5)
            .with_voltages(8.4, 9.6, 7.2)
            .with_capacity_mah(200.0)
            .with_weight_grams(45.0),
        _ => return None,
    };
    Some(cell)
}
