//! Layout ranking and envelope deduplication.

use std::cmp::Ordering;

use hashbrown::HashSet;
use pack_types::{LayoutPriority, PhysicalLayout};
use tracing::debug;

/// Secondary sort keys for presenting a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Smallest total volume first.
    #[default]
    Volume,
    /// Smallest X×Y footprint first.
    Footprint,
    /// Lowest height first.
    Height,
    /// Shortest longest side first.
    LongestSide,
}

impl SortKey {
    fn value(self, layout: &PhysicalLayout) -> f64 {
        match self {
            Self::Volume => layout.volume_cm3,
            Self::Footprint => layout.footprint_cm2,
            Self::Height => layout.total_dimensions.z,
            Self::LongestSide => layout.longest_side(),
        }
    }
}

/// Orders two layouts under `priority`.
///
/// | Priority      | Primary                | Tie-break |
/// |---------------|------------------------|-----------|
/// | `MinimizeZ`   | total Z ascending      | volume    |
/// | `MinimizeXy`  | footprint ascending    | volume    |
/// | `Balanced`    | `1 - cubeness`         | volume    |
/// | `Custom`      | volume ascending       |           |
#[must_use]
pub fn compare_layouts(a: &PhysicalLayout, b: &PhysicalLayout, priority: LayoutPriority) -> Ordering {
    let primary = match priority {
        LayoutPriority::MinimizeZ => a.total_dimensions.z.total_cmp(&b.total_dimensions.z),
        LayoutPriority::MinimizeXy => a.footprint_cm2.total_cmp(&b.footprint_cm2),
        LayoutPriority::Balanced => (1.0 - a.cubeness).total_cmp(&(1.0 - b.cubeness)),
        LayoutPriority::Custom => Ordering::Equal,
    };
    primary.then_with(|| a.volume_cm3.total_cmp(&b.volume_cm3))
}

/// Sorts candidate layouts by `priority` and drops envelope duplicates.
///
/// The sort is stable, so candidates comparing equal keep their generation
/// order. Deduplication keeps the first layout for each
/// [`dedup_key`](PhysicalLayout::dedup_key), which is therefore the
/// best-ranked representative of its envelope.
///
/// # Example
///
/// ```
/// use pack_layout::{generate_layouts, rank_layouts};
/// use pack_types::{catalog, ElectricalConfig, LayoutPriority, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 8);
/// let config = ElectricalConfig::new(2, 4, 8, &cell);
///
/// let layouts = generate_layouts(&config, &cell, &inputs).unwrap();
/// let ranked = rank_layouts(layouts, LayoutPriority::MinimizeZ);
/// assert_eq!(ranked[0].layers, 1);
/// ```
#[must_use]
pub fn rank_layouts(mut layouts: Vec<PhysicalLayout>, priority: LayoutPriority) -> Vec<PhysicalLayout> {
    let candidates = layouts.len();
    layouts.sort_by(|a, b| compare_layouts(a, b, priority));
    let ranked = dedup_envelopes(layouts);

    debug!(
        priority = priority.name(),
        candidates,
        unique = ranked.len(),
        "Ranked layouts"
    );

    ranked
}

/// Keeps the first layout for each distinct envelope, preserving order.
#[must_use]
pub fn dedup_envelopes(layouts: Vec<PhysicalLayout>) -> Vec<PhysicalLayout> {
    let mut seen = HashSet::with_capacity(layouts.len());
    layouts
        .into_iter()
        .filter(|layout| seen.insert(layout.dedup_key()))
        .collect()
}

/// Re-sorts an already ranked list by a presentation key (stable).
pub fn sort_layouts(layouts: &mut [PhysicalLayout], key: SortKey) {
    layouts.sort_by(|a, b| key.value(a).total_cmp(&key.value(b)));
}
