//! Nickel strip wiring: assembly notes and a terminal-level strip plan.

use std::fmt;

use nalgebra::Point3;
use pack_types::{CellPosition, ElectricalConfig, PhysicalLayout};

/// Recommended strip for parallel connections, as `(thickness, width)` mm.
pub const PARALLEL_STRIP_MM: (f64, f64) = (0.15, 8.0);

/// Recommended strip for series connections, as `(thickness, width)` mm.
pub const SERIES_STRIP_MM: (f64, f64) = (0.15, 10.0);

/// Fixed assembly notes for `config`.
///
/// # Example
///
/// ```
/// use pack_spec::wiring_notes;
/// use pack_types::{catalog, ElectricalConfig};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let notes = wiring_notes(&ElectricalConfig::new(4, 6, 24, &cell));
/// assert_eq!(notes[0], "Each parallel group consists of 6 cells");
/// assert_eq!(notes[4], "Total series connections: 3");
/// ```
#[must_use]
pub fn wiring_notes(config: &ElectricalConfig) -> Vec<String> {
    vec![
        format!("Each parallel group consists of {} cells", config.parallel),
        "Series connections alternate polarity".to_string(),
        format!(
            "Recommend {}mm x {}mm nickel strip for parallel connections",
            PARALLEL_STRIP_MM.0, PARALLEL_STRIP_MM.1
        ),
        format!(
            "Recommend {}mm x {}mm nickel strip for series connections",
            SERIES_STRIP_MM.0, SERIES_STRIP_MM.1
        ),
        format!(
            "Total series connections: {}",
            config.series.saturating_sub(1)
        ),
        format!(
            "Total parallel connections: {}",
            config.parallel * config.series
        ),
    ]
}

/// Which kind of connection a strip makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripKind {
    /// Joins like terminals within a parallel group.
    Parallel,
    /// Joins the negative side of one group to the positive side of the next.
    Series,
}

impl fmt::Display for StripKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel => f.write_str("parallel"),
            Self::Series => f.write_str("series"),
        }
    }
}

/// Cell terminal polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// Positive terminal.
    Positive,
    /// Negative terminal.
    Negative,
}

/// One straight strip between two terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSegment {
    /// Connection kind.
    pub kind: StripKind,
    /// Series group the strip starts in.
    pub series_group: usize,
    /// Terminal the strip touches at `from` (parallel strips touch the same
    /// terminal at both ends).
    pub terminal: Terminal,
    /// Start point in mm.
    pub from: Point3<f64>,
    /// End point in mm.
    pub to: Point3<f64>,
}

impl StripSegment {
    /// Straight-line length in mm.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }
}

/// Every strip needed to wire one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct WiringPlan {
    /// Series groups.
    pub series: usize,
    /// Cells per group.
    pub parallel: usize,
    /// Parallel strips first (group by group), then series strips.
    pub segments: Vec<StripSegment>,
}

impl WiringPlan {
    /// Segments of one kind.
    pub fn segments_of(&self, kind: StripKind) -> impl Iterator<Item = &StripSegment> + '_ {
        self.segments.iter().filter(move |s| s.kind == kind)
    }

    /// Number of segments of one kind.
    #[must_use]
    pub fn count(&self, kind: StripKind) -> usize {
        self.segments_of(kind).count()
    }

    /// Total strip length of one kind in mm.
    #[must_use]
    pub fn strip_length_mm(&self, kind: StripKind) -> f64 {
        self.segments_of(kind).map(StripSegment::length).sum()
    }
}

/// Position of a cell terminal.
///
/// The terminal sits at the cell centre offset by half the cell extent
/// along the orientation's terminal axis. The positive terminal faces
/// `+axis` when `polarity_up` is set.
#[must_use]
pub fn terminal_point(layout: &PhysicalLayout, cell: &CellPosition, terminal: Terminal) -> Point3<f64> {
    let extents = layout.cell_extents;
    let centre = Point3::new(cell.x(), cell.y(), cell.z() + extents.z / 2.0);

    let axis = layout.orientation.terminal_axis();
    let half = extents[axis.index()] / 2.0;
    let faces_up = (terminal == Terminal::Positive) == cell.polarity_up;
    let sign = if faces_up { 1.0 } else { -1.0 };

    centre + axis.unit() * (sign * half)
}

/// Lays out the nickel strips for `layout`.
///
/// Within each series group, consecutive cells (in placement order) are
/// joined on both their positive and their negative terminals. Each pair of
/// adjacent groups is joined once, from the first cell's negative terminal
/// of group `s` to the first cell's positive terminal of group `s + 1`.
///
/// # Example
///
/// ```
/// use pack_layout::{generate_layouts, rank_layouts};
/// use pack_spec::{plan_wiring, StripKind};
/// use pack_types::{catalog, ElectricalConfig, LayoutPriority, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 12);
/// let config = ElectricalConfig::new(3, 4, 12, &cell);
/// let layouts = generate_layouts(&config, &cell, &inputs).unwrap();
/// let best = &rank_layouts(layouts, LayoutPriority::MinimizeZ)[0];
///
/// let plan = plan_wiring(best);
/// assert_eq!(plan.count(StripKind::Parallel), 2 * 3 * 3);
/// assert_eq!(plan.count(StripKind::Series), 2);
/// ```
#[must_use]
pub fn plan_wiring(layout: &PhysicalLayout) -> WiringPlan {
    let config = &layout.configuration;
    let mut segments = Vec::new();
    let mut heads = Vec::with_capacity(config.series);

    for group in 0..config.series {
        let cells: Vec<_> = layout.series_group(group).collect();
        if let Some(first) = cells.first() {
            heads.push(*first);
        }
        for pair in cells.windows(2) {
            for terminal in [Terminal::Positive, Terminal::Negative] {
                segments.push(StripSegment {
                    kind: StripKind::Parallel,
                    series_group: group,
                    terminal,
                    from: terminal_point(layout, pair[0], terminal),
                    to: terminal_point(layout, pair[1], terminal),
                });
            }
        }
    }

    for (group, pair) in heads.windows(2).enumerate() {
        segments.push(StripSegment {
            kind: StripKind::Series,
            series_group: group,
            terminal: Terminal::Negative,
            from: terminal_point(layout, pair[0], Terminal::Negative),
            to: terminal_point(layout, pair[1], Terminal::Positive),
        });
    }

    WiringPlan {
        series: config.series,
        parallel: config.parallel,
        segments,
    }
}
