//! Physical grid layout generation.
//!
//! For one electrical configuration this module expands the allowed cell
//! orientations, enumerates every rectangular `cols × rows_per_layer ×
//! layers` factorization of the cell count, dimensions each grid and places
//! every cell.

// Grid counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};
use pack_types::{
    CellPosition, CellSpec, ElectricalConfig, Orientation, PackInputs, PackResult, PhysicalLayout,
    envelope_metrics,
};
use tracing::debug;

/// Row pitch factor for hexagonal close packing, `sin(60°)`.
///
/// Offsetting every other row by half a cell lets adjacent rows nest, so
/// the row-to-row distance shrinks from one cell to `sin(60°)` of a cell.
pub const HEX_PACKING_ROW_COMPRESSION: f64 = 0.866_025_403_784_438_6;

/// Extra X allowance for honeycomb packing, as a fraction of the cell pitch.
pub const HEX_PACKING_ROW_OFFSET: f64 = 0.5;

/// A rectangular grid shape whose cell count equals the configuration's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Columns along X.
    pub cols: usize,
    /// Rows along Y per layer.
    pub rows_per_layer: usize,
    /// Layers along Z.
    pub layers: usize,
}

impl GridShape {
    /// Number of cells in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows_per_layer * self.layers
    }
}

/// Enumerates every `(cols, rows_per_layer, layers)` triple whose product is
/// `cells`.
///
/// Triples are ordered by `cols`, then by `layers`. This is an exhaustive
/// divisor-triple enumeration; `(cells, 1, 1)` is always present for
/// `cells >= 1`.
///
/// # Example
///
/// ```
/// use pack_layout::grid_factorizations;
///
/// let shapes = grid_factorizations(4);
/// let triples: Vec<_> = shapes
///     .iter()
///     .map(|g| (g.cols, g.rows_per_layer, g.layers))
///     .collect();
/// assert_eq!(
///     triples,
///     [(1, 4, 1), (1, 2, 2), (1, 1, 4), (2, 2, 1), (2, 1, 2), (4, 1, 1)]
/// );
/// ```
#[must_use]
pub fn grid_factorizations(cells: usize) -> Vec<GridShape> {
    let mut shapes = Vec::new();
    for cols in (1..=cells).filter(|c| cells % c == 0) {
        let rows = cells / cols;
        for layers in (1..=rows).filter(|l| rows % l == 0) {
            shapes.push(GridShape {
                cols,
                rows_per_layer: rows / layers,
                layers,
            });
        }
    }
    shapes
}

/// Generates every physical layout of `config` allowed by `inputs`.
///
/// Orientations come from [`Orientation::candidates`]; each orientation is
/// combined with every grid from [`grid_factorizations`]. Candidates whose
/// total envelope exceeds `inputs.custom_max_dimensions` on any axis are
/// dropped silently, so the result may be empty.
///
/// Honeycomb envelopes use the compressed row pitch for every row, so the
/// outermost rows overhang the pack Y extent by
/// `pitch.y × (1 - HEX_PACKING_ROW_COMPRESSION) / 2` per side (about 1.2 mm
/// for an 18650). The overhang reaches into the wall clearance; with zero
/// clearance the cells extend past `total_dimensions.y`. Cell centres always
/// lie inside the envelope.
///
/// # Errors
///
/// Returns [`PackError`](pack_types::PackError) if the inputs, the cell
/// specification or `config` fail validation.
///
/// # Example
///
/// ```
/// use pack_layout::generate_layouts;
/// use pack_types::{catalog, ElectricalConfig, PackInputs};
///
/// let cell = catalog::lookup("18650").unwrap();
/// let inputs = PackInputs::new("18650", 16);
/// let config = ElectricalConfig::new(4, 4, 16, &cell);
///
/// let layouts = generate_layouts(&config, &cell, &inputs).unwrap();
/// assert!(layouts.iter().any(|l| (l.cols, l.rows_per_layer, l.layers) == (4, 4, 1)));
/// assert!(layouts.iter().all(|l| l.cell_positions.len() == 16));
/// ```
pub fn generate_layouts(
    config: &ElectricalConfig,
    cell: &CellSpec,
    inputs: &PackInputs,
) -> PackResult<Vec<PhysicalLayout>> {
    inputs.validate()?;
    cell.validate()?;
    config.validate()?;

    let grids = grid_factorizations(config.cells_used);
    let mut layouts = Vec::new();

    for orientation in Orientation::candidates(cell, inputs.cell_orientation) {
        let extents = orientation.cell_extents(cell)?;
        let pitch = orientation.cell_pitch(cell, inputs.cell_gap)?;
        let honeycomb = inputs.use_honeycomb && orientation.supports_honeycomb();

        let before = layouts.len();
        let mut rejected = 0usize;

        for grid in &grids {
            let (pack, total) = envelope(grid, &pitch, honeycomb, inputs);

            if exceeds(&total, inputs.custom_max_dimensions.as_ref()) {
                rejected += 1;
                continue;
            }

            let (volume_cm3, footprint_cm2, cubeness) = envelope_metrics(&total);
            let cell_positions = place_cells(grid, &pitch, &pack, honeycomb, config.parallel, inputs);

            layouts.push(PhysicalLayout {
                configuration: config.clone(),
                orientation,
                cols: grid.cols,
                rows_per_layer: grid.rows_per_layer,
                layers: grid.layers,
                cell_positions,
                honeycomb,
                cell_extents: extents,
                cell_pitch: pitch,
                pack_dimensions: pack,
                total_dimensions: total,
                volume_cm3,
                footprint_cm2,
                cubeness,
            });
        }

        debug!(
            config = %config.code,
            orientation = %orientation,
            honeycomb,
            generated = layouts.len() - before,
            rejected,
            "Generated grid layouts"
        );
    }

    Ok(layouts)
}

/// Computes the pack envelope (before wall clearance) and total envelope.
fn envelope(
    grid: &GridShape,
    pitch: &Vector3<f64>,
    honeycomb: bool,
    inputs: &PackInputs,
) -> (Vector3<f64>, Vector3<f64>) {
    let cols = grid.cols as f64;
    let rows = grid.rows_per_layer as f64;
    let layers = grid.layers as f64;

    let (pack_x, pack_y) = if honeycomb {
        (
            cols.mul_add(pitch.x, pitch.x * HEX_PACKING_ROW_OFFSET),
            rows * pitch.y * HEX_PACKING_ROW_COMPRESSION,
        )
    } else {
        (cols * pitch.x, rows * pitch.y)
    };
    let pack_z = layers.mul_add(pitch.z, inputs.nickel_strip_total());

    let pack = Vector3::new(pack_x, pack_y, pack_z);
    let clearance = 2.0 * inputs.wall_clearance;
    let total = pack.add_scalar(clearance);

    (pack, total)
}

fn exceeds(total: &Vector3<f64>, max: Option<&Vector3<f64>>) -> bool {
    max.is_some_and(|max| total.iter().zip(max.iter()).any(|(t, m)| t > m))
}

/// Places every cell, layer-major, then row, then column.
///
/// X/Y are centred on the origin. Honeycomb shifts odd rows by half a
/// pitch and uses the compressed row pitch. Z is the bottom face, starting
/// above the bottom nickel strip.
fn place_cells(
    grid: &GridShape,
    pitch: &Vector3<f64>,
    pack: &Vector3<f64>,
    honeycomb: bool,
    parallel: usize,
    inputs: &PackInputs,
) -> Vec<CellPosition> {
    let row_pitch = if honeycomb {
        pitch.y * HEX_PACKING_ROW_COMPRESSION
    } else {
        pitch.y
    };
    let origin_x = pitch.x / 2.0 - pack.x / 2.0;
    let origin_y = row_pitch / 2.0 - pack.y / 2.0;

    let mut positions = Vec::with_capacity(grid.cell_count());
    for layer in 0..grid.layers {
        let z = (layer as f64).mul_add(pitch.z, inputs.nickel_strip_bottom);
        for row in 0..grid.rows_per_layer {
            let offset = if honeycomb && row % 2 == 1 {
                pitch.x * HEX_PACKING_ROW_OFFSET
            } else {
                0.0
            };
            let y = (row as f64).mul_add(row_pitch, origin_y);
            for col in 0..grid.cols {
                let x = (col as f64).mul_add(pitch.x, origin_x + offset);
                positions.push(CellPosition::new(
                    positions.len(),
                    (col, row, layer),
                    Point3::new(x, y, z),
                    parallel,
                ));
            }
        }
    }
    positions
}
