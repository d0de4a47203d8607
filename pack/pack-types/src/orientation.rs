//! How a cell sits inside the pack grid.

use std::fmt;

use nalgebra::Vector3;

use crate::cell::{CellShape, CellSpec};
use crate::error::{PackError, PackResult};
use crate::inputs::CellOrientation;

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Pack width.
    X,
    /// Pack depth.
    Y,
    /// Pack height.
    Z,
}

impl Axis {
    /// Index into a `Vector3` (`0`, `1`, `2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the axis.
    #[must_use]
    pub fn unit(self) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// Concrete placement of a cell in the grid.
///
/// The first three variants apply to cylindrical cells, the last three to
/// box cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Cylinder upright: diameter in X and Y, length in Z.
    Standing,
    /// Cylinder lying with its length along X.
    LayingX,
    /// Cylinder lying with its length along Y.
    LayingY,
    /// Box lying on its largest face: width X, length Y, thickness Z.
    Flat,
    /// Box on its long edge: width X, thickness Y, length Z.
    EdgeY,
    /// Box on its short edge: thickness X, length Y, width Z.
    EdgeX,
}

impl Orientation {
    /// Orientations for cylindrical cells.
    pub const CYLINDER: [Self; 3] = [Self::Standing, Self::LayingX, Self::LayingY];

    /// Orientations for box cells.
    pub const BOX: [Self; 3] = [Self::Flat, Self::EdgeY, Self::EdgeX];

    /// Returns the wire name (`"standing"`, `"laying_x"`, ...).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::LayingX => "laying_x",
            Self::LayingY => "laying_y",
            Self::Flat => "flat",
            Self::EdgeY => "edge_y",
            Self::EdgeX => "edge_x",
        }
    }

    /// Returns true if the orientation applies to cylindrical cells.
    #[must_use]
    pub const fn is_cylinder(&self) -> bool {
        matches!(self, Self::Standing | Self::LayingX | Self::LayingY)
    }

    /// Returns true if the cell stands upright in this orientation.
    #[must_use]
    pub const fn is_upright(&self) -> bool {
        matches!(self, Self::Standing | Self::EdgeY | Self::EdgeX)
    }

    /// Returns true if honeycomb packing is supported.
    ///
    /// Only upright cylinders pack hexagonally; every other orientation is
    /// laid out on a rectangular grid.
    #[must_use]
    pub const fn supports_honeycomb(&self) -> bool {
        matches!(self, Self::Standing)
    }

    /// Axis carrying the cell terminals (cylinder) or tab direction (box).
    #[must_use]
    pub const fn terminal_axis(&self) -> Axis {
        match self {
            Self::Standing | Self::EdgeY => Axis::Z,
            Self::LayingX => Axis::X,
            Self::LayingY | Self::Flat | Self::EdgeX => Axis::Y,
        }
    }

    /// Orientations to try for `cell` under the user's orientation switch.
    ///
    /// Cylinders: standing yields [`Standing`](Self::Standing), laying yields
    /// both lying variants. Box cells: standing yields the two upright edge
    /// orientations, laying yields [`Flat`](Self::Flat). Mixed yields all
    /// three for either shape.
    ///
    /// # Example
    ///
    /// ```
    /// use pack_types::{catalog, CellOrientation, Orientation};
    ///
    /// let pouch = catalog::lookup("POUCH_MEDIUM").unwrap();
    /// assert_eq!(
    ///     Orientation::candidates(&pouch, CellOrientation::Laying),
    ///     vec![Orientation::Flat]
    /// );
    /// ```
    #[must_use]
    pub fn candidates(cell: &CellSpec, switch: CellOrientation) -> Vec<Self> {
        let all = if cell.shape.is_cylinder() {
            Self::CYLINDER
        } else {
            Self::BOX
        };
        all.into_iter()
            .filter(|o| {
                if o.is_upright() {
                    switch.allows_standing()
                } else {
                    switch.allows_laying()
                }
            })
            .collect()
    }

    /// Bare cell extents `(x, y, z)` in mm for this orientation.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::OrientationMismatch`] if the orientation does not
    /// apply to the cell's shape.
    pub fn cell_extents(&self, cell: &CellSpec) -> PackResult<Vector3<f64>> {
        let extents = match (cell.shape, self) {
            (CellShape::Cylinder { diameter, length }, Self::Standing) => {
                Vector3::new(diameter, diameter, length)
            }
            (CellShape::Cylinder { diameter, length }, Self::LayingX) => {
                Vector3::new(length, diameter, diameter)
            }
            (CellShape::Cylinder { diameter, length }, Self::LayingY) => {
                Vector3::new(diameter, length, diameter)
            }
            (
                CellShape::Box {
                    width,
                    length,
                    thickness,
                },
                Self::Flat,
            ) => Vector3::new(width, length, thickness),
            (
                CellShape::Box {
                    width,
                    length,
                    thickness,
                },
                Self::EdgeY,
            ) => Vector3::new(width, thickness, length),
            (
                CellShape::Box {
                    width,
                    length,
                    thickness,
                },
                Self::EdgeX,
            ) => Vector3::new(thickness, length, width),
            (shape, orientation) => {
                return Err(PackError::OrientationMismatch {
                    orientation: orientation.name(),
                    shape: shape.model_type(),
                });
            }
        };
        Ok(extents)
    }

    /// Grid pitch for this orientation: extents plus `gap` on X and Y.
    ///
    /// The Z pitch is the bare extent; vertical spacing comes from the
    /// nickel strip allowances instead.
    ///
    /// # Errors
    ///
    /// Same as [`cell_extents`](Self::cell_extents).
    pub fn cell_pitch(&self, cell: &CellSpec, gap: f64) -> PackResult<Vector3<f64>> {
        let extents = self.cell_extents(cell)?;
        Ok(Vector3::new(extents.x + gap, extents.y + gap, extents.z))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
