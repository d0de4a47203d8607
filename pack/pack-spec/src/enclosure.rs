//! Enclosure envelope around a layout.
//!
//! Only the dimensions and feature positions are computed here; turning
//! them into a printable mesh is left to the export collaborators.

use nalgebra::{Point2, Point3, Vector3};
use pack_types::{PackError, PackResult, PhysicalLayout};
use tracing::debug;

/// Parameters for the open-top enclosure box.
///
/// All values in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureParams {
    /// Wall and floor thickness.
    pub wall_thickness: f64,
    /// Distance of each mounting hole centre from the two nearest outer
    /// faces.
    pub mount_hole_inset: f64,
    /// Mounting hole diameter.
    pub mount_hole_diameter: f64,
    /// Diameter of the wire exit in the `+Y` wall.
    pub wire_exit_diameter: f64,
}

impl Default for EnclosureParams {
    fn default() -> Self {
        Self {
            wall_thickness: 2.0,
            mount_hole_inset: 5.0,
            mount_hole_diameter: 3.0,
            wire_exit_diameter: 10.0,
        }
    }
}

impl EnclosureParams {
    /// Sets the wall thickness.
    #[must_use]
    pub const fn with_wall_thickness(mut self, thickness: f64) -> Self {
        self.wall_thickness = thickness;
        self
    }

    /// Sets the mounting hole inset and diameter.
    #[must_use]
    pub const fn with_mount_holes(mut self, inset: f64, diameter: f64) -> Self {
        self.mount_hole_inset = inset;
        self.mount_hole_diameter = diameter;
        self
    }

    /// Sets the wire exit diameter.
    #[must_use]
    pub const fn with_wire_exit(mut self, diameter: f64) -> Self {
        self.wire_exit_diameter = diameter;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidSpacing`] for a negative or non-finite
    /// value, or a zero wall thickness.
    pub fn validate(&self) -> PackResult<()> {
        let values = [
            ("wall_thickness", self.wall_thickness),
            ("mount_hole_inset", self.mount_hole_inset),
            ("mount_hole_diameter", self.mount_hole_diameter),
            ("wire_exit_diameter", self.wire_exit_diameter),
        ];
        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(PackError::InvalidSpacing { field, value });
            }
        }
        if self.wall_thickness <= 0.0 {
            return Err(PackError::InvalidSpacing {
                field: "wall_thickness",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Dimensions and features of an enclosure.
///
/// X/Y are centred on the pack; Z starts at the underside of the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct EnclosureSpec {
    /// Cavity size: the layout's total (clearance-inclusive) envelope.
    pub inner_dimensions: Vector3<f64>,
    /// Outside size: walls on X/Y, floor only on Z.
    pub outer_dimensions: Vector3<f64>,
    /// Wall and floor thickness.
    pub wall_thickness: f64,
    /// Mounting hole centres in the floor plane, one per corner.
    pub mount_holes: [Point2<f64>; 4],
    /// Mounting hole diameter.
    pub mount_hole_diameter: f64,
    /// Wire exit centre on the outer `+Y` face.
    pub wire_exit: Point3<f64>,
    /// Wire exit diameter.
    pub wire_exit_diameter: f64,
}

impl EnclosureSpec {
    /// Cavity volume in cm³.
    #[must_use]
    pub fn inner_volume_cm3(&self) -> f64 {
        self.inner_dimensions.product() / 1000.0
    }

    /// Material volume in cm³, ignoring holes.
    #[must_use]
    pub fn shell_volume_cm3(&self) -> f64 {
        self.outer_dimensions.product() / 1000.0 - self.inner_volume_cm3()
    }
}

/// Computes the open-top enclosure around `layout`.
///
/// # Errors
///
/// Returns [`PackError::InvalidSpacing`] if `params` fail validation.
///
/// # Example
///
/// ```
/// use pack_layout::design_pack_for;
/// use pack_spec::{enclosure_for, EnclosureParams};
/// use pack_types::PackInputs;
///
/// let (_, design) = design_pack_for(&PackInputs::new("18650", 4)).unwrap();
/// let layout = design.best().unwrap();
///
/// let enclosure = enclosure_for(layout, &EnclosureParams::default()).unwrap();
/// assert!(enclosure.outer_dimensions.x > layout.total_dimensions.x);
/// ```
pub fn enclosure_for(layout: &PhysicalLayout, params: &EnclosureParams) -> PackResult<EnclosureSpec> {
    params.validate()?;

    let w = params.wall_thickness;
    let inner = layout.total_dimensions;
    let outer = Vector3::new(inner.x + 2.0 * w, inner.y + 2.0 * w, inner.z + w);

    let hx = outer.x / 2.0 - params.mount_hole_inset;
    let hy = outer.y / 2.0 - params.mount_hole_inset;
    let mount_holes = [
        Point2::new(-hx, -hy),
        Point2::new(hx, -hy),
        Point2::new(hx, hy),
        Point2::new(-hx, hy),
    ];
    let wire_exit = Point3::new(0.0, outer.y / 2.0, outer.z / 2.0);

    debug!(
        code = %layout.configuration.code,
        outer_x = outer.x,
        outer_y = outer.y,
        outer_z = outer.z,
        "Computed enclosure"
    );

    Ok(EnclosureSpec {
        inner_dimensions: inner,
        outer_dimensions: outer,
        wall_thickness: w,
        mount_holes,
        mount_hole_diameter: params.mount_hole_diameter,
        wire_exit,
        wire_exit_diameter: params.wire_exit_diameter,
    })
}
