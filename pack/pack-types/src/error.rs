//! Error types for battery pack layout operations.
//!
//! Infeasible layout candidates (a grid that exceeds the custom envelope,
//! a non-integer row split) are never errors: they are dropped from the
//! result set. [`PackError`] is reserved for malformed input that would
//! otherwise propagate `NaN` or nonsense through the arithmetic.

use thiserror::Error;

/// Errors that can occur while configuring or laying out a battery pack.
///
/// # Example
///
/// ```
/// use pack_types::PackError;
///
/// let error = PackError::InvalidCellCount(0);
/// assert!(error.to_string().contains("cell count"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PackError {
    /// The requested number of cells is zero.
    #[error("cell count must be at least 1, got {0}")]
    InvalidCellCount(usize),

    /// A spacing value (gap, clearance, strip allowance) is negative or not finite.
    #[error("{field} must be a finite, non-negative length in mm, got {value}")]
    InvalidSpacing {
        /// Name of the offending input field.
        field: &'static str,
        /// The provided value.
        value: f64,
    },

    /// The target voltage is negative or not finite.
    #[error("target voltage must be finite and non-negative, got {0}")]
    InvalidTargetVoltage(f64),

    /// The custom maximum envelope has a non-positive or non-finite axis.
    #[error("custom max dimensions must be finite and positive, got ({x}, {y}, {z})")]
    InvalidMaxDimensions {
        /// Maximum X extent in mm.
        x: f64,
        /// Maximum Y extent in mm.
        y: f64,
        /// Maximum Z extent in mm.
        z: f64,
    },

    /// The cell type key is not in the catalog.
    #[error("unknown cell type '{0}'")]
    UnknownCellType(String),

    /// A cell specification has inconsistent physical or electrical data.
    #[error("invalid cell specification: {0}")]
    InvalidCellSpec(String),

    /// An orientation was applied to a cell of the wrong shape.
    #[error("orientation '{orientation}' does not apply to {shape} cells")]
    OrientationMismatch {
        /// The orientation that was requested.
        orientation: &'static str,
        /// The model type of the cell.
        shape: &'static str,
    },

    /// An electrical configuration is empty or its cell count does not match
    /// its series/parallel split.
    #[error("invalid configuration {series}S{parallel}P with {cells_used} cells used")]
    InvalidConfiguration {
        /// Series groups.
        series: usize,
        /// Cells per group.
        parallel: usize,
        /// Claimed number of used cells.
        cells_used: usize,
    },

    /// A pack record could not be serialized or parsed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl PackError {
    /// Creates an invalid cell specification error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use pack_types::PackError;
    ///
    /// let error = PackError::invalid_cell_spec("diameter must be positive");
    /// assert!(error.to_string().contains("diameter"));
    /// ```
    #[must_use]
    pub fn invalid_cell_spec(message: impl Into<String>) -> Self {
        Self::InvalidCellSpec(message.into())
    }

    /// Returns `true` if the error was caused by user-supplied pack inputs.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCellCount(_)
                | Self::InvalidSpacing { .. }
                | Self::InvalidTargetVoltage(_)
                | Self::InvalidMaxDimensions { .. }
                | Self::UnknownCellType(_)
                | Self::InvalidConfiguration { .. }
        )
    }
}

/// Result type for pack operations.
pub type PackResult<T> = std::result::Result<T, PackError>;
