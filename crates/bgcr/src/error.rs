//! Error types for the petcr-bgcr crate.

use petcr_numeric::NumericError;
use petcr_physics::PhysicsError;

/// Error type for all fallible operations in the petcr-bgcr crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BgcrError {
    /// Returned when a record has no years.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when monthly precipitation is not laid out as `(years, 12, ...)`.
    #[error("month axis must be length 12 (years, 12, ...), got shape {shape:?}")]
    InvalidMonthAxis {
        /// Shape of the offending input.
        shape: Vec<usize>,
    },

    /// Returned by the strict input policy for the first invalid cell.
    #[error("invalid {field} at {index:?}: {value} ({reason})")]
    InvalidInput {
        /// Name of the offending input (`precipitation`, `epa`, `erad` or `w`).
        field: String,
        /// Index of the cell in the broadcast shape.
        index: Vec<usize>,
        /// Offending value.
        value: f64,
        /// Description of the violated precondition.
        reason: String,
    },

    /// Returned when the Budyko shape parameter is exactly zero.
    #[error("budyko shape parameter w is zero at {index:?}")]
    ZeroShapeParameter {
        /// Index of the cell in the broadcast shape.
        index: Vec<usize>,
    },

    /// Returned when the seasonality-albedo scheme is selected without albedo.
    #[error("albedo is required by the seasonality-albedo w scheme")]
    MissingAlbedo,

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped broadcasting error from petcr-numeric.
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Wrapped error from petcr-physics.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
