//! Error types for the petcr-numeric crate.

/// Error type for all fallible operations in the petcr-numeric crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// Returned when two shapes cannot be broadcast against each other.
    #[error("shapes {left:?} and {right:?} cannot be broadcast together")]
    ShapeMismatch {
        /// Shape of the left operand (or the accumulated shape so far).
        left: Vec<usize>,
        /// Shape of the right operand.
        right: Vec<usize>,
    },

    /// Returned when a flat buffer does not fill the requested shape.
    #[error("cannot build field of shape {shape:?} from {len} values")]
    InvalidShape {
        /// Requested shape.
        shape: Vec<usize>,
        /// Number of values supplied.
        len: usize,
    },
}
