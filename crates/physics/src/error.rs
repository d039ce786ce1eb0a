//! Error types for the petcr-physics crate.

use petcr_numeric::NumericError;

/// Error type for all fallible operations in the petcr-physics crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PhysicsError {
    /// Wrapped broadcasting error from petcr-numeric.
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Returned when a physical constant is out of its valid domain.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let e = PhysicsError::InvalidConfig {
            reason: "latent_heat must be finite and > 0, got 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: latent_heat must be finite and > 0, got 0"
        );
    }

    #[test]
    fn numeric_error_is_transparent() {
        let e: PhysicsError = NumericError::ShapeMismatch {
            left: vec![3],
            right: vec![4],
        }
        .into();
        assert_eq!(e.to_string(), "shapes [3] and [4] cannot be broadcast together");
    }
}
