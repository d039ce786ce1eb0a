//! Configuration types for the BGCR solver and pipeline.

use petcr_numeric::DEFAULT_EPS;
use petcr_physics::PenmanConstants;

use crate::error::BgcrError;

/// How the solver treats cells that violate the physical preconditions
/// (`P ≥ 0`, `Epa > 0`, `Erad ≥ 0`, `w > 0`, all finite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Fail on the first invalid cell.
    #[default]
    Strict,
    /// Set every output of an invalid cell to NaN and keep going.
    Mask,
    /// No checks; formulas propagate whatever they produce. `w == 0` is
    /// still rejected.
    Passthrough,
}

/// Configuration of [`bgcr_monthly_with`](crate::bgcr_monthly_with).
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Invalid-cell handling.
    policy: InputPolicy,
    /// Epsilon added to denominators in the guarded divisions.
    eps: f64,
}

impl SolverConfig {
    /// Creates a configuration with the strict policy and `eps = 1e-12`.
    pub fn new() -> Self {
        Self {
            policy: InputPolicy::Strict,
            eps: DEFAULT_EPS,
        }
    }

    /// Sets the input policy.
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the division epsilon.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Returns the input policy.
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Returns the division epsilon.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BgcrError> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(BgcrError::InvalidConfig {
                reason: format!("eps must be finite and >= 0, got {}", self.eps),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of the Budyko shape parameter `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WScheme {
    /// One `w` for every cell.
    Uniform(f64),
    /// `w = 0.214 − 0.651·SI + 7.350·SI²`.
    SeasonalityIndex,
    /// `w = 0.5931 + 7.0871·SI³ + 0.0175/ALB²`.
    SeasonalityAlbedo,
}

impl WScheme {
    /// Returns a short label for logs and output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::SeasonalityIndex => "seasonality_index",
            Self::SeasonalityAlbedo => "seasonality_albedo",
        }
    }
}

/// Configuration of the meteorology-to-evaporation pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Scheme resolving `w`.
    scheme: WScheme,
    /// Penman constants.
    penman: PenmanConstants,
    /// Solver settings.
    solver: SolverConfig,
}

impl PipelineConfig {
    /// Creates a configuration using the seasonality-albedo scheme, default
    /// Penman constants and the strict solver.
    pub fn new() -> Self {
        Self {
            scheme: WScheme::SeasonalityAlbedo,
            penman: PenmanConstants::new(),
            solver: SolverConfig::new(),
        }
    }

    /// Sets the `w` scheme.
    pub fn with_scheme(mut self, scheme: WScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the Penman constants.
    pub fn with_penman(mut self, penman: PenmanConstants) -> Self {
        self.penman = penman;
        self
    }

    /// Sets the solver configuration.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the `w` scheme.
    pub fn scheme(&self) -> WScheme {
        self.scheme
    }

    /// Returns the Penman constants.
    pub fn penman(&self) -> &PenmanConstants {
        &self.penman
    }

    /// Returns the solver configuration.
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BgcrError> {
        if let WScheme::Uniform(w) = self.scheme
            && (!w.is_finite() || w <= 0.0)
        {
            return Err(BgcrError::InvalidConfig {
                reason: format!("uniform w must be finite and > 0, got {w}"),
            });
        }
        self.penman.validate()?;
        self.solver.validate()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.policy(), InputPolicy::Strict);
        assert_eq!(c.eps(), 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn solver_rejects_negative_eps() {
        let c = SolverConfig::new().with_eps(-1.0);
        assert!(matches!(c.validate(), Err(BgcrError::InvalidConfig { .. })));
    }

    #[test]
    fn pipeline_defaults() {
        let c = PipelineConfig::default();
        assert_eq!(c.scheme(), WScheme::SeasonalityAlbedo);
        assert_eq!(c.penman().gamma(), 0.066);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn pipeline_rejects_non_positive_uniform_w() {
        let c = PipelineConfig::new().with_scheme(WScheme::Uniform(0.0));
        assert!(matches!(c.validate(), Err(BgcrError::InvalidConfig { .. })));
    }

    #[test]
    fn pipeline_surfaces_penman_errors() {
        let c = PipelineConfig::new().with_penman(PenmanConstants::new().with_gamma(-1.0));
        assert!(matches!(c.validate(), Err(BgcrError::Physics(_))));
    }

    #[test]
    fn scheme_labels() {
        assert_eq!(WScheme::Uniform(1.6).label(), "uniform");
        assert_eq!(WScheme::SeasonalityIndex.label(), "seasonality_index");
    }
}
