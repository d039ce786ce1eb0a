//! Evaporation physics for the petcr models.
//!
//! # Contents
//!
//! - **Vapour relations**: Tetens saturation vapour pressure, its slope,
//!   the psychrometric constant and the vapour pressure deficit.
//! - **Penman partition**: [`penman_components`] splits apparent potential
//!   evaporation into a radiation term `Erad` and an aerodynamic term
//!   `Eaero`; both are broadcasting field operations.
//! - **Reference formulas**: Penman potential evaporation and
//!   Priestley-Taylor.
//! - **CR models**: sigmoid, polynomial, rescaled power, Bouchet and the
//!   asymmetric form with a lower bound.
//! - **Land-atmosphere PET**: wet-surface Bowen ratio split of surface
//!   energy fluxes ([`land`]).
//!
//! # Glossary
//!
//! - **Epa**: apparent potential evaporation, `Erad + Eaero`
//! - **Qne**: available energy expressed as an evaporation depth, `(Rn − G)/Le`
//! - **CR**: complementary relationship between actual and potential evaporation
//! - **βw**: wet-surface Bowen ratio
//!
//! # Quick Start
//!
//! ```
//! use petcr_physics::{PenmanConstants, penman_components};
//! use petcr_numeric::{field_from_vec, scalar};
//!
//! let rn = field_from_vec(&[2], vec![1.2e7, 1.5e7]).unwrap();
//! let parts = penman_components(
//!     &rn,
//!     &scalar(0.0),
//!     &scalar(18.0),
//!     &scalar(2.0),
//!     &scalar(1.2),
//!     &scalar(2.1),
//!     &PenmanConstants::new(),
//! )
//! .unwrap();
//! assert_eq!(parts.epa().shape(), &[2]);
//! ```

pub mod constants;
mod cr;
mod error;
pub mod land;
mod penman;
mod vapor;

pub use cr::{aa_cr, bouchet_cr, polynomial_cr, rescaled_power_cr, sigmoid_cr};
pub use error::PhysicsError;
pub use land::{LandPet, OceanPet, SurfaceFluxes, pet_land, pet_ocean, wet_bowen_ratio};
pub use penman::{
    PenmanComponents, PenmanConstants, apparent_potential_evaporation, penman_components,
    penman_potential_et, priestley_taylor_et, priestley_taylor_et_default, wind_function,
};
pub use vapor::{
    psychrometric_constant, saturation_vapor_pressure, saturation_vapor_pressure_kpa, slope_svp,
    slope_svp_kpa, vapor_pressure_deficit,
};
