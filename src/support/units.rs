//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. `uom` has no named
//! quantities for the specific (per unit mass) energies of thermodynamics or
//! for kinematic viscosity, so this module provides aliases with the right
//! dimensions:
//!
//! ```
//! use twine_steam::support::units::SpecificEnthalpy;
//! use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};
//!
//! let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(2_675.0);
//! assert_eq!(h.get::<joule_per_kilogram>(), 2_675_000.0);
//! ```

mod quantities;

pub use quantities::{
    KinematicViscosity, SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy,
};
