//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model decides which fluids it
//! understands through its [`ThermoModel`](super::capability::ThermoModel)
//! `Fluid` type.

mod water;

pub use water::Water;
