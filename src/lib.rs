//! # Twine Steam
//!
//! Water and steam properties from the IAPWS-IF97 industrial formulation,
//! with IAPWS 2008 viscosity, packaged for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for property and viscosity
//!   evaluation.
//! - [`support`]: The property code itself, plus the typed state, capability
//!   traits and unit helpers it is built on.
//!
//! Most callers either run a model from [`models::steam`] or use
//! [`If97`](support::thermo::model::If97) directly, through its SI `f64`
//! methods or through the capability traits in
//! [`support::thermo::capability`].
//!
//! ## Logging
//!
//! Region selection is reported through the [`log`] facade at `debug` level,
//! and saturation bound evaluation at `trace` level. No logger is installed
//! by this crate.
//!
//! Modules in [`support`] are public because they are useful on their own,
//! but their APIs are not stable.

pub mod models;
pub mod support;
