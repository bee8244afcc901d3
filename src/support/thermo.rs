//! Thermodynamic and fluid property modeling for the Twine framework.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::{Phase, State};
