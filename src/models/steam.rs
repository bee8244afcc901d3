//! Water and steam models.
//!
//! - [`SteamProperties`]: full thermodynamic state from any supported input pair
//! - [`SteamViscosity`]: dynamic and kinematic viscosity from temperature and pressure

mod properties;
mod viscosity;

pub use properties::{SteamInput, SteamOutput, SteamProperties};
pub use viscosity::{SteamViscosity, ViscosityOutput};
