use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` states at compile time which input combinations a
/// model accepts. Unsupported inputs simply have no impl, so there are no
/// runtime "not implemented" errors.
///
/// Inputs are plain Rust tuples that lead with the fluid, for example:
/// - `(Fluid, ThermodynamicTemperature, Pressure)`
/// - `(Fluid, Pressure, SpecificEnthalpy)`
/// - `(Fluid, Pressure, SpecificEntropy)`
/// - `(Fluid, Pressure, Ratio)` where the ratio is the vapor quality
///
/// When `Fluid: Default` the fluid can be left out; see the blanket impl
/// for `(A, B)` below.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Default-fluid convenience impl.
///
/// A model that builds states from `(Fluid, A, B)` also builds them from
/// `(A, B)`, filling in `Fluid::default()`.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
