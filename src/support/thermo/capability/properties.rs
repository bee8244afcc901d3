use uom::si::f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, Velocity};

use crate::support::thermo::{PropertyError, State};
use crate::support::units::{
    KinematicViscosity, SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy,
};

use super::ThermoModel;

pub trait HasDensity: ThermoModel {
    /// Returns the mass density for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, state: &State<Self::Fluid>) -> Result<MassDensity, PropertyError>;
}

pub trait HasInternalEnergy: ThermoModel {
    /// Returns the specific internal energy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the internal energy cannot be calculated.
    fn internal_energy(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<SpecificInternalEnergy, PropertyError>;
}

pub trait HasEnthalpy: ThermoModel {
    /// Returns the specific enthalpy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError>;
}

pub trait HasEntropy: ThermoModel {
    /// Returns the specific entropy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the entropy cannot be calculated.
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError>;
}

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasCv: ThermoModel {
    /// Returns the specific heat capacity at constant volume for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cv` cannot be calculated.
    fn cv(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasSpeedOfSound: ThermoModel {
    /// Returns the speed of sound for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the speed of sound cannot be calculated.
    fn speed_of_sound(&self, state: &State<Self::Fluid>) -> Result<Velocity, PropertyError>;
}

pub trait HasDynamicViscosity: ThermoModel {
    /// Returns the dynamic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn dynamic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<DynamicViscosity, PropertyError>;
}

pub trait HasKinematicViscosity: ThermoModel {
    /// Returns the kinematic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn kinematic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<KinematicViscosity, PropertyError>;
}
