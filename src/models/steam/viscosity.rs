use twine_core::Model;
use uom::si::{
    dynamic_viscosity::pascal_second,
    diffusion_coefficient::square_meter_per_second,
    f64::{DynamicViscosity, Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::steam::SteamOutput,
    support::{
        thermo::model::if97::{If97Error, Viscosity},
        units::KinematicViscosity,
    },
};

/// Viscosities and the state they were evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViscosityOutput {
    pub dynamic: DynamicViscosity,
    pub kinematic: KinematicViscosity,
    pub properties: SteamOutput,
}

/// IAPWS 2008 viscosity of water and steam as a Twine model.
///
/// The input is `(temperature, pressure)`; the state must lie in IF97
/// Region 1 or 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteamViscosity {
    viscosity: Viscosity,
}

impl SteamViscosity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for SteamViscosity {
    type Input = (ThermodynamicTemperature, Pressure);
    type Output = ViscosityOutput;
    type Error = If97Error;

    fn call(&self, (temperature, pressure): &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = self
            .viscosity
            .evaluate_tp(temperature.get::<kelvin>(), pressure.get::<pascal>())?;
        Ok(ViscosityOutput {
            dynamic: DynamicViscosity::new::<pascal_second>(result.dynamic),
            kinematic: KinematicViscosity::new::<square_meter_per_second>(result.kinematic),
            properties: result.props.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::{bar, megapascal},
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::model::if97::Region;

    #[test]
    fn liquid_water_at_room_temperature() {
        let output = SteamViscosity::new()
            .call(&(
                ThermodynamicTemperature::new::<degree_celsius>(25.0),
                Pressure::new::<bar>(1.0),
            ))
            .unwrap();

        assert_eq!(output.properties.region, Region::Liquid);
        assert_relative_eq!(
            output.dynamic.get::<pascal_second>(),
            890.0e-6,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            output.kinematic.get::<square_meter_per_second>(),
            output.dynamic.get::<pascal_second>() / output.properties.density.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn region_gap_is_an_error() {
        let result = SteamViscosity::new().call(&(
            ThermodynamicTemperature::new::<kelvin>(650.0),
            Pressure::new::<megapascal>(25.0),
        ));
        assert!(matches!(result, Err(If97Error::OutOfRange { .. })));
    }
}
