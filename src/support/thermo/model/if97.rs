//! IAPWS-IF97 properties of water and steam.
//!
//! The industrial formulation splits the `(T, p)` plane into regions, each
//! with its own correlation. This model covers:
//!
//! - Region 1, compressed liquid ([`Region1`])
//! - Region 2, superheated vapor and supercritical steam ([`Region2`])
//! - Region 4, wet steam on the saturation line ([`Region4`])
//!
//! Region 3 (near critical) and Region 5 (high-temperature steam) are not
//! implemented; inputs falling there are rejected with
//! [`If97Error::OutOfRange`].
//!
//! Two interfaces are provided over the same equations:
//!
//! - [`If97`] methods taking and returning plain SI `f64` values, with
//!   results collected in [`Props`]
//! - the capability traits from [`capability`](crate::support::thermo::capability),
//!   which work with `uom` quantities and [`State<Water>`]
//!
//! Dynamic and kinematic viscosity follow the IAPWS 2008 release, see
//! [`Viscosity`].
//!
//! # Example
//!
//! ```
//! use twine_steam::support::thermo::{
//!     capability::{HasEnthalpy, StateFrom},
//!     model::If97,
//! };
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let steam = If97::new();
//! let state = steam
//!     .state_from((
//!         ThermodynamicTemperature::new::<kelvin>(300.0),
//!         Pressure::new::<megapascal>(3.0),
//!     ))
//!     .unwrap();
//!
//! let h = steam.enthalpy(&state).unwrap();
//! assert!((h.get::<kilojoule_per_kilogram>() - 115.331).abs() < 1e-3);
//! ```

mod boundary23;
mod diagram;
mod error;
mod props;
mod region;
mod region1;
mod region2;
mod region4;
mod saturation;
mod viscosity;

use uom::si::{
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    diffusion_coefficient::square_meter_per_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermodynamicTemperature, Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::thermo::{
    Phase, PropertyError, State,
    capability::{
        HasCp, HasCv, HasDensity, HasDynamicViscosity, HasEnthalpy, HasEntropy,
        HasInternalEnergy, HasKinematicViscosity, HasSpeedOfSound, StateFrom, ThermoModel,
    },
    fluid::Water,
};
use crate::support::units::{
    KinematicViscosity, SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy,
};

pub use boundary23::Boundary23;
pub use diagram::If97;
pub use error::{Given, If97Error, Parameter};
pub use props::{Property, Props, Region};
pub use region::{Gibbs, R, SinglePhase};
pub use region1::Region1;
pub use region2::Region2;
pub use region4::{Quality, Region4, Saturation};
pub use saturation::{P_SPLIT, SaturationCurve, T_SPLIT};
pub use viscosity::{Viscosity, ViscosityProps};

/// Largest relative offset from `T_sat(p)` accepted for a wet state temperature.
const SATURATION_TOLERANCE: f64 = 1e-6;

impl ThermoModel for If97 {
    type Fluid = Water;
}

impl If97 {
    /// Evaluates the property record behind a typed state.
    ///
    /// A state with a recorded phase is evaluated in that phase: wet states
    /// from pressure and quality, liquid and vapor states with the Region 1
    /// or Region 2 equations at `(T, p)`. A state without a phase goes through
    /// the usual `(T, p)` dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the state lies outside the
    /// supported regions, or [`PropertyError::InvalidState`] if its
    /// temperature contradicts its recorded phase.
    pub fn props_of(&self, state: &State<Water>) -> Result<Props, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let p = state.pressure.get::<pascal>();
        match state.phase {
            None => Ok(self.props_tp(t, p)?),
            Some(Phase::Liquid) => props_within(&Region1, t, p),
            Some(Phase::Vapor) => props_within(&Region2, t, p),
            Some(Phase::TwoPhase { quality }) => self.wet_props(t, p, quality.get::<ratio>()),
        }
    }

    /// Builds the typed state matching a property record.
    ///
    /// The state records the phase of `props`. Backward equations can put a
    /// single-phase temperature a few millikelvin past the saturation line,
    /// so the temperature is pulled back onto its own region's side.
    #[must_use]
    pub fn state_of(&self, props: &Props) -> State<Water> {
        let (t, phase) = match (props.region, props.x) {
            (_, Some(x)) => (
                props.t,
                Phase::TwoPhase {
                    quality: Ratio::new::<ratio>(x),
                },
            ),
            (Region::Liquid, None) => (pull_inside(&Region1, props), Phase::Liquid),
            (_, None) => (pull_inside(&Region2, props), Phase::Vapor),
        };
        State::new(
            ThermodynamicTemperature::new::<kelvin>(t),
            Pressure::new::<pascal>(props.p),
            Water,
        )
        .with_phase(phase)
    }

    fn wet_props(&self, t: f64, p: f64, x: f64) -> Result<Props, PropertyError> {
        let props = self.props_px(p, x)?;
        if (props.t - t).abs() > SATURATION_TOLERANCE * props.t {
            return Err(PropertyError::InvalidState {
                context: format!(
                    "T = {t} K with quality {x} is off the saturation line at p = {p} Pa \
                     (T_sat = {} K)",
                    props.t
                ),
            });
        }
        Ok(props)
    }

    /// Like [`props_of`](Self::props_of), but rejects wet states.
    fn single_phase_props(
        &self,
        state: &State<Water>,
        property: &str,
    ) -> Result<Props, PropertyError> {
        let props = self.props_of(state)?;
        if props.region == Region::TwoPhase {
            return Err(PropertyError::Undefined {
                context: format!("{property} of wet steam at p = {} Pa", props.p),
            });
        }
        Ok(props)
    }

    /// Dynamic viscosity behind a single-phase property record.
    fn dynamic_viscosity_of(props: &Props) -> Result<f64, If97Error> {
        Viscosity::new().dynamic(props.t, props.density())
    }
}

/// Evaluates `region` at `(t, p)` if the point lies within its edges.
fn props_within<R: SinglePhase>(region: &R, t: f64, p: f64) -> Result<Props, PropertyError> {
    let (lower, upper) = region.t_edges(p);
    if region.p_in(p) && (lower..=upper).contains(&t) {
        return Ok(region.props_tp(t, p));
    }
    Err(PropertyError::InvalidState {
        context: format!("T = {t} K at p = {p} Pa is outside {}", R::REGION),
    })
}

/// Clamps the temperature of `props` into the edges of `region`.
fn pull_inside<R: SinglePhase>(region: &R, props: &Props) -> f64 {
    let (lower, upper) = region.t_edges(props.p);
    props.t.max(lower).min(upper)
}

impl HasDensity for If97 {
    fn density(&self, state: &State<Water>) -> Result<MassDensity, PropertyError> {
        let props = self.props_of(state)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(
            props.density(),
        ))
    }
}

impl HasInternalEnergy for If97 {
    fn internal_energy(
        &self,
        state: &State<Water>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let props = self.props_of(state)?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(props.u))
    }
}

impl HasEnthalpy for If97 {
    fn enthalpy(&self, state: &State<Water>) -> Result<SpecificEnthalpy, PropertyError> {
        let props = self.props_of(state)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(props.h))
    }
}

impl HasEntropy for If97 {
    fn entropy(&self, state: &State<Water>) -> Result<SpecificEntropy, PropertyError> {
        let props = self.props_of(state)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(props.s))
    }
}

impl HasCp for If97 {
    /// Undefined for wet steam.
    fn cp(&self, state: &State<Water>) -> Result<SpecificHeatCapacity, PropertyError> {
        let props = self.single_phase_props(state, "cp")?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            props.cp,
        ))
    }
}

impl HasCv for If97 {
    /// Undefined for wet steam.
    fn cv(&self, state: &State<Water>) -> Result<SpecificHeatCapacity, PropertyError> {
        let props = self.single_phase_props(state, "cv")?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            props.cv,
        ))
    }
}

impl HasSpeedOfSound for If97 {
    /// Undefined for wet steam.
    fn speed_of_sound(&self, state: &State<Water>) -> Result<Velocity, PropertyError> {
        let props = self.single_phase_props(state, "speed of sound")?;
        Ok(Velocity::new::<meter_per_second>(props.w))
    }
}

impl HasDynamicViscosity for If97 {
    /// Undefined for wet steam.
    fn dynamic_viscosity(&self, state: &State<Water>) -> Result<DynamicViscosity, PropertyError> {
        let props = self.single_phase_props(state, "dynamic viscosity")?;
        let mu = Self::dynamic_viscosity_of(&props)?;
        Ok(DynamicViscosity::new::<pascal_second>(mu))
    }
}

impl HasKinematicViscosity for If97 {
    /// Undefined for wet steam.
    fn kinematic_viscosity(
        &self,
        state: &State<Water>,
    ) -> Result<KinematicViscosity, PropertyError> {
        let props = self.single_phase_props(state, "kinematic viscosity")?;
        let mu = Self::dynamic_viscosity_of(&props)?;
        Ok(KinematicViscosity::new::<square_meter_per_second>(
            mu * props.v,
        ))
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Pressure)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Water, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Water>, Self::Error> {
        let props = self.props_tp(temperature.get::<kelvin>(), pressure.get::<pascal>())?;
        Ok(State {
            fluid,
            ..self.state_of(&props)
        })
    }
}

impl StateFrom<(Water, Pressure, SpecificEnthalpy)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Water, Pressure, SpecificEnthalpy),
    ) -> Result<State<Water>, Self::Error> {
        let props = self.props_ph(
            pressure.get::<pascal>(),
            enthalpy.get::<joule_per_kilogram>(),
        )?;
        Ok(State {
            fluid,
            ..self.state_of(&props)
        })
    }
}

impl StateFrom<(Water, Pressure, SpecificEntropy)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (Water, Pressure, SpecificEntropy),
    ) -> Result<State<Water>, Self::Error> {
        let props = self.props_ps(
            pressure.get::<pascal>(),
            entropy.get::<joule_per_kilogram_kelvin>(),
        )?;
        Ok(State {
            fluid,
            ..self.state_of(&props)
        })
    }
}

impl StateFrom<(Water, Pressure, Ratio)> for If97 {
    type Error = If97Error;

    /// Builds a wet state from pressure and vapor quality.
    fn state_from(
        &self,
        (fluid, pressure, quality): (Water, Pressure, Ratio),
    ) -> Result<State<Water>, Self::Error> {
        let props = self.props_px(pressure.get::<pascal>(), quality.get::<ratio>())?;
        Ok(State {
            fluid,
            ..self.state_of(&props)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        pressure::{bar, megapascal},
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    fn temperature(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn megapascals(value: f64) -> Pressure {
        Pressure::new::<megapascal>(value)
    }

    #[test]
    fn liquid_state_from_temperature_and_pressure() {
        let steam = If97::new();
        let state = steam.state_from((temperature(300.0), megapascals(3.0))).unwrap();
        assert!(!state.is_two_phase());

        assert_relative_eq!(
            steam.density(&state).unwrap().get::<kilogram_per_cubic_meter>(),
            1.0 / 0.100_215_168e-2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            steam.enthalpy(&state).unwrap().get::<kilojoule_per_kilogram>(),
            115.331_273,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            steam.internal_energy(&state).unwrap().get::<kilojoule_per_kilogram>(),
            112.324_818,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            steam.entropy(&state).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            0.392_294_792,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            steam.cp(&state).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            4.173_012_18,
            max_relative = 1e-8
        );
        assert!(steam.cv(&state).is_ok());
        assert_relative_eq!(
            steam.speed_of_sound(&state).unwrap().get::<meter_per_second>(),
            1507.739_21,
            max_relative = 1e-8
        );
    }

    #[test]
    fn enthalpy_and_entropy_inputs_recover_temperature() {
        let steam = If97::new();
        let from_h = steam
            .state_from((
                megapascals(3.0),
                SpecificEnthalpy::new::<kilojoule_per_kilogram>(3000.0),
            ))
            .unwrap();
        assert_relative_eq!(
            from_h.temperature.get::<kelvin>(),
            575.373_370,
            max_relative = 1e-8
        );
        assert_eq!(from_h.phase, Some(Phase::Vapor));

        let from_s = steam
            .state_from((
                Water,
                megapascals(80.0),
                SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.5),
            ))
            .unwrap();
        assert_relative_eq!(
            from_s.temperature.get::<kelvin>(),
            309.979_785,
            max_relative = 1e-8
        );
    }

    #[test]
    fn wet_state_from_quality() {
        let steam = If97::new();
        let state = steam
            .state_from((Pressure::new::<bar>(1.0), Ratio::new::<ratio>(0.5)))
            .unwrap();
        assert!(state.is_two_phase());
        assert_relative_eq!(
            state.temperature.get::<degree_celsius>(),
            99.606,
            epsilon = 1e-3
        );

        let bounds = steam.props_p(1e5).unwrap();
        assert_relative_eq!(
            steam.enthalpy(&state).unwrap().get::<joule_per_kilogram>(),
            0.5 * (bounds.liquid.h + bounds.vapor.h),
            max_relative = 1e-12
        );

        assert!(matches!(
            steam.cp(&state),
            Err(PropertyError::Undefined { .. })
        ));
        assert!(matches!(
            steam.dynamic_viscosity(&state),
            Err(PropertyError::Undefined { .. })
        ));
    }

    #[test]
    fn wet_state_off_the_saturation_line_is_invalid() {
        let steam = If97::new();
        let state = State::new(temperature(380.0), Pressure::new::<bar>(1.0), Water)
            .with_quality(Ratio::new::<ratio>(0.5));
        assert!(matches!(
            steam.enthalpy(&state),
            Err(PropertyError::InvalidState { .. })
        ));
    }

    #[test]
    fn recorded_phase_must_match_temperature() {
        let steam = If97::new();
        let state = State::new(temperature(300.0), megapascals(0.1), Water);

        let liquid = state.with_phase(Phase::Liquid);
        assert_eq!(
            steam.enthalpy(&liquid).unwrap(),
            steam.enthalpy(&state).unwrap()
        );

        let vapor = state.with_phase(Phase::Vapor);
        assert!(matches!(
            steam.enthalpy(&vapor),
            Err(PropertyError::InvalidState { .. })
        ));
    }

    #[test]
    fn saturated_enthalpy_inputs_keep_their_phase() {
        let steam = If97::new();
        for p in [1e4, 1e6, 1e7] {
            let bounds = steam.props_p(p).unwrap();
            let cases = [
                (bounds.liquid.h, Phase::Liquid),
                (bounds.liquid.h - 5e3, Phase::Liquid),
                (bounds.vapor.h, Phase::Vapor),
                (bounds.vapor.h + 5e3, Phase::Vapor),
            ];
            for (h, phase) in cases {
                let state = steam
                    .state_from((
                        Pressure::new::<pascal>(p),
                        SpecificEnthalpy::new::<joule_per_kilogram>(h),
                    ))
                    .unwrap();
                assert_eq!(state.phase, Some(phase), "p = {p} Pa, h = {h} J/kg");
                assert_relative_eq!(
                    steam.enthalpy(&state).unwrap().get::<joule_per_kilogram>(),
                    h,
                    epsilon = 500.0
                );
            }
        }
    }

    #[test]
    fn saturated_entropy_inputs_keep_their_phase() {
        let steam = If97::new();
        for p in [1e4, 1e6, 1e7] {
            let bounds = steam.props_p(p).unwrap();
            let cases = [
                (bounds.liquid.s, Phase::Liquid),
                (bounds.liquid.s - 20.0, Phase::Liquid),
                (bounds.vapor.s, Phase::Vapor),
                (bounds.vapor.s + 20.0, Phase::Vapor),
            ];
            for (s, phase) in cases {
                let state = steam
                    .state_from((
                        Pressure::new::<pascal>(p),
                        SpecificEntropy::new::<joule_per_kilogram_kelvin>(s),
                    ))
                    .unwrap();
                assert_eq!(state.phase, Some(phase), "p = {p} Pa, s = {s} J/(kg K)");
                assert_relative_eq!(
                    steam.entropy(&state).unwrap().get::<joule_per_kilogram_kelvin>(),
                    s,
                    epsilon = 1.0
                );
            }
        }
    }

    #[test]
    fn saturated_states_at_the_bounds_match_the_saturation_pair() {
        let steam = If97::new();
        let bounds = steam.props_p(1e6).unwrap();
        for bound in [bounds.liquid, bounds.vapor] {
            let state = steam
                .state_from((
                    Pressure::new::<pascal>(1e6),
                    SpecificEnthalpy::new::<joule_per_kilogram>(bound.h),
                ))
                .unwrap();
            let props = steam.props_of(&state).unwrap();
            assert_eq!(props.region, bound.region);
            assert_relative_eq!(props.t, bound.t, epsilon = 0.05);
        }
    }

    #[test]
    fn out_of_region_inputs() {
        let steam = If97::new();
        let error = steam
            .state_from((temperature(650.0), megapascals(25.0)))
            .unwrap_err();
        assert!(matches!(error, If97Error::OutOfRange { .. }));

        let error = steam
            .state_from((Pressure::new::<bar>(1.0), Ratio::new::<ratio>(1.5)))
            .unwrap_err();
        assert!(matches!(error, If97Error::OutOfRange { .. }));

        let outside = State::new(temperature(650.0), megapascals(25.0), Water);
        assert!(matches!(
            steam.enthalpy(&outside),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn viscosity_capabilities() {
        let steam = If97::new();
        let state = steam.state_from((temperature(300.0), megapascals(0.1))).unwrap();

        let mu = steam.dynamic_viscosity(&state).unwrap();
        let nu = steam.kinematic_viscosity(&state).unwrap();
        let expected = Viscosity::new().evaluate_tp(300.0, 1e5).unwrap();

        assert_relative_eq!(mu.get::<pascal_second>(), expected.dynamic);
        assert_relative_eq!(nu.get::<square_meter_per_second>(), expected.kinematic);
        assert_relative_eq!(mu.get::<pascal_second>(), 853.74e-6, max_relative = 1e-4);
    }
}
