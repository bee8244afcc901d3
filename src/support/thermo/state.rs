use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

/// The thermodynamic state of a fluid.
///
/// Temperature and pressure fix a single-phase state. Near the saturation
/// line they do not tell which side a state belongs to once rounding enters,
/// so a state may also record its [`Phase`]. On the saturation line `T` and
/// `p` are no longer independent, and the phase carries the vapor quality.
///
/// A state without a phase is resolved from temperature and pressure alone.
///
/// The `Fluid` type parameter names the substance. It is usually a marker
/// type such as [`Water`](crate::support::thermo::fluid::Water).
///
/// # Example
///
/// ```
/// use twine_steam::support::thermo::{Phase, State, fluid::Water};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     Pressure::new::<megapascal>(3.0),
///     Water,
/// )
/// .with_phase(Phase::Liquid);
/// assert!(!state.is_two_phase());
/// assert_eq!(state.quality_ratio(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub phase: Option<Phase>,
    pub fluid: Fluid,
}

/// The side of the saturation line a state lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Liquid,
    Vapor,
    /// Wet steam, or any saturated mixture, with its vapor quality.
    TwoPhase { quality: Ratio },
}

impl<Fluid> State<Fluid> {
    /// Creates a state with no recorded phase.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, fluid: Fluid) -> Self {
        Self {
            temperature,
            pressure,
            phase: None,
            fluid,
        }
    }

    /// Returns a new state with the given phase, keeping other fields unchanged.
    #[must_use]
    pub fn with_phase(self, phase: Phase) -> Self {
        Self {
            phase: Some(phase),
            ..self
        }
    }

    /// Returns a new two-phase state with the given vapor quality.
    #[must_use]
    pub fn with_quality(self, quality: Ratio) -> Self {
        self.with_phase(Phase::TwoPhase { quality })
    }

    /// Returns `true` for states between saturated liquid and saturated vapor.
    #[must_use]
    pub fn is_two_phase(&self) -> bool {
        matches!(self.phase, Some(Phase::TwoPhase { .. }))
    }

    /// Returns the vapor quality as a plain number, if the state is wet.
    #[must_use]
    pub fn quality_ratio(&self) -> Option<f64> {
        match self.phase {
            Some(Phase::TwoPhase { quality }) => Some(quality.get::<ratio>()),
            _ => None,
        }
    }
}
