use std::fmt;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// A scalar input checked against a closed validity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Absolute temperature, K.
    Temperature,
    /// Absolute pressure, Pa.
    Pressure,
    /// Vapor quality, dimensionless.
    Quality,
}

impl Parameter {
    /// Returns the conventional symbol, e.g. `T`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Temperature => "T",
            Self::Pressure => "p",
            Self::Quality => "x",
        }
    }

    /// Returns the SI unit suffix (with a leading space), or an empty string.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => " K",
            Self::Pressure => " Pa",
            Self::Quality => "",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The input pair handed to the region dispatcher.
///
/// All values are SI: `t` in K (or °C for [`Given::CelsiusPressure`]),
/// `p` in Pa, `h` in J/kg, `s` in J/(kg·K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    TemperaturePressure { t: f64, p: f64 },
    CelsiusPressure { t: f64, p: f64 },
    PressureEnthalpy { p: f64, h: f64 },
    PressureEntropy { p: f64, s: f64 },
    PressureQuality { p: f64, x: f64 },
}

impl fmt::Display for Given {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TemperaturePressure { t, p } => write!(f, "T={t} K, p={p} Pa"),
            Self::CelsiusPressure { t, p } => write!(f, "t={t} °C, p={p} Pa"),
            Self::PressureEnthalpy { p, h } => write!(f, "p={p} Pa, h={h} J/kg"),
            Self::PressureEntropy { p, s } => write!(f, "p={p} Pa, s={s} J/(kg·K)"),
            Self::PressureQuality { p, x } => write!(f, "p={p} Pa, x={x}"),
        }
    }
}

/// Errors raised by the IF97 correlations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum If97Error {
    /// A single parameter lies outside its closed validity interval.
    #[error(
        "{parameter} = {value}{} is outside [{min}{}; {max}{}]",
        .parameter.unit(),
        .parameter.unit(),
        .parameter.unit()
    )]
    Range {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The viscosity correlation is not valid this close to the critical point.
    #[error(
        "T = {temperature} K, ρ = {density} kg/m³ lies in the excluded near-critical \
         region 645.91 K < T < 650.77 K, 245.8 kg/m³ < ρ < 405.3 kg/m³"
    )]
    CriticalRegion { temperature: f64, density: f64 },

    /// Individually valid parameters that no supported region contains.
    #[error("parameters {given} lie outside the supported regions")]
    OutOfRange { given: Given },
}

impl If97Error {
    pub(crate) fn range(parameter: Parameter, value: f64, min: f64, max: f64) -> Self {
        Self::Range {
            parameter,
            value,
            min,
            max,
        }
    }

    /// Returns `true` for single-parameter range violations.
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::CriticalRegion { .. })
    }
}

impl From<If97Error> for PropertyError {
    fn from(error: If97Error) -> Self {
        PropertyError::OutOfDomain {
            context: error.to_string(),
        }
    }
}
