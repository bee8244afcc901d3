use std::fmt;

/// The IF97 region that produced a set of properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Region 1, compressed liquid.
    Liquid,
    /// Region 2, superheated vapor and supercritical steam.
    Vapor,
    /// Region 4, wet steam between the saturated liquid and vapor lines.
    TwoPhase,
}

impl Region {
    /// Candidate order used by the dispatcher.
    pub const ORDER: [Region; 3] = [Region::Liquid, Region::Vapor, Region::TwoPhase];

    /// Returns the region number used by IF97.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Liquid => 1,
            Self::Vapor => 2,
            Self::TwoPhase => 4,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Liquid => "liquid",
            Self::Vapor => "vapor",
            Self::TwoPhase => "two-phase",
        };
        write!(f, "region {} ({name})", self.number())
    }
}

/// Names of the entries in [`Props`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Pressure,
    Temperature,
    SpecificVolume,
    Enthalpy,
    Entropy,
    InternalEnergy,
    Cp,
    Cv,
    SpeedOfSound,
    Quality,
}

impl Property {
    pub const ALL: [Property; 10] = [
        Property::Pressure,
        Property::Temperature,
        Property::SpecificVolume,
        Property::Enthalpy,
        Property::Entropy,
        Property::InternalEnergy,
        Property::Cp,
        Property::Cv,
        Property::SpeedOfSound,
        Property::Quality,
    ];

    /// Returns the short key conventionally used for the property.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pressure => "p",
            Self::Temperature => "T",
            Self::SpecificVolume => "v",
            Self::Enthalpy => "h",
            Self::Entropy => "s",
            Self::InternalEnergy => "u",
            Self::Cp => "cp",
            Self::Cv => "cv",
            Self::SpeedOfSound => "w",
            Self::Quality => "x",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Thermophysical properties of water or steam in SI units.
///
/// Every record carries the [`Region`] that computed it, so callers never need
/// to ask the dispatcher which region was used last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    /// Absolute pressure, Pa.
    pub p: f64,
    /// Absolute temperature, K.
    pub t: f64,
    /// Specific volume, m³/kg.
    pub v: f64,
    /// Specific enthalpy, J/kg.
    pub h: f64,
    /// Specific entropy, J/(kg·K).
    pub s: f64,
    /// Specific internal energy, J/kg.
    pub u: f64,
    /// Isobaric heat capacity, J/(kg·K).
    pub cp: f64,
    /// Isochoric heat capacity, J/(kg·K).
    pub cv: f64,
    /// Speed of sound, m/s.
    pub w: f64,
    /// Vapor quality, present only for two-phase states.
    pub x: Option<f64>,
    pub region: Region,
}

impl Props {
    /// Looks a property up by name.
    ///
    /// Returns `None` only for [`Property::Quality`] on single-phase states.
    #[must_use]
    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Pressure => Some(self.p),
            Property::Temperature => Some(self.t),
            Property::SpecificVolume => Some(self.v),
            Property::Enthalpy => Some(self.h),
            Property::Entropy => Some(self.s),
            Property::InternalEnergy => Some(self.u),
            Property::Cp => Some(self.cp),
            Property::Cv => Some(self.cv),
            Property::SpeedOfSound => Some(self.w),
            Property::Quality => self.x,
        }
    }

    /// Iterates over the properties present in this record.
    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        Property::ALL
            .into_iter()
            .filter_map(|property| self.get(property).map(|value| (property, value)))
    }

    /// Density, kg/m³.
    #[must_use]
    pub fn density(&self) -> f64 {
        1.0 / self.v
    }

    /// Temperature, °C.
    #[must_use]
    pub fn t_celsius(&self) -> f64 {
        self.t - 273.15
    }

    /// Mixes two bounding states with the lever rule.
    ///
    /// Pressure and temperature come from `liquid`; both bounds share them.
    pub(crate) fn lever(liquid: &Props, vapor: &Props, x: f64) -> Props {
        let mix = |a: f64, b: f64| a * (1.0 - x) + b * x;
        Props {
            p: liquid.p,
            t: liquid.t,
            v: mix(liquid.v, vapor.v),
            h: mix(liquid.h, vapor.h),
            s: mix(liquid.s, vapor.s),
            u: mix(liquid.u, vapor.u),
            cp: mix(liquid.cp, vapor.cp),
            cv: mix(liquid.cv, vapor.cv),
            w: mix(liquid.w, vapor.w),
            x: Some(x),
            region: Region::TwoPhase,
        }
    }
}
