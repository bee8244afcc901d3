//! Saturation line (IF97 Region 4 equations).

use super::error::{If97Error, Parameter};

/// Coefficients `n1..n10` of the saturation-line equation.
static N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Saturation pressure at 623.15 K, Pa.
///
/// Above this pressure the saturation line no longer separates Regions 1 and 2.
pub const P_SPLIT: f64 = 16.529_164_252_605e6;

/// Temperature at which Regions 1 and 2 stop meeting on the saturation line, K.
pub const T_SPLIT: f64 = 623.15;

/// Saturation pressure↔temperature correlations.
///
/// Both directions are closed-form and valid on
/// `T ∈ [273.15 K, 647.096 K]` ⟺ `p ∈ [611.212677 Pa, 22.064 MPa]`.
///
/// ```
/// use twine_steam::support::thermo::model::if97::SaturationCurve;
///
/// let p = SaturationCurve.p_t(373.124_3).unwrap();
/// assert!((p - 101_325.0).abs() < 1.0);
/// assert!(SaturationCurve.p_t(700.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturationCurve;

impl SaturationCurve {
    pub const T_MIN: f64 = 273.15;
    pub const T_MAX: f64 = 647.096;
    pub const P_MIN: f64 = 611.212_677;
    pub const P_MAX: f64 = 22.064e6;

    /// Saturation pressure for temperature `t` (K), Pa.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `t` is outside `[T_MIN, T_MAX]`.
    pub fn p_t(&self, t: f64) -> Result<f64, If97Error> {
        if !self.t_in(t) {
            return Err(If97Error::range(
                Parameter::Temperature,
                t,
                Self::T_MIN,
                Self::T_MAX,
            ));
        }
        Ok(pressure(t))
    }

    /// Saturation pressure for temperature `t` (°C), Pa.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `t` is outside the valid interval.
    pub fn p_t_celsius(&self, t: f64) -> Result<f64, If97Error> {
        self.p_t(t + 273.15)
    }

    /// Saturation temperature for pressure `p` (Pa), K.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside `[P_MIN, P_MAX]`.
    pub fn t_p(&self, p: f64) -> Result<f64, If97Error> {
        if !self.p_in(p) {
            return Err(If97Error::range(
                Parameter::Pressure,
                p,
                Self::P_MIN,
                Self::P_MAX,
            ));
        }
        Ok(temperature(p))
    }

    /// Saturation temperature for pressure `p` (Pa), °C.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the valid interval.
    pub fn t_p_celsius(&self, p: f64) -> Result<f64, If97Error> {
        self.t_p(p).map(|t| t - 273.15)
    }

    #[must_use]
    pub fn p_in(&self, p: f64) -> bool {
        (Self::P_MIN..=Self::P_MAX).contains(&p)
    }

    #[must_use]
    pub fn t_in(&self, t: f64) -> bool {
        (Self::T_MIN..=Self::T_MAX).contains(&t)
    }

    #[must_use]
    pub fn t_in_celsius(&self, t: f64) -> bool {
        self.t_in(t + 273.15)
    }
}

/// Saturation pressure without range checks, Pa.
pub(super) fn pressure(t: f64) -> f64 {
    let theta = t + N[8] / (t - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4) * 1e6
}

/// Saturation temperature without range checks, K.
pub(super) fn temperature(p: f64) -> f64 {
    let beta = (p / 1e6).powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}
