//! IAPWS 2008 viscosity of ordinary water substance.

use super::{
    diagram::If97,
    error::{If97Error, Parameter},
    props::Props,
};

/// Critical temperature, K.
const T_CRIT: f64 = 647.096;

/// Critical density, kg/m³.
const RHO_CRIT: f64 = 322.0;

/// Coefficients of the dilute-gas term.
static H0: [f64; 4] = [1.677_52, 2.204_62, 0.636_656_4, -0.241_605];

/// Coefficients `H_ij` of the residual term, indexed by `i` then `j`.
static H1: [[f64; 7]; 6] = [
    [5.200_94e-1, 2.225_31e-1, -2.813_78e-1, 1.619_13e-1, -3.253_72e-2, 0.0, 0.0],
    [8.508_95e-2, 9.991_15e-1, -9.068_51e-1, 2.573_99e-1, 0.0, 0.0, 0.0],
    [-1.083_74, 1.887_97, -7.724_79e-1, 0.0, 0.0, 0.0, 0.0],
    [-2.895_55e-1, 1.266_13, -4.898_37e-1, 0.0, 6.984_52e-2, 0.0, -4.356_73e-3],
    [0.0, 0.0, -2.570_40e-1, 0.0, 0.0, 8.721_02e-3, 0.0],
    [0.0, 1.205_73e-1, 0.0, 0.0, 0.0, 0.0, -5.932_64e-4],
];

/// Viscosities together with the state they were computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViscosityProps {
    /// Dynamic viscosity, Pa·s.
    pub dynamic: f64,
    /// Kinematic viscosity, m²/s.
    pub kinematic: f64,
    pub props: Props,
}

/// Dynamic and kinematic viscosity of water and steam.
///
/// The correlation itself takes temperature and density. The `_tp` entry
/// points obtain density from [`If97`] first.
///
/// Critical enhancement is not included, so a small window around the
/// critical point is rejected.
///
/// ```
/// use twine_steam::support::thermo::model::if97::Viscosity;
///
/// let mu = Viscosity::new().dynamic(298.15, 998.0).unwrap();
/// assert!((mu - 889.735_1e-6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viscosity {
    steam: If97,
}

impl Viscosity {
    pub const T_MIN: f64 = 273.15;
    pub const T_MAX: f64 = 1173.15;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dynamic viscosity at temperature `t` (K) and density `density` (kg/m³), Pa·s.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `t` is outside `[T_MIN, T_MAX]`, or
    /// [`If97Error::CriticalRegion`] for
    /// `645.91 K < T < 650.77 K` with `245.8 kg/m³ < ρ < 405.3 kg/m³`.
    pub fn dynamic(&self, t: f64, density: f64) -> Result<f64, If97Error> {
        if !(Self::T_MIN..=Self::T_MAX).contains(&t) {
            return Err(If97Error::range(
                Parameter::Temperature,
                t,
                Self::T_MIN,
                Self::T_MAX,
            ));
        }
        if t > 645.91 && t < 650.77 && density > 245.8 && density < 405.3 {
            return Err(If97Error::CriticalRegion {
                temperature: t,
                density,
            });
        }

        let tau = t / T_CRIT;
        let delta = density / RHO_CRIT;

        let mu0 = 100.0 * tau.sqrt()
            / (0_i32..)
                .zip(H0)
                .map(|(i, h)| h / tau.powi(i))
                .sum::<f64>();

        let residual: f64 = (0_i32..)
            .zip(&H1)
            .map(|(i, row)| {
                let inner: f64 = (0_i32..)
                    .zip(row)
                    .map(|(j, h)| h * (delta - 1.0).powi(j))
                    .sum();
                (1.0 / tau - 1.0).powi(i) * inner
            })
            .sum();
        let mu1 = (delta * residual).exp();

        Ok(mu0 * mu1 * 1e-6)
    }

    /// Dynamic viscosity at temperature `t` (K) and pressure `p` (Pa), Pa·s.
    ///
    /// # Errors
    ///
    /// Fails if `(t, p)` lies outside Regions 1 and 2 or outside the
    /// correlation's range.
    pub fn dynamic_tp(&self, t: f64, p: f64) -> Result<f64, If97Error> {
        self.evaluate_tp(t, p).map(|visc| visc.dynamic)
    }

    /// Kinematic viscosity at temperature `t` (K) and pressure `p` (Pa), m²/s.
    ///
    /// # Errors
    ///
    /// Same conditions as [`dynamic_tp`](Self::dynamic_tp).
    pub fn kinematic_tp(&self, t: f64, p: f64) -> Result<f64, If97Error> {
        self.evaluate_tp(t, p).map(|visc| visc.kinematic)
    }

    /// Dynamic viscosity at temperature `t` (°C) and pressure `p` (Pa), Pa·s.
    ///
    /// # Errors
    ///
    /// Same conditions as [`dynamic_tp`](Self::dynamic_tp).
    pub fn dynamic_tp_celsius(&self, t: f64, p: f64) -> Result<f64, If97Error> {
        self.dynamic_tp(t + 273.15, p)
    }

    /// Kinematic viscosity at temperature `t` (°C) and pressure `p` (Pa), m²/s.
    ///
    /// # Errors
    ///
    /// Same conditions as [`dynamic_tp`](Self::dynamic_tp).
    pub fn kinematic_tp_celsius(&self, t: f64, p: f64) -> Result<f64, If97Error> {
        self.kinematic_tp(t + 273.15, p)
    }

    /// Both viscosities at `(t, p)` (K, Pa) and the state used to get them.
    ///
    /// # Errors
    ///
    /// Same conditions as [`dynamic_tp`](Self::dynamic_tp).
    pub fn evaluate_tp(&self, t: f64, p: f64) -> Result<ViscosityProps, If97Error> {
        let props = self.steam.props_tp(t, p)?;
        let dynamic = self.dynamic(t, props.density())?;
        Ok(ViscosityProps {
            dynamic,
            kinematic: dynamic * props.v,
            props,
        })
    }
}
