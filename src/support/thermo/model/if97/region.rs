//! Shared contract of the single-phase regions.

use super::props::{Property, Props, Region};

/// Specific gas constant of water, J/(kg·K).
pub const R: f64 = 461.526;

/// Dimensionless Gibbs free energy `γ(π, τ)` and its partial derivatives.
///
/// Field names follow the derivative, e.g. `pitau` is `∂²γ/∂π∂τ`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gibbs {
    pub gamma: f64,
    pub pi: f64,
    pub pipi: f64,
    pub tau: f64,
    pub tautau: f64,
    pub pitau: f64,
}

impl Gibbs {
    /// Builds the property record at `(t, p)` from the reduced variables.
    #[must_use]
    pub fn props(&self, t: f64, p: f64, pi: f64, tau: f64, region: Region) -> Props {
        let rt = R * t;
        let a = self.pi - tau * self.pitau;
        Props {
            p,
            t,
            v: rt * pi * self.pi / p,
            h: rt * tau * self.tau,
            s: R * (tau * self.tau - self.gamma),
            u: rt * (tau * self.tau - pi * self.pi),
            cp: -R * tau * tau * self.tautau,
            cv: R * (-tau * tau * self.tautau + a * a / self.pipi),
            w: (rt * self.pi * self.pi / (a * a / (tau * tau * self.tautau) - self.pipi)).sqrt(),
            x: None,
            region,
        }
    }

    /// Accumulates one `n·a^i·b^j` term and its derivatives.
    ///
    /// `a` depends on `π` with slope `da` (`±1` in every IF97 polynomial) and
    /// `b` depends on `τ` with unit slope.
    pub(super) fn add_term(&mut self, n: f64, (a, i): (f64, i32), (b, j): (f64, i32), da: f64) {
        let fi = f64::from(i);
        let fj = f64::from(j);
        let ai = a.powi(i);
        let bj = b.powi(j);
        let ai_1 = if i == 0 { 0.0 } else { fi * a.powi(i - 1) * da };
        let ai_2 = if matches!(i, 0 | 1) { 0.0 } else { fi * (fi - 1.0) * a.powi(i - 2) };
        let bj_1 = if j == 0 { 0.0 } else { fj * b.powi(j - 1) };
        let bj_2 = if matches!(j, 0 | 1) { 0.0 } else { fj * (fj - 1.0) * b.powi(j - 2) };

        self.gamma += n * ai * bj;
        self.pi += n * ai_1 * bj;
        self.pipi += n * ai_2 * bj;
        self.tau += n * ai * bj_1;
        self.tautau += n * ai * bj_2;
        self.pitau += n * ai_1 * bj_1;
    }
}

/// A single-phase IF97 region: domain checks, forward equation of state and
/// backward equations.
///
/// Implemented by [`Region1`](super::Region1) and [`Region2`](super::Region2).
/// Forward evaluation never fails; keeping inputs inside the region is the
/// dispatcher's job.
pub trait SinglePhase {
    /// Tag stamped on every property record this region produces.
    const REGION: Region;

    /// Returns `true` if `p` (Pa) lies within the region's pressure range.
    fn p_in(&self, p: f64) -> bool;

    /// Returns `true` if `(t, p)` (K, Pa) lies within the region.
    fn tp_in(&self, t: f64, p: f64) -> bool;

    /// Returns the region's temperature extent `(lower, upper)` at pressure `p`.
    ///
    /// Only meaningful when [`p_in`](Self::p_in) holds.
    fn t_edges(&self, p: f64) -> (f64, f64);

    /// Returns the reduced pressure and inverse temperature `(π, τ)`.
    fn reduced(&self, t: f64, p: f64) -> (f64, f64);

    /// Evaluates the dimensionless Gibbs free energy at `(π, τ)`.
    fn gibbs(&self, pi: f64, tau: f64) -> Gibbs;

    /// Backward equation `T(p, h)`, K.
    fn t_ph(&self, p: f64, h: f64) -> f64;

    /// Backward equation `T(p, s)`, K.
    fn t_ps(&self, p: f64, s: f64) -> f64;

    /// Evaluates all properties at temperature `t` (K) and pressure `p` (Pa).
    fn props_tp(&self, t: f64, p: f64) -> Props {
        let (pi, tau) = self.reduced(t, p);
        self.gibbs(pi, tau).props(t, p, pi, tau, Self::REGION)
    }

    /// Evaluates all properties at temperature `t` (°C) and pressure `p` (Pa).
    fn props_tp_celsius(&self, t: f64, p: f64) -> Props {
        self.props_tp(t + 273.15, p)
    }

    /// Evaluates all properties from pressure and enthalpy.
    ///
    /// The returned record holds `p` and `h` exactly as given.
    fn props_ph(&self, p: f64, h: f64) -> Props {
        let t = self.t_ph(p, h);
        Props {
            h,
            ..self.props_tp(t, p)
        }
    }

    /// Evaluates all properties from pressure and entropy.
    ///
    /// The returned record holds `p` and `s` exactly as given.
    fn props_ps(&self, p: f64, s: f64) -> Props {
        let t = self.t_ps(p, s);
        Props {
            s,
            ..self.props_tp(t, p)
        }
    }

    fn tp_in_celsius(&self, t: f64, p: f64) -> bool {
        self.tp_in(t + 273.15, p)
    }

    fn ph_in(&self, p: f64, h: f64) -> bool {
        self.value_in(p, h, Property::Enthalpy)
    }

    fn ps_in(&self, p: f64, s: f64) -> bool {
        self.value_in(p, s, Property::Entropy)
    }

    /// Checks whether `value` of `property` at pressure `p` falls inside the
    /// region.
    ///
    /// Evaluates the property at both temperature edges and accepts values in
    /// the closed interval between them; the property must increase with
    /// temperature at constant pressure, as enthalpy and entropy do.
    fn value_in(&self, p: f64, value: f64, property: Property) -> bool {
        if !self.p_in(p) {
            return false;
        }
        let (t_lower, t_upper) = self.t_edges(p);
        match (
            self.props_tp(t_lower, p).get(property),
            self.props_tp(t_upper, p).get(property),
        ) {
            (Some(lower), Some(upper)) => (lower..=upper).contains(&value),
            _ => false,
        }
    }
}
