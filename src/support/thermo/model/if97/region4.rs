//! Region 4: wet steam between the saturated liquid and vapor lines.

use log::trace;

use crate::support::constraint::{Constrained, UnitInterval};

use super::{
    error::{If97Error, Parameter},
    props::{Property, Props},
    region::SinglePhase,
    region1::Region1,
    region2::Region2,
    saturation::{self, P_SPLIT, SaturationCurve, T_SPLIT},
};

/// Vapor quality known to lie in `[0, 1]`.
pub type Quality = Constrained<f64, UnitInterval>;

/// Saturated liquid and saturated vapor at a common pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    /// Boiling water, `x = 0`.
    pub liquid: Props,
    /// Dry saturated steam, `x = 1`.
    pub vapor: Props,
}

impl Saturation {
    /// Evaluates both bounding states at pressure `p` without range checks.
    pub(super) fn at(p: f64) -> Self {
        let t = saturation::temperature(p);
        trace!("saturation bounds at p={p} Pa, T={t} K");
        Self {
            liquid: Region1.props_tp(t, p),
            vapor: Region2.props_tp(t, p),
        }
    }

    /// Latent heat of vaporization `h'' - h'`, J/kg.
    #[must_use]
    pub fn latent_heat(&self) -> f64 {
        self.vapor.h - self.liquid.h
    }

    /// Entropy of vaporization `s'' - s'`, J/(kg·K).
    #[must_use]
    pub fn entropy_of_vaporization(&self) -> f64 {
        self.vapor.s - self.liquid.s
    }

    /// Wet steam of quality `x`.
    #[must_use]
    pub fn mix(&self, x: Quality) -> Props {
        Props::lever(&self.liquid, &self.vapor, x.into_inner())
    }

    /// Quality at which `property` takes `value`, unchecked.
    #[must_use]
    pub fn quality(&self, property: Property, value: f64) -> f64 {
        match (self.liquid.get(property), self.vapor.get(property)) {
            (Some(liquid), Some(vapor)) => (value - liquid) / (vapor - liquid),
            _ => f64::NAN,
        }
    }

    /// Returns `true` if `value` of `property` lies between the bounds.
    fn brackets(&self, property: Property, value: f64) -> bool {
        match (self.liquid.get(property), self.vapor.get(property)) {
            (Some(liquid), Some(vapor)) => (liquid..=vapor).contains(&value),
            _ => false,
        }
    }
}

/// Wet steam for `611.212677 Pa ≤ p ≤ p_sat(623.15 K)`.
///
/// Temperature and pressure are not independent here, so `(T, p)` never
/// selects this region.
///
/// ```
/// use twine_steam::support::thermo::model::if97::Region4;
///
/// let wet = Region4.props_px(1e5, 0.5).unwrap();
/// assert_eq!(wet.x, Some(0.5));
/// assert!(Region4.props_px(1e5, 1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region4;

impl Region4 {
    pub const T_MIN: f64 = SaturationCurve::T_MIN;
    pub const T_MAX: f64 = T_SPLIT;
    pub const P_MIN: f64 = SaturationCurve::P_MIN;
    pub const P_MAX: f64 = P_SPLIT;

    /// Properties of wet steam from pressure (Pa) and quality.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` or `x` is outside the region.
    pub fn props_px(&self, p: f64, x: f64) -> Result<Props, If97Error> {
        let x = check_quality(x)?;
        Ok(self.props_p(p)?.mix(x))
    }

    /// Properties of wet steam from pressure (Pa) and enthalpy (J/kg).
    ///
    /// The returned record holds `h` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the region or `h` lies
    /// outside the saturated bounds.
    pub fn props_ph(&self, p: f64, h: f64) -> Result<Props, If97Error> {
        let props = self.props_p_value(p, Property::Enthalpy, h)?;
        Ok(Props { h, ..props })
    }

    /// Properties of wet steam from pressure (Pa) and entropy (J/(kg·K)).
    ///
    /// The returned record holds `s` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the region or `s` lies
    /// outside the saturated bounds.
    pub fn props_ps(&self, p: f64, s: f64) -> Result<Props, If97Error> {
        let props = self.props_p_value(p, Property::Entropy, s)?;
        Ok(Props { s, ..props })
    }

    fn props_p_value(&self, p: f64, property: Property, value: f64) -> Result<Props, If97Error> {
        let bounds = self.props_p(p)?;
        let x = bounds.quality(property, value);
        trace!("quality {x} from {property}={value} at p={p} Pa");
        Ok(bounds.mix(check_quality(x)?))
    }

    /// Boiling water and dry saturated steam at pressure `p` (Pa).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside `[P_MIN, P_MAX]`.
    pub fn props_p(&self, p: f64) -> Result<Saturation, If97Error> {
        if !self.p_in(p) {
            return Err(If97Error::range(
                Parameter::Pressure,
                p,
                Self::P_MIN,
                Self::P_MAX,
            ));
        }
        Ok(Saturation::at(p))
    }

    /// Latent heat of vaporization at pressure `p` (Pa), J/kg.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the region.
    pub fn dh_p(&self, p: f64) -> Result<f64, If97Error> {
        self.props_p(p).map(|bounds| bounds.latent_heat())
    }

    /// Entropy of vaporization at pressure `p` (Pa), J/(kg·K).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the region.
    pub fn ds_p(&self, p: f64) -> Result<f64, If97Error> {
        self.props_p(p).map(|bounds| bounds.entropy_of_vaporization())
    }

    #[must_use]
    pub fn p_in(&self, p: f64) -> bool {
        (Self::P_MIN..=Self::P_MAX).contains(&p)
    }

    #[must_use]
    pub fn x_in(&self, x: f64) -> bool {
        (0.0..=1.0).contains(&x)
    }

    #[must_use]
    pub fn px_in(&self, p: f64, x: f64) -> bool {
        self.p_in(p) && self.x_in(x)
    }

    #[must_use]
    pub fn ph_in(&self, p: f64, h: f64) -> bool {
        self.p_in(p) && Saturation::at(p).brackets(Property::Enthalpy, h)
    }

    #[must_use]
    pub fn ps_in(&self, p: f64, s: f64) -> bool {
        self.p_in(p) && Saturation::at(p).brackets(Property::Entropy, s)
    }

    /// Always `false`: `T` and `p` are tied together on the saturation line.
    #[must_use]
    pub fn tp_in(&self, _t: f64, _p: f64) -> bool {
        false
    }

    /// Always `false`, see [`tp_in`](Self::tp_in).
    #[must_use]
    pub fn tp_in_celsius(&self, _t: f64, _p: f64) -> bool {
        false
    }
}

fn check_quality(x: f64) -> Result<Quality, If97Error> {
    UnitInterval::new(x).map_err(|_| If97Error::range(Parameter::Quality, x, 0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::model::if97::Region;

    #[test]
    fn lever_rule_between_bounds() {
        let bounds = Region4.props_p(1e6).unwrap();
        let wet = Region4.props_px(1e6, 0.3).unwrap();

        assert_eq!(wet.region, Region::TwoPhase);
        assert_eq!(wet.x, Some(0.3));
        assert_relative_eq!(wet.p, 1e6);
        assert_relative_eq!(wet.t, 0.453_035_632e3, max_relative = 1e-8);
        assert_relative_eq!(
            wet.h,
            bounds.liquid.h * 0.7 + bounds.vapor.h * 0.3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            wet.v,
            bounds.liquid.v * 0.7 + bounds.vapor.v * 0.3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn endpoints_reproduce_bounds() {
        let bounds = Region4.props_p(2e5).unwrap();
        let dry = Region4.props_px(2e5, 1.0).unwrap();
        let boiling = Region4.props_px(2e5, 0.0).unwrap();
        for property in Property::ALL.into_iter().filter(|&p| p != Property::Quality) {
            assert_relative_eq!(
                boiling.get(property).unwrap(),
                bounds.liquid.get(property).unwrap(),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                dry.get(property).unwrap(),
                bounds.vapor.get(property).unwrap(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn quality_round_trips_through_enthalpy_and_entropy() {
        for x in [0.0, 0.1, 0.5, 0.93, 1.0] {
            let wet = Region4.props_px(5e6, x).unwrap();
            let from_h = Region4.props_ph(5e6, wet.h).unwrap();
            let from_s = Region4.props_ps(5e6, wet.s).unwrap();
            assert_relative_eq!(from_h.x.unwrap(), x, epsilon = 1e-6);
            assert_relative_eq!(from_s.x.unwrap(), x, epsilon = 1e-6);
            assert_eq!(from_h.h, wet.h);
            assert_eq!(from_s.s, wet.s);
        }
    }

    #[test]
    fn latent_heat_at_atmospheric_pressure() {
        let dh = Region4.dh_p(101_325.0).unwrap();
        assert_relative_eq!(dh, 2_256.5e3, max_relative = 1e-3);
        let ds = Region4.ds_p(101_325.0).unwrap();
        assert_relative_eq!(ds, 6_048.0, max_relative = 1e-3);
    }

    #[test]
    fn range_errors() {
        assert!(matches!(
            Region4.props_px(1e5, -0.1),
            Err(If97Error::Range {
                parameter: Parameter::Quality,
                ..
            })
        ));
        assert!(matches!(
            Region4.props_px(20e6, 0.5),
            Err(If97Error::Range {
                parameter: Parameter::Pressure,
                ..
            })
        ));
        assert!(Region4.props_px(100.0, 0.5).is_err());
        assert!(Region4.props_ph(1e5, 4e6).is_err());
        assert!(Region4.props_px(Region4::P_MIN, 0.5).is_ok());
        assert!(Region4.props_px(Region4::P_MAX, 0.5).is_ok());
    }

    #[test]
    fn predicates() {
        assert!(Region4.px_in(1e5, 0.0));
        assert!(Region4.px_in(1e5, 1.0));
        assert!(!Region4.px_in(1e5, 1.01));
        assert!(!Region4.x_in(f64::NAN));
        assert!(!Region4.tp_in(373.0, 1e5));
        assert!(!Region4.tp_in_celsius(100.0, 1e5));

        let bounds = Region4.props_p(1e5).unwrap();
        let h_mid = 0.5 * (bounds.liquid.h + bounds.vapor.h);
        assert!(Region4.ph_in(1e5, h_mid));
        assert!(Region4.ph_in(1e5, bounds.vapor.h));
        assert!(!Region4.ph_in(1e5, bounds.vapor.h + 1.0));
        assert!(Region4.ps_in(1e5, bounds.liquid.s));
        assert!(!Region4.ps_in(17e6, bounds.liquid.s));
    }
}
