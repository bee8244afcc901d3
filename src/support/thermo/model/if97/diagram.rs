use log::debug;

use super::{
    error::{Given, If97Error},
    props::{Props, Region},
    region::SinglePhase,
    region1::Region1,
    region2::Region2,
    region4::{Region4, Saturation},
    saturation::SaturationCurve,
};

/// Water and steam properties over IF97 Regions 1, 2 and 4.
///
/// Each query tries the regions in [`Region::ORDER`] and delegates to the
/// first one containing the input. Region 3 and Region 5 are not covered;
/// inputs there fail with [`If97Error::OutOfRange`]. The region that answered
/// is recorded in [`Props::region`].
///
/// ```
/// use twine_steam::support::thermo::model::if97::{If97, Region};
///
/// let steam = If97::new();
/// let props = steam.props_tp(300.0, 3e6).unwrap();
/// assert_eq!(props.region, Region::Liquid);
/// assert!((props.h - 115.331e3).abs() < 1.0);
///
/// assert!(steam.props_tp(650.0, 25e6).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97;

impl If97 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the first region in [`Region::ORDER`] that contains `given`.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] if no region contains `given`.
    pub fn props(&self, given: Given) -> Result<Props, If97Error> {
        for region in Region::ORDER {
            let props = match region {
                Region::Liquid => single_phase(&Region1, given),
                Region::Vapor => single_phase(&Region2, given),
                Region::TwoPhase => two_phase(given),
            };
            if let Some(props) = props {
                debug!("{given} resolved by {region}");
                return Ok(props);
            }
        }
        debug!("{given} rejected by every region");
        Err(If97Error::OutOfRange { given })
    }

    /// Properties at temperature `t` (K) and pressure `p` (Pa).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] outside Regions 1 and 2.
    pub fn props_tp(&self, t: f64, p: f64) -> Result<Props, If97Error> {
        self.props(Given::TemperaturePressure { t, p })
    }

    /// Properties at temperature `t` (°C) and pressure `p` (Pa).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] outside Regions 1 and 2.
    pub fn props_tp_celsius(&self, t: f64, p: f64) -> Result<Props, If97Error> {
        self.props(Given::CelsiusPressure { t, p })
    }

    /// Properties at pressure `p` (Pa) and enthalpy `h` (J/kg).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] outside Regions 1, 2 and 4.
    pub fn props_ph(&self, p: f64, h: f64) -> Result<Props, If97Error> {
        self.props(Given::PressureEnthalpy { p, h })
    }

    /// Properties at pressure `p` (Pa) and entropy `s` (J/(kg·K)).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] outside Regions 1, 2 and 4.
    pub fn props_ps(&self, p: f64, s: f64) -> Result<Props, If97Error> {
        self.props(Given::PressureEntropy { p, s })
    }

    /// Properties of wet steam at pressure `p` (Pa) and quality `x`.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::OutOfRange`] if `(p, x)` is outside Region 4.
    pub fn props_px(&self, p: f64, x: f64) -> Result<Props, If97Error> {
        self.props(Given::PressureQuality { p, x })
    }

    /// Boiling water and dry saturated steam at pressure `p` (Pa).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] if `p` is outside the Region 4 pressure range.
    pub fn props_p(&self, p: f64) -> Result<Saturation, If97Error> {
        Region4.props_p(p)
    }

    /// Saturation pressure at temperature `t` (K), Pa.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn p_t(&self, t: f64) -> Result<f64, If97Error> {
        SaturationCurve.p_t(t)
    }

    /// Saturation pressure at temperature `t` (°C), Pa.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn p_t_celsius(&self, t: f64) -> Result<f64, If97Error> {
        SaturationCurve.p_t_celsius(t)
    }

    /// Saturation temperature at pressure `p` (Pa), K.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn t_p(&self, p: f64) -> Result<f64, If97Error> {
        SaturationCurve.t_p(p)
    }

    /// Saturation temperature at pressure `p` (Pa), °C.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn t_p_celsius(&self, p: f64) -> Result<f64, If97Error> {
        SaturationCurve.t_p_celsius(p)
    }

    /// Latent heat of vaporization at pressure `p` (Pa), J/kg.
    ///
    /// Accepts the whole saturation curve up to the critical pressure. Above
    /// [`P_SPLIT`](super::P_SPLIT) (16.529 MPa) the Region 1 and Region 2
    /// equations are used outside their domains, so the result is an
    /// extrapolation and does not vanish at the critical point.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn dh_p(&self, p: f64) -> Result<f64, If97Error> {
        SaturationCurve.t_p(p)?;
        Ok(Saturation::at(p).latent_heat())
    }

    /// Entropy of vaporization at pressure `p` (Pa), J/(kg·K).
    ///
    /// Extrapolated above [`P_SPLIT`](super::P_SPLIT), as for
    /// [`dh_p`](Self::dh_p).
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Range`] outside the saturation curve.
    pub fn ds_p(&self, p: f64) -> Result<f64, If97Error> {
        SaturationCurve.t_p(p)?;
        Ok(Saturation::at(p).entropy_of_vaporization())
    }
}

fn single_phase<R: SinglePhase>(region: &R, given: Given) -> Option<Props> {
    match given {
        Given::TemperaturePressure { t, p } => {
            region.tp_in(t, p).then(|| region.props_tp(t, p))
        }
        Given::CelsiusPressure { t, p } => region
            .tp_in_celsius(t, p)
            .then(|| region.props_tp_celsius(t, p)),
        Given::PressureEnthalpy { p, h } => region.ph_in(p, h).then(|| region.props_ph(p, h)),
        Given::PressureEntropy { p, s } => region.ps_in(p, s).then(|| region.props_ps(p, s)),
        Given::PressureQuality { .. } => None,
    }
}

fn two_phase(given: Given) -> Option<Props> {
    let region = Region4;
    let props = match given {
        Given::PressureEnthalpy { p, h } if region.ph_in(p, h) => region.props_ph(p, h),
        Given::PressureEntropy { p, s } if region.ps_in(p, s) => region.props_ps(p, s),
        Given::PressureQuality { p, x } if region.px_in(p, x) => region.props_px(p, x),
        _ => return None,
    };
    props.ok()
}
