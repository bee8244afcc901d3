//! Region 1: compressed liquid.

use super::{
    props::Region,
    region::{Gibbs, SinglePhase},
    saturation::{self, P_SPLIT, SaturationCurve, T_SPLIT},
};

/// `(I, J, n)` terms of the dimensionless Gibbs free energy.
static GAMMA: [(i32, i32, f64); 34] = [
    (0, -2, 0.146_329_712_131_67),
    (0, -1, -0.845_481_871_691_14),
    (0, 0, -3.756_360_367_204),
    (0, 1, 3.385_516_916_838_5),
    (0, 2, -0.957_919_633_878_72),
    (0, 3, 0.157_720_385_132_28),
    (0, 4, -0.016_616_417_199_501),
    (0, 5, 8.121_462_998_356_8e-4),
    (1, -9, 2.831_908_012_380_4e-4),
    (1, -7, -6.070_630_156_587_4e-4),
    (1, -1, -0.018_990_068_218_419),
    (1, 0, -0.032_529_748_770_505),
    (1, 1, -0.021_841_717_175_414),
    (1, 3, -5.283_835_796_993e-5),
    (2, -3, -4.718_432_107_326_7e-4),
    (2, 0, -3.000_178_079_302_6e-4),
    (2, 1, 4.766_139_390_698_7e-5),
    (2, 3, -4.414_184_533_084_6e-6),
    (2, 17, -7.269_499_629_759_4e-16),
    (3, -4, -3.167_964_484_505_4e-5),
    (3, 0, -2.827_079_798_531_2e-6),
    (3, 6, -8.520_512_812_010_3e-10),
    (4, -5, -2.242_528_190_8e-6),
    (4, -2, -6.517_122_289_560_1e-7),
    (4, 10, -1.434_172_993_792_4e-13),
    (5, -8, -4.051_699_686_011_7e-7),
    (8, -11, -1.273_430_174_164_1e-9),
    (8, -6, -1.742_487_123_063_4e-10),
    (21, -29, -6.876_213_129_553_1e-19),
    (23, -31, 1.447_830_782_852_1e-20),
    (29, -38, 2.633_578_166_279_5e-23),
    (30, -39, -1.194_762_264_007_1e-23),
    (31, -40, 1.822_809_458_140_4e-24),
    (32, -41, -9.353_708_729_245_8e-26),
];

/// `(I, J, n)` terms of the backward equation `T(p, h)`.
static T_PH: [(i32, i32, f64); 20] = [
    (0, 0, -238.724_899_245_21),
    (0, 1, 404.211_886_379_45),
    (0, 2, 113.497_468_817_18),
    (0, 6, -5.845_761_604_803_9),
    (0, 22, -1.528_548_241_314e-4),
    (0, 32, -1.086_670_769_537_7e-6),
    (1, 0, -13.391_744_872_602),
    (1, 1, 43.211_039_183_559),
    (1, 2, -54.010_067_170_506),
    (1, 3, 30.535_892_203_916),
    (1, 4, -6.596_474_942_363_8),
    (1, 10, 9.396_540_087_836_3e-3),
    (1, 32, 1.157_364_750_534e-7),
    (2, 10, -2.585_864_128_207_3e-5),
    (2, 32, -4.064_436_308_479_9e-9),
    (3, 10, 6.645_618_619_163_5e-8),
    (3, 32, 8.067_073_410_302_7e-11),
    (4, 32, -9.347_777_121_394_7e-13),
    (5, 32, 5.826_544_202_060_1e-15),
    (6, 32, -1.502_018_595_350_3e-17),
];

/// `(I, J, n)` terms of the backward equation `T(p, s)`.
static T_PS: [(i32, i32, f64); 20] = [
    (0, 0, 174.782_680_583_07),
    (0, 1, 34.806_930_892_873),
    (0, 2, 6.529_258_497_845_5),
    (0, 3, 0.330_399_817_754_89),
    (0, 11, -1.928_138_292_319_6e-7),
    (0, 31, -2.490_919_724_457_3e-23),
    (1, 0, -0.261_076_364_893_32),
    (1, 1, 0.225_929_659_815_86),
    (1, 2, -0.064_256_463_395_226),
    (1, 3, 7.887_628_927_052_6e-3),
    (1, 12, 3.567_211_060_736_6e-10),
    (1, 31, 1.733_249_699_489_5e-24),
    (2, 0, 5.660_890_065_483_7e-4),
    (2, 1, -3.263_548_313_971_7e-4),
    (2, 2, 4.477_828_669_063_2e-5),
    (2, 9, -5.132_215_690_850_7e-10),
    (2, 31, -4.252_265_704_220_7e-26),
    (3, 10, 2.640_044_136_068_9e-13),
    (3, 32, 7.812_460_045_972_3e-29),
    (4, 32, -3.073_219_990_366_8e-31),
];

/// Compressed liquid, `273.15 K ≤ T ≤ 623.15 K`, `p_sat(T) ≤ p ≤ 100 MPa`.
///
/// ```
/// use twine_steam::support::thermo::model::if97::{Region1, SinglePhase};
///
/// let props = Region1.props_tp(300.0, 3e6);
/// assert!((props.v - 0.100_215_168e-2).abs() < 1e-11);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region1;

impl Region1 {
    pub const T_MIN: f64 = 273.15;
    pub const T_MAX: f64 = T_SPLIT;
    pub const P_MIN: f64 = SaturationCurve::P_MIN;
    pub const P_MAX: f64 = 100e6;
}

impl SinglePhase for Region1 {
    const REGION: Region = Region::Liquid;

    fn p_in(&self, p: f64) -> bool {
        (Self::P_MIN..=Self::P_MAX).contains(&p)
    }

    fn tp_in(&self, t: f64, p: f64) -> bool {
        (Self::T_MIN..=Self::T_MAX).contains(&t)
            && p <= Self::P_MAX
            && p >= saturation::pressure(t)
    }

    fn t_edges(&self, p: f64) -> (f64, f64) {
        let upper = if p <= P_SPLIT {
            saturation::temperature(p)
        } else {
            Self::T_MAX
        };
        (Self::T_MIN, upper)
    }

    fn reduced(&self, t: f64, p: f64) -> (f64, f64) {
        (p / 16.53e6, 1386.0 / t)
    }

    fn gibbs(&self, pi: f64, tau: f64) -> Gibbs {
        let mut gibbs = Gibbs::default();
        for &(i, j, n) in &GAMMA {
            gibbs.add_term(n, (7.1 - pi, i), (tau - 1.222, j), -1.0);
        }
        gibbs
    }

    fn t_ph(&self, p: f64, h: f64) -> f64 {
        let pi = p / 1e6;
        let eta = h / 2500e3;
        T_PH.iter()
            .map(|&(i, j, n)| n * pi.powi(i) * (eta + 1.0).powi(j))
            .sum()
    }

    fn t_ps(&self, p: f64, s: f64) -> f64 {
        let pi = p / 1e6;
        let sigma = s / 1e3;
        T_PS.iter()
            .map(|&(i, j, n)| n * pi.powi(i) * (sigma + 2.0).powi(j))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_reference_points() {
        let props = Region1.props_tp(300.0, 3e6);
        assert_relative_eq!(props.v, 0.100_215_168e-2, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.115_331_273e6, max_relative = 1e-8);
        assert_relative_eq!(props.u, 0.112_324_818e6, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.392_294_792e3, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.417_301_218e4, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.150_773_921e4, max_relative = 1e-8);
        assert_eq!(props.region, Region::Liquid);
        assert_eq!(props.x, None);

        let props = Region1.props_tp(300.0, 80e6);
        assert_relative_eq!(props.v, 0.971_180_894e-3, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.184_142_828e6, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.368_563_852e3, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.401_008_987e4, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.163_469_054e4, max_relative = 1e-8);

        let props = Region1.props_tp(500.0, 3e6);
        assert_relative_eq!(props.v, 0.120_241_800e-2, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.975_542_239e6, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.258_041_912e4, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.465_580_682e4, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.124_071_337e4, max_relative = 1e-8);
    }

    #[test]
    fn backward_reference_points() {
        assert_relative_eq!(Region1.t_ph(3e6, 500e3), 0.391_798_509e3, max_relative = 1e-8);
        assert_relative_eq!(Region1.t_ph(80e6, 500e3), 0.378_108_626e3, max_relative = 1e-8);
        assert_relative_eq!(Region1.t_ph(80e6, 1500e3), 0.611_041_229e3, max_relative = 1e-8);

        assert_relative_eq!(Region1.t_ps(3e6, 0.5e3), 0.307_842_258e3, max_relative = 1e-8);
        assert_relative_eq!(Region1.t_ps(80e6, 0.5e3), 0.309_979_785e3, max_relative = 1e-8);
        assert_relative_eq!(Region1.t_ps(80e6, 3e3), 0.565_899_909e3, max_relative = 1e-8);
    }

    #[test]
    fn props_ph_keeps_the_given_enthalpy() {
        let forward = Region1.props_tp(400.0, 5e6);
        let backward = Region1.props_ph(5e6, forward.h);
        assert_eq!(backward.h, forward.h);
        assert_eq!(backward.p, 5e6);
        assert_relative_eq!(backward.t, 400.0, epsilon = 0.03);

        let backward = Region1.props_ps(5e6, forward.s);
        assert_eq!(backward.s, forward.s);
        assert_relative_eq!(backward.t, 400.0, epsilon = 0.03);
    }

    #[test]
    fn membership() {
        assert!(Region1.tp_in(300.0, 3e6));
        assert!(Region1.tp_in_celsius(26.85, 3e6));
        assert!(!Region1.tp_in(400.0, 1e5));
        assert!(!Region1.tp_in(650.0, 50e6));
        assert!(!Region1.tp_in(300.0, 101e6));

        let h = Region1.props_tp(350.0, 1e6).h;
        assert!(Region1.ph_in(1e6, h));
        assert!(!Region1.ph_in(1e6, 3e6));
        assert!(!Region1.ph_in(500.0, h));

        let s = Region1.props_tp(350.0, 1e6).s;
        assert!(Region1.ps_in(1e6, s));
        assert!(!Region1.ps_in(1e6, 7e3));
    }

    #[test]
    fn edges_follow_saturation_then_split_temperature() {
        let (lower, upper) = Region1.t_edges(1e5);
        assert_relative_eq!(lower, 273.15);
        assert_relative_eq!(upper, 0.372_755_919e3, max_relative = 1e-8);

        let (_, upper) = Region1.t_edges(50e6);
        assert_relative_eq!(upper, 623.15);
    }
}
