//! Region 2: superheated vapor and supercritical steam.

use super::{
    boundary23::Boundary23,
    props::Region,
    region::{Gibbs, SinglePhase},
    saturation::{self, P_SPLIT, SaturationCurve, T_SPLIT},
};

/// `(J, n)` terms of the ideal-gas part.
static IDEAL: [(i32, f64); 9] = [
    (0, -9.692_768_650_021_7),
    (1, 10.086_655_968_018),
    (-5, -0.005_608_791_128_302),
    (-4, 0.071_452_738_081_455),
    (-3, -0.407_104_982_239_28),
    (-2, 1.424_081_917_144_4),
    (-1, -4.383_951_131_945),
    (2, -0.284_086_324_607_72),
    (3, 0.021_268_463_753_307),
];

/// `(I, J, n)` terms of the residual part.
static RESIDUAL: [(i32, i32, f64); 43] = [
    (1, 0, -1.773_174_247_321_3e-3),
    (1, 1, -0.017_834_862_292_358),
    (1, 2, -0.045_996_013_696_365),
    (1, 3, -0.057_581_259_083_432),
    (1, 6, -0.050_325_278_727_93),
    (2, 1, -3.303_264_167_020_3e-5),
    (2, 2, -1.894_898_751_631_5e-4),
    (2, 4, -3.939_277_724_335_5e-3),
    (2, 7, -0.043_797_295_650_573),
    (2, 36, -2.667_454_791_408_7e-5),
    (3, 0, 2.048_173_769_230_9e-8),
    (3, 1, 4.387_066_728_443_5e-7),
    (3, 3, -3.227_767_723_857e-5),
    (3, 6, -1.503_392_454_214_8e-3),
    (3, 35, -0.040_668_253_562_649),
    (4, 1, -7.884_730_955_936_7e-10),
    (4, 2, 1.279_071_785_228_5e-8),
    (4, 3, 4.822_537_271_850_7e-7),
    (5, 7, 2.292_207_633_766_1e-6),
    (6, 3, -1.671_476_645_106_1e-11),
    (6, 16, -2.117_147_232_135_5e-3),
    (6, 35, -23.895_741_934_104),
    (7, 0, -5.905_956_432_427e-18),
    (7, 11, -1.262_180_889_910_1e-6),
    (7, 25, -0.038_946_842_435_739),
    (8, 8, 1.125_621_136_045_9e-11),
    (8, 36, -8.231_134_089_799_8),
    (9, 13, 1.980_971_280_208_8e-8),
    (10, 4, 1.040_696_521_017_4e-19),
    (10, 10, -1.023_474_709_592_9e-13),
    (10, 14, -1.001_817_937_951_1e-9),
    (16, 29, -8.088_290_864_698_5e-11),
    (16, 50, 0.106_930_318_794_09),
    (18, 57, -0.336_622_505_741_71),
    (20, 20, 8.918_584_535_542_1e-25),
    (20, 35, 3.062_931_687_623_2e-13),
    (20, 48, -4.200_246_769_820_8e-6),
    (21, 21, -5.905_602_968_563_9e-26),
    (22, 53, 3.782_694_761_345_7e-6),
    (23, 39, -1.276_860_893_468_1e-15),
    (24, 26, 7.308_761_059_506_1e-29),
    (24, 40, 5.541_471_535_077_8e-17),
    (24, 58, -9.436_970_724_121e-7),
];

static T_PH_2A: [(i32, i32, f64); 34] = [
    (0, 0, 1_089.895_231_828_8),
    (0, 1, 849.516_544_955_35),
    (0, 2, -107.817_480_918_26),
    (0, 3, 33.153_654_801_263),
    (0, 7, -7.423_201_679_024_8),
    (0, 20, 11.765_048_724_356),
    (1, 0, 1.844_574_935_579),
    (1, 1, -4.179_270_054_962_4),
    (1, 2, 6.247_819_693_581_2),
    (1, 3, -17.344_563_108_114),
    (1, 7, -200.581_768_620_96),
    (1, 9, 271.960_654_737_96),
    (1, 11, -455.113_182_858_18),
    (1, 18, 3_091.968_860_475_5),
    (1, 44, 252_266.403_578_72),
    (2, 0, -6.170_742_286_833_9e-3),
    (2, 2, -0.310_780_466_295_83),
    (2, 7, 11.670_873_077_107),
    (2, 36, 128_127_984.040_46),
    (2, 38, -985_549_096.232_76),
    (2, 40, 2_822_454_697.300_2),
    (2, 42, -3_594_897_141.070_3),
    (2, 44, 1_722_734_991.319_7),
    (3, 24, -13_551.334_240_775),
    (3, 44, 12_848_734.664_65),
    (4, 12, 1.386_572_428_322_6),
    (4, 32, 235_988.325_565_14),
    (4, 44, -13_105_236.545_054),
    (5, 32, 7_399.983_547_476_6),
    (5, 36, -551_966.970_300_6),
    (5, 42, 3_715_408.599_623_3),
    (6, 34, 19_127.729_239_66),
    (6, 44, -415_351.648_356_34),
    (7, 28, -62.459_855_192_507),
];

static T_PH_2B: [(i32, i32, f64); 38] = [
    (0, 0, 1_489.504_107_951_6),
    (0, 1, 743.077_983_140_34),
    (0, 2, -97.708_318_797_837),
    (0, 12, 2.474_246_470_567_4),
    (0, 18, -0.632_813_200_160_26),
    (0, 24, 1.138_595_212_965_8),
    (0, 28, -0.478_118_636_486_25),
    (0, 40, 8.520_812_343_154_4e-3),
    (1, 0, 0.937_471_473_779_32),
    (1, 2, 3.359_311_860_491_6),
    (1, 6, 3.380_935_560_145_4),
    (1, 12, 0.168_445_396_719_04),
    (1, 18, 0.738_757_452_366_95),
    (1, 24, -0.471_287_374_361_86),
    (1, 28, 0.150_202_731_397_07),
    (1, 40, -2.176_411_421_975e-3),
    (2, 2, -0.021_810_755_324_761),
    (2, 8, -0.108_297_844_036_77),
    (2, 18, -0.046_333_324_635_812),
    (2, 40, 7.128_035_195_955_1e-5),
    (3, 1, 1.103_283_178_999_9e-4),
    (3, 2, 1.895_524_838_790_2e-4),
    (3, 12, 3.089_154_116_053_7e-3),
    (3, 24, 1.355_550_455_494_9e-3),
    (4, 2, 2.864_023_747_745_6e-7),
    (4, 12, -1.077_985_735_751_2e-5),
    (4, 18, -7.646_271_245_481_4e-5),
    (4, 24, 1.405_239_281_831_6e-5),
    (4, 28, -3.108_381_433_143_4e-5),
    (4, 40, -1.030_273_821_210_3e-6),
    (5, 18, 2.821_728_163_504e-7),
    (5, 24, 1.270_490_227_194_5e-6),
    (5, 40, 7.380_335_346_829_2e-8),
    (6, 28, -1.103_013_923_890_9e-8),
    (7, 2, -8.145_636_520_783_3e-14),
    (7, 28, -2.518_054_568_296_2e-11),
    (9, 1, -1.756_523_396_940_7e-18),
    (9, 40, 8.693_415_634_416_3e-15),
];

static T_PH_2C: [(i32, i32, f64); 23] = [
    (-7, 0, -3_236_839_855_524.2),
    (-7, 4, 7_326_335_090_218.1),
    (-6, 0, 358_250_899_454.47),
    (-6, 2, -583_401_318_515.9),
    (-5, 0, -10_783_068_217.47),
    (-5, 2, 20_825_544_563.171),
    (-2, 0, 610_747.835_645_16),
    (-2, 1, 859_777.225_355_8),
    (-1, 0, -25_745.723_604_17),
    (-1, 2, 31_081.088_422_714),
    (0, 0, 1_208.231_586_593_6),
    (0, 1, 482.197_551_092_55),
    (1, 4, 3.796_600_127_248_6),
    (1, 8, -10.842_984_880_077),
    (2, 4, -0.045_364_172_676_66),
    (6, 0, 1.455_911_565_869_8e-13),
    (6, 1, 1.126_159_740_723e-12),
    (6, 4, -1.780_498_224_068_6e-11),
    (6, 10, 1.232_457_969_083_2e-7),
    (6, 12, -1.160_692_113_098_4e-6),
    (6, 16, 2.784_636_708_855_4e-5),
    (6, 20, -5.927_003_847_417_6e-4),
    (6, 22, 1.291_858_299_187_8e-3),
];

static T_PS_2A: [(f64, i32, f64); 46] = [
    (-1.5, -24, -392_359.838_619_84),
    (-1.5, -23, 515_265.738_272_7),
    (-1.5, -19, 40_482.443_161_048),
    (-1.5, -13, -321.937_909_239_02),
    (-1.5, -11, 96.961_424_218_694),
    (-1.5, -10, -22.867_846_371_773),
    (-1.25, -19, -449_429.141_243_57),
    (-1.25, -15, -5_011.833_602_016_6),
    (-1.25, -6, 0.356_844_635_600_15),
    (-1.0, -26, 44_235.335_848_19),
    (-1.0, -21, -13_673.388_811_708),
    (-1.0, -17, 421_632.602_078_64),
    (-1.0, -16, 22_516.925_837_475),
    (-1.0, -9, 474.421_448_656_46),
    (-1.0, -8, -149.311_307_976_47),
    (-0.75, -15, -197_811.263_204_52),
    (-0.75, -14, -23_554.399_470_76),
    (-0.5, -26, -19_070.616_302_076),
    (-0.5, -13, 55_375.669_883_164),
    (-0.5, -9, 3_829.369_143_736_3),
    (-0.5, -7, -603.918_605_805_67),
    (-0.25, -27, 1_936.310_262_033_1),
    (-0.25, -25, 4_266.064_369_861),
    (-0.25, -11, -5_978.063_887_271_8),
    (-0.25, -6, -704.014_639_268_62),
    (0.25, 1, 338.367_841_075_53),
    (0.25, 4, 20.862_786_635_187),
    (0.25, 8, 0.033_834_172_656_196),
    (0.25, 11, -4.312_442_841_489_3e-5),
    (0.5, 0, 166.537_913_564_12),
    (0.5, 1, -139.862_920_558_98),
    (0.5, 5, -0.788_495_479_998_72),
    (0.5, 6, 0.072_132_411_753_872),
    (0.5, 10, -5.975_483_939_828_3e-3),
    (0.5, 14, -1.214_135_895_390_4e-5),
    (0.5, 16, 2.322_709_673_387_1e-7),
    (0.75, 0, -10.538_463_566_194),
    (0.75, 4, 2.071_892_549_650_2),
    (0.75, 9, -0.072_193_155_260_427),
    (0.75, 17, 2.074_988_708_112e-7),
    (1.0, 7, -0.018_340_657_911_379),
    (1.0, 18, 2.903_627_234_869_6e-7),
    (1.25, 3, 0.210_375_278_936_19),
    (1.25, 15, 2.568_123_972_999_9e-4),
    (1.5, 5, -0.012_799_002_933_781),
    (1.5, 18, -8.219_810_265_201_8e-6),
];

static T_PS_2B: [(i32, i32, f64); 44] = [
    (-6, 0, 316_876.650_834_97),
    (-6, 11, 20.864_175_881_858),
    (-5, 0, -398_593.998_035_99),
    (-5, 11, -21.816_058_518_877),
    (-4, 0, 223_697.851_942_42),
    (-4, 1, -2_784.170_344_581_7),
    (-4, 11, 9.920_743_607_148),
    (-3, 0, -75_197.512_299_157),
    (-3, 1, 2_970.860_595_115_8),
    (-3, 11, -3.440_687_854_852_6),
    (-3, 12, 0.388_155_642_491_15),
    (-2, 0, 17_511.295_085_75),
    (-2, 1, -1_423.711_285_444_9),
    (-2, 6, 1.094_380_336_416_7),
    (-2, 10, 0.899_716_193_084_95),
    (-1, 0, -3_375.974_009_895_8),
    (-1, 1, 471.628_858_183_55),
    (-1, 5, -1.918_824_199_367_9),
    (-1, 8, 0.410_785_804_921_96),
    (-1, 9, -0.334_653_781_720_97),
    (0, 0, 1_387.003_477_750_5),
    (0, 1, -406.633_261_958_38),
    (0, 2, 41.727_347_159_61),
    (0, 4, 2.193_254_943_453_2),
    (0, 5, -1.032_005_000_907_7),
    (0, 6, 0.358_829_435_167_03),
    (0, 9, 5.251_145_372_606_6e-3),
    (1, 0, 12.838_916_450_705),
    (1, 1, -2.864_243_721_938_1),
    (1, 2, 0.569_126_836_648_55),
    (1, 3, -0.099_962_954_584_931),
    (1, 7, -3.263_203_777_845_9e-3),
    (1, 8, 2.332_092_257_672_3e-4),
    (2, 0, -0.153_348_098_574_5),
    (2, 1, 0.029_072_288_239_902),
    (2, 5, 3.753_470_274_116_7e-4),
    (3, 0, 1.729_669_170_241_1e-3),
    (3, 1, -3.855_605_084_450_4e-4),
    (3, 3, -3.501_771_229_260_8e-5),
    (4, 0, -1.456_639_363_149_2e-5),
    (4, 1, 5.642_085_726_726_9e-6),
    (5, 0, 4.128_615_007_460_5e-8),
    (5, 1, -2.068_467_111_882_4e-8),
    (5, 2, 1.640_939_367_472_5e-9),
];

static T_PS_2C: [(i32, i32, f64); 30] = [
    (-2, 0, 909.685_010_053_65),
    (-2, 1, 2_404.566_708_842),
    (-1, 0, -591.623_263_871_3),
    (0, 0, 541.454_041_280_74),
    (0, 1, -270.983_084_111_92),
    (0, 2, 979.765_250_979_26),
    (0, 3, -469.667_729_594_35),
    (1, 0, 14.399_274_604_723),
    (1, 1, -19.104_204_230_429),
    (1, 3, 5.329_916_711_197_1),
    (1, 4, -21.252_975_375_934),
    (2, 0, -0.311_473_344_137_6),
    (2, 1, 0.603_348_408_946_23),
    (2, 2, -0.042_764_839_702_509),
    (3, 0, 5.818_559_725_525_9e-3),
    (3, 1, -0.014_597_008_284_753),
    (3, 5, 5.663_117_563_102_7e-3),
    (4, 0, -7.615_586_458_457_7e-5),
    (4, 1, 2.244_034_291_933_2e-4),
    (4, 4, -1.256_109_501_341_3e-5),
    (5, 0, 6.332_313_266_093_4e-7),
    (5, 1, -2.054_198_967_537_5e-6),
    (5, 2, 3.640_537_039_008_2e-8),
    (6, 0, -2.975_989_778_921_5e-9),
    (6, 1, 1.013_661_852_976_3e-8),
    (7, 0, 5.992_571_969_235_1e-12),
    (7, 1, -2.067_787_010_516_4e-11),
    (7, 3, -2.087_427_818_188_6e-11),
    (7, 4, 1.016_216_682_508_9e-10),
    (7, 5, -1.642_982_828_134_7e-10),
];

/// Pressure above which the backward equations split into subregions 2b/2c, Pa.
const P_2A: f64 = 4e6;

/// Entropy separating subregions 2b and 2c, J/(kg·K).
const S_2BC: f64 = 5.85e3;

/// Subregions of the backward equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subregion {
    A,
    B,
    C,
}

/// Pressure on the 2b/2c boundary for enthalpy `h` (J/kg), Pa.
fn b2bc_p(h: f64) -> f64 {
    let h = h / 1e3;
    (0.905_842_785_147_23e3 - 0.679_557_863_992_41 * h + 0.128_090_027_301_36e-3 * h * h) * 1e6
}

/// Vapor, `273.15 K ≤ T ≤ 1073.15 K`, `0 < p ≤ 100 MPa`, bounded below by the
/// saturation line up to 623.15 K and by the B23 line above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region2;

impl Region2 {
    pub const T_MIN: f64 = 273.15;
    pub const T_MAX: f64 = 1073.15;
    pub const P_MAX: f64 = 100e6;

    fn subregion_ph(p: f64, h: f64) -> Subregion {
        if p <= P_2A {
            Subregion::A
        } else if p < b2bc_p(h) {
            Subregion::B
        } else {
            Subregion::C
        }
    }

    fn subregion_ps(p: f64, s: f64) -> Subregion {
        if p <= P_2A {
            Subregion::A
        } else if s >= S_2BC {
            Subregion::B
        } else {
            Subregion::C
        }
    }
}

impl SinglePhase for Region2 {
    const REGION: Region = Region::Vapor;

    fn p_in(&self, p: f64) -> bool {
        p > 0.0 && p <= Self::P_MAX
    }

    fn tp_in(&self, t: f64, p: f64) -> bool {
        if !(Self::T_MIN..=Self::T_MAX).contains(&t) || !self.p_in(p) {
            return false;
        }
        if t <= T_SPLIT {
            p <= saturation::pressure(t)
        } else {
            p <= Boundary23.p_t(t)
        }
    }

    fn t_edges(&self, p: f64) -> (f64, f64) {
        let lower = if p < SaturationCurve::P_MIN {
            Self::T_MIN
        } else if p <= P_SPLIT {
            saturation::temperature(p)
        } else {
            Boundary23.t_p(p)
        };
        (lower, Self::T_MAX)
    }

    fn reduced(&self, t: f64, p: f64) -> (f64, f64) {
        (p / 1e6, 540.0 / t)
    }

    fn gibbs(&self, pi: f64, tau: f64) -> Gibbs {
        let mut gibbs = Gibbs {
            gamma: pi.ln(),
            pi: 1.0 / pi,
            pipi: -1.0 / (pi * pi),
            ..Gibbs::default()
        };
        for &(j, n) in &IDEAL {
            gibbs.add_term(n, (pi, 0), (tau, j), 1.0);
        }
        for &(i, j, n) in &RESIDUAL {
            gibbs.add_term(n, (pi, i), (tau - 0.5, j), 1.0);
        }
        gibbs
    }

    fn t_ph(&self, p: f64, h: f64) -> f64 {
        let pi = p / 1e6;
        let eta = h / 2000e3;
        match Self::subregion_ph(p, h) {
            Subregion::A => T_PH_2A
                .iter()
                .map(|&(i, j, n)| n * pi.powi(i) * (eta - 2.1).powi(j))
                .sum(),
            Subregion::B => T_PH_2B
                .iter()
                .map(|&(i, j, n)| n * (pi - 2.0).powi(i) * (eta - 2.6).powi(j))
                .sum(),
            Subregion::C => T_PH_2C
                .iter()
                .map(|&(i, j, n)| n * (pi + 25.0).powi(i) * (eta - 1.8).powi(j))
                .sum(),
        }
    }

    fn t_ps(&self, p: f64, s: f64) -> f64 {
        let pi = p / 1e6;
        let s_kj = s / 1e3;
        match Self::subregion_ps(p, s) {
            Subregion::A => {
                let sigma = s_kj / 2.0;
                T_PS_2A
                    .iter()
                    .map(|&(i, j, n)| n * pi.powf(i) * (sigma - 2.0).powi(j))
                    .sum()
            }
            Subregion::B => {
                let sigma = s_kj / 0.7853;
                T_PS_2B
                    .iter()
                    .map(|&(i, j, n)| n * pi.powi(i) * (10.0 - sigma).powi(j))
                    .sum()
            }
            Subregion::C => {
                let sigma = s_kj / 2.9251;
                T_PS_2C
                    .iter()
                    .map(|&(i, j, n)| n * pi.powi(i) * (2.0 - sigma).powi(j))
                    .sum()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_reference_points() {
        let props = Region2.props_tp(300.0, 3.5e3);
        assert_relative_eq!(props.v, 0.394_913_866e2, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.254_991_145e7, max_relative = 1e-8);
        assert_relative_eq!(props.u, 0.241_169_160e7, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.852_238_967e4, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.191_300_162e4, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.427_920_172e3, max_relative = 1e-8);
        assert_eq!(props.region, Region::Vapor);

        let props = Region2.props_tp(700.0, 3.5e3);
        assert_relative_eq!(props.v, 0.923_015_898e2, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.333_568_375e7, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.101_749_996e5, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.208_141_274e4, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.644_289_068e3, max_relative = 1e-8);

        let props = Region2.props_tp(700.0, 30e6);
        assert_relative_eq!(props.v, 0.542_946_619e-2, max_relative = 1e-8);
        assert_relative_eq!(props.h, 0.263_149_474e7, max_relative = 1e-8);
        assert_relative_eq!(props.s, 0.517_540_298e4, max_relative = 1e-8);
        assert_relative_eq!(props.cp, 0.103_505_092e5, max_relative = 1e-8);
        assert_relative_eq!(props.w, 0.480_386_523e3, max_relative = 1e-8);
    }

    #[test]
    fn backward_temperature_from_enthalpy() {
        let cases = [
            (0.001e6, 3000e3, 0.534_433_241e3),
            (3e6, 3000e3, 0.575_373_370e3),
            (3e6, 4000e3, 0.101_077_577e4),
            (5e6, 3500e3, 0.801_299_102e3),
            (5e6, 4000e3, 0.101_531_583e4),
            (25e6, 3500e3, 0.875_279_054e3),
            (40e6, 2700e3, 0.743_056_411e3),
            (60e6, 2700e3, 0.791_137_067e3),
            (60e6, 3200e3, 0.882_756_860e3),
        ];
        for (p, h, t) in cases {
            assert_relative_eq!(Region2.t_ph(p, h), t, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_temperature_from_entropy() {
        let cases = [
            (0.1e6, 7.5e3, 0.399_517_097e3),
            (0.1e6, 8e3, 0.514_127_081e3),
            (2.5e6, 8e3, 0.103_984_917e4),
            (8e6, 6e3, 0.600_484_040e3),
            (8e6, 7.5e3, 0.106_495_556e4),
            (90e6, 6e3, 0.103_801_126e4),
            (20e6, 5.75e3, 0.697_992_849e3),
            (80e6, 5.25e3, 0.854_011_484e3),
            (80e6, 5.75e3, 0.949_017_998e3),
        ];
        for (p, s, t) in cases {
            assert_relative_eq!(Region2.t_ps(p, s), t, max_relative = 1e-8);
        }
    }

    #[test]
    fn subregions() {
        assert_eq!(Region2::subregion_ph(3e6, 3000e3), Subregion::A);
        assert_eq!(Region2::subregion_ph(5e6, 3500e3), Subregion::B);
        assert_eq!(Region2::subregion_ph(60e6, 2700e3), Subregion::C);
        assert_eq!(Region2::subregion_ps(8e6, 6e3), Subregion::B);
        assert_eq!(Region2::subregion_ps(20e6, 5.75e3), Subregion::C);
    }

    #[test]
    fn b2bc_reference_point() {
        assert_relative_eq!(b2bc_p(0.3516004323e7), 0.1e9, max_relative = 1e-8);
    }

    #[test]
    fn membership() {
        assert!(Region2.tp_in(700.0, 30e6));
        assert!(Region2.tp_in(300.0, 3.5e3));
        assert!(!Region2.tp_in(300.0, 3e6));
        assert!(!Region2.tp_in(650.0, 50e6));
        assert!(!Region2.tp_in(1100.0, 1e5));
        assert!(!Region2.tp_in(500.0, 0.0));
        assert!(!Region2.p_in(0.0));

        let h = Region2.props_tp(500.0, 1e5).h;
        assert!(Region2.ph_in(1e5, h));
        assert!(!Region2.ph_in(1e5, 500e3));
    }

    #[test]
    fn edges_follow_the_lower_boundary() {
        let (lower, upper) = Region2.t_edges(500.0);
        assert_relative_eq!(lower, 273.15);
        assert_relative_eq!(upper, 1073.15);

        let (lower, _) = Region2.t_edges(1e6);
        assert_relative_eq!(lower, 0.453_035_632e3, max_relative = 1e-8);

        let (lower, _) = Region2.t_edges(50e6);
        assert_relative_eq!(lower, Boundary23.t_p(50e6));
    }
}
