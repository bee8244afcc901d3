//! Boundary between Regions 2 and 3.

static N: [f64; 5] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
    0.572_544_598_627_46e3,
    0.139_188_397_788_70e2,
];

/// The B23 pressure-temperature relation, valid above 623.15 K.
///
/// No range checks are made; callers only use it on `T ∈ [623.15, 863.15] K`
/// and `p ∈ [16.529 MPa, 100 MPa]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary23;

impl Boundary23 {
    /// Boundary pressure at temperature `t` (K), Pa.
    #[must_use]
    pub fn p_t(&self, t: f64) -> f64 {
        1e6 * (N[0] + N[1] * t + N[2] * t * t)
    }

    /// Boundary temperature at pressure `p` (Pa), K.
    #[must_use]
    pub fn t_p(&self, p: f64) -> f64 {
        N[3] + ((p / 1e6 - N[4]) / N[2]).sqrt()
    }
}
