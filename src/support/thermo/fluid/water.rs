/// Canonical identifier for ordinary water substance.
///
/// Used as the fluid of [`If97`](crate::support::thermo::model::If97) states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;
