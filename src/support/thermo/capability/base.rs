/// Base trait for thermodynamic property models.
///
/// Every capability trait in this module extends `ThermoModel`, so a model
/// names its fluid type once and capabilities are added as separate impls.
pub trait ThermoModel {
    type Fluid;
}
