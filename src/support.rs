//! Supporting utilities used by the steam models.

pub mod constraint;
pub mod thermo;
pub mod units;
