//! Public Twine models.
//!
//! Models are the primary public interface of this crate. Each one is a thin
//! [`twine_core::Model`] adapter over the IF97 property code in
//! [`support::thermo::model::if97`](crate::support::thermo::model::if97),
//! which does the actual work. One property core can sit behind several
//! adapters, each exposing a different input and output shape.

pub mod steam;
