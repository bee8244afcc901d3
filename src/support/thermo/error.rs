use thiserror::Error;

/// Errors reported by the typed property capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property has no value at the given state.
    ///
    /// Heat capacities and transport properties of wet steam fall in here.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The state lies outside the range covered by the model.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The state's fields contradict each other, such as a vapor quality
    /// paired with a temperature off the saturation line.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
