//! Type-level numeric constraints.
//!
//! A [`Constrained<T, C>`] value has been checked against the marker `C` once,
//! at construction, and can be passed around without re-validating it.
//!
//! Only the closed unit interval is needed here: it carries the vapor quality
//! of wet steam (see [`Quality`](crate::support::thermo::model::if97::Quality)).
//!
//! # Extending
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a new
//! zero-sized marker type.

mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_steam::support::constraint::{Constrained, UnitInterval};
///
/// let x = Constrained::<_, UnitInterval>::new(0.85).unwrap();
/// assert_eq!(x.into_inner(), 0.85);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
