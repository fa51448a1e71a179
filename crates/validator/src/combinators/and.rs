//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors come from the first failing validator; the right validator is
/// not consulted once the left has failed.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// let v = not_empty().and(numeric_only());
/// assert!(v.validate("12345").is_ok());
/// assert!(v.validate("").is_err());
/// assert!(v.validate("12a45").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Combines any number of validators with logical AND.
///
/// Useful when the validator count is only known at runtime. Validation
/// stops at the first failure.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

/// Creates an [`AndAll`] combinator from a vector of validators.
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}
