//! WHEN combinator - conditional validation

use crate::foundation::{Validate, ValidationError};

/// Runs the inner validator only when a predicate holds for the input;
/// otherwise the input passes untouched.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// // Only full-length identity numbers carry a check digit to verify
/// let v = resident_id().when(|s: &str| !s.is_empty());
/// assert!(v.validate("").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) inner: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<V, C>(inner: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(inner, condition)
}
