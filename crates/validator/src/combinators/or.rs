//! OR combinator - logical disjunction of validators
//!
//! At least one validator must pass for the combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Short-circuits on the first success. When both branches fail, the
/// returned error nests both branch errors so callers can see why
/// neither alternative applied.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// // Accept either spelling of a key container
/// let v = rsa_public_key_bits(2048).or(rsa_public_key_bits(4096));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_err) => Err(ValidationError::new(
                "or_failed",
                "No alternative validator passed",
            )
            .with_nested(vec![left_err, right_err])),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
