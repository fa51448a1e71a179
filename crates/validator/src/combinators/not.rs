//! NOT combinator - logical negation of a validator

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails and
/// vice versa.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// let v = numeric_only().not();
/// assert!(v.validate("abc").is_ok());
/// assert!(v.validate("123").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Inner validator passed but was expected to fail",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty;

    impl Validate for Empty {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::new("empty", "not empty"))
            }
        }
    }

    #[test]
    fn inverts_failure() {
        assert!(not(Empty).validate("text").is_ok());
    }

    #[test]
    fn inverts_success() {
        assert_eq!(not(Empty).validate("").unwrap_err().code, "not_failed");
    }

    #[test]
    fn double_negation() {
        assert!(not(not(Empty)).validate("").is_ok());
    }
}
