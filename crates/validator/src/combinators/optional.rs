//! OPTIONAL combinator - lifting a validator over `Option`

use crate::foundation::{Validate, ValidationError};

/// Lifts a validator over `Option`: `None` passes, `Some(value)` is
/// validated with the inner validator.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// // An absent timestamp is fine; a present one must not be zero
/// let v = optional(non_zero_timestamp);
/// assert!(v.validate(&None).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
    T: Sized,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V>(inner: V) -> Optional<V>
where
    V: Validate,
{
    Optional::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonZero;

    impl Validate for NonZero {
        type Input = i64;
        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input != 0 {
                Ok(())
            } else {
                Err(ValidationError::new("non_zero", "must not be zero"))
            }
        }
    }

    #[test]
    fn none_passes() {
        assert!(optional(NonZero).validate(&None).is_ok());
    }

    #[test]
    fn some_is_validated() {
        let v = optional(NonZero);
        assert!(v.validate(&Some(7)).is_ok());
        assert!(v.validate(&Some(0)).is_err());
    }
}
