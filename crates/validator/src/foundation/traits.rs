//! Core traits for the validation system
//!
//! [`Validate`] is the trait every validator implements; [`ValidateExt`]
//! adds the combinator methods and is blanket-implemented for all of them.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over their input type, so composition is checked
/// at compile time. All validators return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::foundation::{Validate, ValidationError};
///
/// struct AllDigits;
///
/// impl Validate for AllDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("all_digits", "Expected only digits"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` types like `str` and `[T]` to validate borrowed data
    /// without forcing an allocation on the caller.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if validation succeeds, `Err(ValidationError)`
    /// otherwise. Validators never panic on malformed input.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// let id = not_empty().and(resident_id());
/// assert!(id.validate("110105194910010015").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both must pass; validation short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one must pass; validation short-circuits on the first
    /// success. If both fail, the error nests both branch errors.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes validation conditional: the inner validator only runs when
    /// `condition` returns `true`, otherwise the input passes untouched.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Lifts the validator over `Option`: `None` passes, `Some(value)`
    /// is validated.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
