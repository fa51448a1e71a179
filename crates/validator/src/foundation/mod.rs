//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! Validators are generic over their input type (`type Input: ?Sized`),
//! compose through logical combinators, and report failures through one
//! structured error type:
//!
//! ```rust,ignore
//! use vouch_validator::prelude::*;
//!
//! let id = not_empty().and(resident_id());
//! match id.validate("110105194910010015") {
//!     Ok(()) => { /* canonical-form input */ }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// Convenience for one-off validations where building a pipeline is not
/// worth it.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

/// Validates a value with multiple validators; all must pass.
///
/// Unlike `and`-chaining, this does not short-circuit — every failure is
/// collected and returned.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Validates a value with multiple validators; at least one must pass.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
