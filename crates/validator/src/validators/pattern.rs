//! String pattern validators
//!
//! The pattern-matching seam of the catalog: [`MatchesRegex`] wraps an
//! arbitrary compiled pattern, and a handful of character-class predicates
//! cover the checks other validators lean on. Heavier format families
//! (email, IP, hashes, colors) are deliberately not part of this crate.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is non-empty.
    ///
    /// The guard most other string validators apply first.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::empty_input("text") }
    fn not_empty();
}

crate::validator! {
    /// Validates that a string is entirely ASCII letters (and non-empty).
    pub Letters for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic()) }
    error(input) { ValidationError::new("letters", "String must contain only letters") }
    fn letters();
}

crate::validator! {
    /// Validates that a string is entirely ASCII digits (and non-empty).
    pub NumericOnly for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("numeric_only", "String must contain only digits") }
    fn numeric_only();
}

crate::validator! {
    /// Validates that no letter in the string is lowercase.
    ///
    /// Non-letter characters are ignored, so `"ID-42"` passes.
    pub Uppercase for str;
    rule(input) {
        !input.is_empty() && input.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
    }
    error(input) { ValidationError::new("uppercase", "String must be uppercase") }
    fn uppercase();
}

crate::validator! {
    /// Validates that no letter in the string is uppercase.
    pub Lowercase for str;
    rule(input) {
        !input.is_empty() && input.chars().all(|c| !c.is_alphabetic() || c.is_lowercase())
    }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn lowercase();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Construction compiles the pattern and can fail; validation cannot.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

// ============================================================================
// TESTS
// ============================================================================
