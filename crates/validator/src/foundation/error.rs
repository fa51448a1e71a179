//! Error types for validation failures
//!
//! Every validator in this crate reports failure through one structured
//! type, [`ValidationError`]. Whether an input was malformed (wrong shape),
//! semantically invalid (unknown region, future birthdate) or failed an
//! integrity check (check-digit mismatch) is visible only in the error
//! `code` — the control flow offered to callers is uniformly pass/fail.
//!
//! All string fields use `Cow<'static, str>` so that the common case of
//! static error codes and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("id_format", "Not a 15- or 18-character identity number")
///     .with_param("length", "12");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "id_format", "date_grammar", "key_bits_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Optional field path for nested object validation.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs backing the message (typically 0-3 entries).
    ///
    /// Example: `[("expected", "2048"), ("actual", "1024")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested errors, used when a composite check fails on several fronts.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds nested validation errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Flattens this error and all nested errors into one list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        for error in &self.nested {
            write!(f, "\n  - {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "empty_input" error — the shared guard for validators
    /// that reject empty text outright.
    pub fn empty_input(what: impl Into<Cow<'static, str>>) -> Self {
        Self::new("empty_input", "Input cannot be empty").with_param("expected", what)
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, for callers that run several
/// validators and want every failure rather than the first.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a single error with the collected errors nested.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("validation_errors", message).with_nested(self.errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("id_format", "Bad identity number");
        assert_eq!(error.code, "id_format");
        assert_eq!(error.message, "Bad identity number");
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::new("key_bits_mismatch", "Wrong modulus size")
            .with_param("expected", "2048")
            .with_param("actual", "1024");

        assert_eq!(error.param("expected"), Some("2048"));
        assert_eq!(error.param("actual"), Some("1024"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::new("date_grammar", "Bad date").with_field("birthdate");
        assert_eq!(error.field.as_deref(), Some("birthdate"));
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("empty_input", "Input cannot be empty");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn flatten_nested() {
        let error = ValidationError::new("or_failed", "No branch passed").with_nested(vec![
            ValidationError::new("left", "left branch"),
            ValidationError::new("right", "right branch"),
        ]);

        assert!(error.has_nested());
        assert_eq!(error.flatten().len(), 3);
    }

    #[test]
    fn collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("first", "First error"));
        errors.add(ValidationError::new("second", "Second error"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());

        let single = errors.into_single_error("two checks failed");
        assert_eq!(single.nested.len(), 2);
    }

    #[test]
    fn display_includes_params() {
        let error = ValidationError::new("id_unknown_region", "Unknown region prefix")
            .with_param("prefix", "99");
        let text = error.to_string();
        assert!(text.contains("id_unknown_region"));
        assert!(text.contains("prefix=99"));
    }
}
