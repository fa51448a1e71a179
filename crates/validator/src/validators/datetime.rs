//! Flexible date normalization
//!
//! Turns partial, delimiter-ambiguous date/time text into a canonical
//! `YYYY-MM-DD HH:MM:SS` string and a signed Unix timestamp. The grammar
//! accepts six granularities (year down to full seconds) with `-` or `/`
//! as the date separator; everything the text leaves out is completed
//! from the epoch reference, so `"2024-03"` means midnight on March 1st.
//!
//! Timestamps before 1970 are negative. That is a valid result, not an
//! error: `"1969-12-31"` normalizes to `-86400`.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDateTime;

use crate::foundation::{Validate, ValidationError};

/// One grammar covers every accepted granularity: year, year-month,
/// year-month-day, then optional hour, minute, second.
static DATE_GRAMMAR: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\d{4}(-\d{2}(-\d{2}( \d{2}(:\d{2}(:\d{2})?)?)?)?)?$")
        .expect("date grammar must compile")
});

/// Completion source for inputs shorter than the full 19-character form.
/// Missing fields are taken at the matching character offsets, which is
/// why partial dates default to the first of the month and midnight.
const REFERENCE: &str = "1970-01-01 00:00:00";

const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// NORMALIZED DATE
// ============================================================================

/// The result of normalizing flexible date text: the canonical 19-char
/// form and its derived Unix timestamp.
///
/// Only ever produced for grammatically valid input that survives the
/// calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NormalizedDate {
    canonical: String,
    timestamp: i64,
}

impl NormalizedDate {
    /// The canonical `YYYY-MM-DD HH:MM:SS` text.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Seconds since the Unix epoch; negative for dates before 1970.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

// ============================================================================
// FLEXIBLE DATE VALIDATOR
// ============================================================================

/// Parses and normalizes flexible date/time text.
///
/// Accepted shapes (`/` may replace `-` in any of them):
///
/// | input                   | canonical form          |
/// |-------------------------|-------------------------|
/// | `2024`                  | `2024-01-01 00:00:00`   |
/// | `2024-03`               | `2024-03-01 00:00:00`   |
/// | `2024-03-05`            | `2024-03-05 00:00:00`   |
/// | `2024-03-05 10`         | `2024-03-05 10:00:00`   |
/// | `2024-03-05 10:30`      | `2024-03-05 10:30:00`   |
/// | `2024-03-05 10:30:59`   | `2024-03-05 10:30:59`   |
///
/// Timestamps are derived in UTC so results do not depend on the host
/// timezone.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::validators::flexible_date;
///
/// let date = flexible_date().normalize("2024/03/05 10:30")?;
/// assert_eq!(date.canonical(), "2024-03-05 10:30:00");
///
/// // Pre-epoch dates are fine
/// assert!(flexible_date().normalize("1969-12-31")?.timestamp() < 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlexibleDate;

impl FlexibleDate {
    /// Creates a new `FlexibleDate` normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalizes date text into its canonical form and timestamp.
    pub fn normalize(&self, input: &str) -> Result<NormalizedDate, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::empty_input("date"));
        }

        let text: Cow<'_, str> = if input.contains('/') {
            Cow::Owned(input.replace('/', "-"))
        } else {
            Cow::Borrowed(input)
        };

        if !DATE_GRAMMAR.is_match(&text) {
            return Err(ValidationError::new(
                "date_grammar",
                "Date must be YYYY[-MM[-DD[ HH[:MM[:SS]]]]]",
            )
            .with_param("input", input.to_string()));
        }

        // The grammar only admits prefixes of the canonical form, so the
        // missing suffix can be taken from the reference verbatim.
        let canonical = if text.len() < REFERENCE.len() {
            format!("{}{}", text, &REFERENCE[text.len()..])
        } else {
            text.into_owned()
        };

        let parsed = NaiveDateTime::parse_from_str(&canonical, CANONICAL_FORMAT).map_err(|_| {
            ValidationError::new("date_invalid", "No such calendar date")
                .with_param("canonical", canonical.clone())
        })?;

        Ok(NormalizedDate {
            timestamp: parsed.and_utc().timestamp(),
            canonical,
        })
    }
}

impl Validate for FlexibleDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.normalize(input).map(|_| ())
    }
}

/// Creates a new [`FlexibleDate`] normalizer.
#[must_use]
pub fn flexible_date() -> FlexibleDate {
    FlexibleDate::new()
}

// ============================================================================
// TESTS
// ============================================================================
