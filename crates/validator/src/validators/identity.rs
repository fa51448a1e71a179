//! Resident identity-number validation
//!
//! Validates 18-character resident identity numbers and upgrades the
//! legacy 15-digit form to it. Canonical layout:
//!
//! ```text
//! RRRRRR YYYYMMDD SSS C
//! region birthdate seq check
//! ```
//!
//! The legacy form omits the century and the check digit. Upgrading
//! infers the century from the sequence field (the reserved centenarian
//! sequences 996-999 mark a birth in the 1800s) and appends a freshly
//! computed check digit. Validation and upgrade share one check-digit
//! function; it is never computed two different ways.

use std::sync::LazyLock;

use chrono::Utc;

use crate::foundation::{Validate, ValidationError};
use crate::validators::datetime::FlexibleDate;
use crate::validators::region::RegionTable;

/// 15 digits, or 17 digits with a trailing digit or X check character.
static ID_FORMAT: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^(\d{15}|\d{17}[0-9Xx])$").expect("id format must compile"));

/// Positional weights for the check digit: `2^(18-i) mod 11` for the
/// 1-indexed position `i`, per the national standard.
const CHECK_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by the weighted sum mod 11.
const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Sequence values reserved for people born in the 1800s.
const CENTENARIAN_SEQUENCES: [&str; 4] = ["996", "997", "998", "999"];

// ============================================================================
// RESIDENT ID VALIDATOR
// ============================================================================

/// Validates resident identity numbers and canonicalizes them to the
/// 18-character form.
///
/// Accepts both the current 18-character form (check character may be
/// lowercase `x`) and the legacy 15-digit form, which is upgraded —
/// legacy input is never returned as-is. Validation runs these stages
/// in order:
///
/// 1. format pattern (15 digits, or 17 digits + check char)
/// 2. region-prefix lookup against a [`RegionTable`]
/// 3. legacy upgrade (century inference + check digit) where needed
/// 4. embedded birthdate must parse and lie strictly in the past
/// 5. check-digit verification for input that arrived full-length
///
/// Every failure is reported as an error with an empty canonical result;
/// no partially-upgraded value ever escapes.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::validators::resident_id;
///
/// let id = resident_id();
///
/// // Canonical input comes back unchanged
/// assert_eq!(id.canonicalize("110105194910010015").unwrap(), "110105194910010015");
///
/// // Legacy input is upgraded
/// assert_eq!(id.canonicalize("110105491001001").unwrap(), "110105194910010015");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResidentId {
    regions: &'static RegionTable,
}

impl ResidentId {
    /// Creates a validator backed by the built-in region table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: RegionTable::builtin(),
        }
    }

    /// Creates a validator backed by a caller-supplied region table.
    #[must_use]
    pub fn with_regions(regions: &'static RegionTable) -> Self {
        Self { regions }
    }

    /// Computes the check character for a 17-digit prefix.
    ///
    /// Returns `None` unless the input is exactly 17 ASCII digits. This
    /// is a pure function: the same prefix always yields the same
    /// character, whether it is being generated for an upgraded legacy
    /// number or verified against a supplied one.
    #[must_use]
    pub fn check_digit(seventeen: &str) -> Option<char> {
        if seventeen.len() != 17 || !seventeen.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let sum: u32 = seventeen
            .bytes()
            .zip(CHECK_WEIGHTS)
            .map(|(b, w)| u32::from(b - b'0') * w)
            .sum();

        Some(CHECK_CHARS[(sum % 11) as usize])
    }

    /// Validates `input` and returns its canonical 18-character form.
    pub fn canonicalize(&self, input: &str) -> Result<String, ValidationError> {
        if input.is_empty() || !ID_FORMAT.is_match(input) {
            return Err(ValidationError::new(
                "id_format",
                "Identity number must be 15 digits or 17 digits plus a check character",
            ));
        }

        // Stage 2: the issuing region must exist.
        let prefix = &input[..2];
        if !self.regions.contains(prefix) {
            return Err(ValidationError::new(
                "id_unknown_region",
                "Identity number names an unknown region",
            )
            .with_param("prefix", prefix.to_string()));
        }

        // Stage 3: branch on the input generation. Both branches leave
        // `canonical` holding an upper-case 18-character candidate.
        let legacy = input.len() == 15;
        let canonical = if legacy {
            self.upgrade_legacy(input)?
        } else {
            input.to_ascii_uppercase()
        };

        // Stage 4: the embedded birthdate must be a real calendar date
        // strictly in the past.
        let birthdate = format!(
            "{}-{}-{}",
            &canonical[6..10],
            &canonical[10..12],
            &canonical[12..14]
        );
        let parsed = FlexibleDate::new().normalize(&birthdate).map_err(|_| {
            ValidationError::new("id_birthdate", "Identity number embeds an invalid birthdate")
                .with_param("birthdate", birthdate.clone())
        })?;
        if parsed.timestamp() >= Utc::now().timestamp() {
            return Err(ValidationError::new(
                "id_future_birthdate",
                "Identity number embeds a birthdate in the future",
            )
            .with_param("birthdate", birthdate));
        }

        // Stage 5: input that arrived full-length must carry the right
        // check character. (An upgraded number carries the one computed
        // moments ago; re-verifying it would be a tautology.)
        if !legacy {
            let expected = Self::check_digit(&canonical[..17]).ok_or_else(|| {
                ValidationError::new("id_format", "Identity number prefix is not numeric")
            })?;
            if canonical.as_bytes()[17] != expected as u8 {
                return Err(ValidationError::new(
                    "id_check_digit",
                    "Identity number check character does not match",
                )
                .with_param("expected", expected.to_string()));
            }
        }

        Ok(canonical)
    }

    /// Upgrades a 15-digit legacy number to the 18-character form.
    fn upgrade_legacy(&self, input: &str) -> Result<String, ValidationError> {
        let sequence = &input[12..15];
        let century = if CENTENARIAN_SEQUENCES.contains(&sequence) {
            "18"
        } else {
            "19"
        };
        tracing::debug!(century, sequence, "upgrading legacy identity number");

        let mut upgraded = String::with_capacity(18);
        upgraded.push_str(&input[..6]);
        upgraded.push_str(century);
        upgraded.push_str(&input[6..]);

        let check = Self::check_digit(&upgraded).ok_or_else(|| {
            ValidationError::new("id_format", "Identity number prefix is not numeric")
        })?;
        upgraded.push(check);
        Ok(upgraded)
    }
}

impl Default for ResidentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ResidentId {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.canonicalize(input).map(|_| ())
    }
}

/// Creates a [`ResidentId`] validator backed by the built-in region table.
#[must_use]
pub fn resident_id() -> ResidentId {
    ResidentId::new()
}

// ============================================================================
// TESTS
// ============================================================================
