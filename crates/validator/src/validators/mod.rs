//! Built-in validators
//!
//! The catalog proper. Each module holds one validator family:
//!
//! - **Pattern**: [`MatchesRegex`] and the small character-class checks
//! - **Dates**: [`FlexibleDate`] — flexible date text to canonical
//!   timestamp
//! - **Identity**: [`ResidentId`] — identity-number validation and
//!   legacy upgrade, backed by [`RegionTable`]
//! - **Keys**: [`RsaPublicKeyBits`] — RSA public-key size check
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch_validator::prelude::*;
//!
//! let id = resident_id();
//! let canonical = id.canonicalize("110105491001001")?;
//!
//! let date = flexible_date().normalize("2024/03/05")?;
//! assert!(date.timestamp() > 0);
//! ```

pub mod datetime;
pub mod identity;
pub mod pattern;
pub mod public_key;
pub mod region;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use datetime::{FlexibleDate, NormalizedDate, flexible_date};

pub use identity::{ResidentId, resident_id};

pub use pattern::{
    Letters, Lowercase, MatchesRegex, NotEmpty, NumericOnly, Uppercase, letters, lowercase,
    matches_regex, not_empty, numeric_only, uppercase,
};

pub use public_key::{RsaPublicKeyBits, rsa_public_key_bits};

pub use region::RegionTable;
