//! # vouch-validator
//!
//! Validation and classification of loosely-typed input before it enters
//! application logic.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vouch_validator::prelude::*;
//!
//! // Canonicalize an identity number (legacy 15-digit input is upgraded)
//! let canonical = resident_id().canonicalize("110105491001001")?;
//!
//! // Normalize partial date text into a signed timestamp
//! let date = flexible_date().normalize("1969-12-31")?;
//! assert!(date.timestamp() < 0);
//!
//! // Check an RSA public key's modulus size
//! rsa_public_key_bits(2048).validate(pem_text)?;
//!
//! // Ask about emptiness without knowing the value's kind
//! use vouch_validator::introspect::is_empty;
//! assert!(is_empty(&serde_json::json!([])));
//! ```
//!
//! ## Structure
//!
//! - [`foundation`] — the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`combinators`] — `and` / `or` / `not` / `when` / `optional`
//!   composition
//! - [`validators`] — the catalog: dates, identity numbers, public keys,
//!   pattern checks
//! - [`introspect`] — emptiness/nilness over heterogeneous values
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or
//! implement [`Validate`](foundation::Validate) manually for staged ones.
//!
//! All validators are pure, synchronous, and safe to share across
//! threads; the only process-wide state is the immutable region table.

// ValidationError is the fundamental error type for all validators —
// boxing it would add indirection to every validation call for no
// practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
pub mod introspect;
mod macros;
pub mod prelude;
pub mod validators;
