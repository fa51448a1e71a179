//! Prelude module for convenient imports.
//!
//! A single `use vouch_validator::prelude::*;` brings in the traits, the
//! error types, every built-in validator, and the combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch_validator::prelude::*;
//!
//! let id = not_empty().and(resident_id());
//! let key = rsa_public_key_bits(2048).or(rsa_public_key_bits(4096));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: The built-in catalog
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, Not, Optional, Or, When, and, and_all, not, optional, or, when,
};

// ============================================================================
// INTROSPECTION: Emptiness and nilness predicates
// ============================================================================

pub use crate::introspect::{Inspect, ValueShape, ValueView, is_empty, is_nil};
