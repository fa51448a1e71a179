//! Value introspection: emptiness and nilness for heterogeneous values
//!
//! Other validators routinely need to ask "is there anything here?" about
//! a value whose kind is only known at runtime. This module answers that
//! with two total predicates, [`is_empty`] and [`is_nil`], built on a
//! closed sum type:
//!
//! - [`ValueView`] enumerates every shape the predicates understand —
//!   text, sequence, mapping, booleans, the numeric families,
//!   pointer-likes, and an opaque composite arm. [`ValueView::Absent`] is
//!   the universal absence marker.
//! - [`Inspect`] is the adapter layer: it classifies a concrete value
//!   into a `ValueView`. Implementations cover the std types and
//!   `serde_json::Value` (the crate's dynamically-typed surface); the
//!   pure predicate logic never touches a concrete type.
//!
//! Both predicates are pure and infallible: there is no input, including
//! the absence marker itself, for which they error or panic.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch_validator::introspect::{is_empty, is_nil};
//!
//! assert!(is_empty(""));
//! assert!(!is_empty("a"));
//! assert!(is_empty(&0_i64));
//! assert!(is_empty(&Vec::<u8>::new()));
//! assert!(is_nil(&None::<String>));
//! assert!(!is_nil(&0_i64));
//! ```

mod adapt;

use serde::Serialize;

// ============================================================================
// SHAPES AND VIEWS
// ============================================================================

/// The closed set of shapes the introspection predicates dispatch over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    /// The universal absence marker.
    Absent,
    /// Text of any flavor.
    Text,
    /// An ordered sequence (slice, vector, array, JSON array).
    Sequence,
    /// An unordered mapping (hash map, tree map, JSON object).
    Mapping,
    /// A boolean.
    Boolean,
    /// A signed integer of any width.
    Signed,
    /// An unsigned integer of any width.
    Unsigned,
    /// A floating-point number.
    Float,
    /// A pointer-like value with a nullable referent.
    Pointer,
    /// Any other composite value.
    Composite,
}

/// A classified view of a value, carrying exactly the data the
/// predicates need and nothing else.
///
/// `Sequence(None)` and `Mapping(None)` model a container reference with
/// no referent (distinct from a present-but-zero-length container), and
/// `Pointer { null: true }` a dangling pointer-like. The adapter layer
/// produces whichever of these the source type can express.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueView<'a> {
    /// The universal absence marker.
    Absent,
    /// Borrowed text.
    Text(&'a str),
    /// A sequence and its length, or `None` for a nil sequence.
    Sequence(Option<usize>),
    /// A mapping and its entry count, or `None` for a nil mapping.
    Mapping(Option<usize>),
    /// A boolean value.
    Boolean(bool),
    /// A signed integer, widened.
    Signed(i64),
    /// An unsigned integer, widened.
    Unsigned(u64),
    /// A floating-point number, widened.
    Float(f64),
    /// A pointer-like value; `null` reports whether the referent exists.
    Pointer {
        /// True when the pointer has no referent.
        null: bool,
    },
    /// Any other composite; `zero` reports whether the value equals its
    /// type's zero value.
    Composite {
        /// True when the value deep-equals its type's zero value.
        zero: bool,
    },
}

impl ValueView<'_> {
    /// The shape tag of this view.
    #[must_use]
    pub fn shape(&self) -> ValueShape {
        match self {
            ValueView::Absent => ValueShape::Absent,
            ValueView::Text(_) => ValueShape::Text,
            ValueView::Sequence(_) => ValueShape::Sequence,
            ValueView::Mapping(_) => ValueShape::Mapping,
            ValueView::Boolean(_) => ValueShape::Boolean,
            ValueView::Signed(_) => ValueShape::Signed,
            ValueView::Unsigned(_) => ValueShape::Unsigned,
            ValueView::Float(_) => ValueShape::Float,
            ValueView::Pointer { .. } => ValueShape::Pointer,
            ValueView::Composite { .. } => ValueShape::Composite,
        }
    }

    /// True if the viewed value is nil: the absence marker itself, or a
    /// pointer-like / sequence / mapping whose referent is missing.
    ///
    /// Value kinds (text, numbers, booleans, composites) are never nil,
    /// whatever they contain.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            ValueView::Absent
                | ValueView::Sequence(None)
                | ValueView::Mapping(None)
                | ValueView::Pointer { null: true }
        )
    }

    /// True if the viewed value is empty for its shape: zero-length text
    /// or containers (nil containers included), `false`, numeric zero, a
    /// null pointer-like, or a composite equal to its zero value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ValueView::Absent => true,
            ValueView::Text(text) => text.is_empty(),
            ValueView::Sequence(len) | ValueView::Mapping(len) => len.is_none_or(|n| n == 0),
            ValueView::Boolean(b) => !b,
            ValueView::Signed(i) => *i == 0,
            ValueView::Unsigned(u) => *u == 0,
            ValueView::Float(f) => *f == 0.0,
            ValueView::Pointer { null } => *null,
            ValueView::Composite { zero } => *zero,
        }
    }
}

// ============================================================================
// ADAPTER TRAIT
// ============================================================================

/// Classifies a value into a [`ValueView`].
///
/// This is the boundary between concrete types and the pure predicate
/// logic. Implementations exist for the std scalar, text, and container
/// types, for `Option<T>` (pointer-like), and for `serde_json::Value`.
/// Implement it for your own types to opt them into [`is_empty`] /
/// [`is_nil`]; the [`composite`] helper covers the common
/// `Default + PartialEq` case.
pub trait Inspect {
    /// Produces the classified view of `self`.
    fn view(&self) -> ValueView<'_>;
}

/// Views any `Default + PartialEq` type as a composite, empty iff it
/// equals its type's zero value.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::introspect::composite;
///
/// #[derive(Default, PartialEq)]
/// struct Settings { retries: u8 }
///
/// assert!(composite(&Settings::default()).is_empty());
/// assert!(!composite(&Settings { retries: 3 }).is_empty());
/// ```
#[must_use]
pub fn composite<T: Default + PartialEq>(value: &T) -> ValueView<'static> {
    ValueView::Composite {
        zero: *value == T::default(),
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

/// True if `value` is empty for its shape.
///
/// Total: never errors, never panics, accepts the absence marker.
#[must_use]
pub fn is_empty<T: Inspect + ?Sized>(value: &T) -> bool {
    value.view().is_empty()
}

/// True if `value` is nil: absent, or a reference kind with no referent.
///
/// Total: never errors, never panics, accepts the absence marker.
#[must_use]
pub fn is_nil<T: Inspect + ?Sized>(value: &T) -> bool {
    value.view().is_nil()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_emptiness() {
        assert!(is_empty(""));
        assert!(!is_empty("a"));
    }

    #[test]
    fn numeric_emptiness() {
        assert!(is_empty(&0_i64));
        assert!(is_empty(&0_u32));
        assert!(is_empty(&0.0_f64));
        assert!(!is_empty(&-1_i32));
        assert!(!is_empty(&f64::NAN)); // NaN is not zero
    }

    #[test]
    fn container_emptiness() {
        assert!(is_empty(&Vec::<u8>::new()));
        assert!(!is_empty(&vec![1, 2, 3]));
        assert!(is_empty(&std::collections::HashMap::<String, u8>::new()));
    }

    #[test]
    fn boolean_emptiness() {
        assert!(is_empty(&false));
        assert!(!is_empty(&true));
    }

    #[test]
    fn nilness_is_about_reference_kinds() {
        assert!(is_nil(&None::<String>));
        assert!(!is_nil(&Some(String::new())));
        assert!(!is_nil(&0_i64));
        assert!(!is_nil(""));
        assert!(!is_nil(&false));
    }

    #[test]
    fn nil_containers_are_both_nil_and_empty() {
        let view = ValueView::Sequence(None);
        assert!(view.is_nil());
        assert!(view.is_empty());

        let view = ValueView::Mapping(None);
        assert!(view.is_nil());
        assert!(view.is_empty());
    }

    #[test]
    fn sized_containers_are_not_nil() {
        let view = ValueView::Sequence(Some(0));
        assert!(!view.is_nil());
        assert!(view.is_empty());
    }

    #[test]
    fn composite_zero_comparison() {
        #[derive(Default, PartialEq)]
        struct Config {
            retries: u8,
            label: String,
        }

        assert!(composite(&Config::default()).is_empty());
        assert!(
            !composite(&Config {
                retries: 1,
                label: String::new(),
            })
            .is_empty()
        );
        assert!(!composite(&Config::default()).is_nil());
    }

    #[test]
    fn shape_tags() {
        assert_eq!(ValueView::Absent.shape(), ValueShape::Absent);
        assert_eq!(ValueView::Text("x").shape(), ValueShape::Text);
        assert_eq!(ValueView::Pointer { null: false }.shape(), ValueShape::Pointer);
    }
}
