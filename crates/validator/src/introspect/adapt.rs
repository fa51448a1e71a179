//! Adapter implementations classifying concrete types into [`ValueView`]
//!
//! Everything here is mechanical: each implementation picks the arm of
//! [`ValueView`] that matches the type's shape and hands over a length,
//! a widened number, or a null flag. The predicates themselves live in
//! the parent module and never see a concrete type.

use std::collections::{BTreeMap, HashMap};

use super::{Inspect, ValueView};

// ============================================================================
// TEXT
// ============================================================================

impl Inspect for str {
    fn view(&self) -> ValueView<'_> {
        ValueView::Text(self)
    }
}

impl Inspect for String {
    fn view(&self) -> ValueView<'_> {
        ValueView::Text(self)
    }
}

// ============================================================================
// SEQUENCES AND MAPPINGS
// ============================================================================

impl<T> Inspect for [T] {
    fn view(&self) -> ValueView<'_> {
        ValueView::Sequence(Some(self.len()))
    }
}

impl<T> Inspect for Vec<T> {
    fn view(&self) -> ValueView<'_> {
        ValueView::Sequence(Some(self.len()))
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn view(&self) -> ValueView<'_> {
        ValueView::Sequence(Some(N))
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn view(&self) -> ValueView<'_> {
        ValueView::Mapping(Some(self.len()))
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn view(&self) -> ValueView<'_> {
        ValueView::Mapping(Some(self.len()))
    }
}

// ============================================================================
// SCALARS
// ============================================================================

impl Inspect for bool {
    fn view(&self) -> ValueView<'_> {
        ValueView::Boolean(*self)
    }
}

macro_rules! inspect_signed {
    ($($ty:ty),+) => {
        $(impl Inspect for $ty {
            fn view(&self) -> ValueView<'_> {
                ValueView::Signed(i64::from(*self))
            }
        })+
    };
}

macro_rules! inspect_unsigned {
    ($($ty:ty),+) => {
        $(impl Inspect for $ty {
            fn view(&self) -> ValueView<'_> {
                ValueView::Unsigned(u64::from(*self))
            }
        })+
    };
}

inspect_signed!(i8, i16, i32, i64);
inspect_unsigned!(u8, u16, u32, u64);

impl Inspect for isize {
    fn view(&self) -> ValueView<'_> {
        ValueView::Signed(*self as i64)
    }
}

impl Inspect for usize {
    fn view(&self) -> ValueView<'_> {
        ValueView::Unsigned(*self as u64)
    }
}

impl Inspect for f32 {
    fn view(&self) -> ValueView<'_> {
        ValueView::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn view(&self) -> ValueView<'_> {
        ValueView::Float(*self)
    }
}

// ============================================================================
// POINTER-LIKES
// ============================================================================

impl<T> Inspect for Option<T> {
    fn view(&self) -> ValueView<'_> {
        ValueView::Pointer {
            null: self.is_none(),
        }
    }
}

impl<T> Inspect for *const T {
    fn view(&self) -> ValueView<'_> {
        ValueView::Pointer { null: self.is_null() }
    }
}

impl<T> Inspect for *mut T {
    fn view(&self) -> ValueView<'_> {
        ValueView::Pointer { null: self.is_null() }
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn view(&self) -> ValueView<'_> {
        (**self).view()
    }
}

// ============================================================================
// DYNAMICALLY-TYPED VALUES
// ============================================================================

/// JSON is the crate's dynamically-typed surface: `null` is the absence
/// marker, numbers classify by their best-fitting family the same way
/// they deserialize.
impl Inspect for serde_json::Value {
    fn view(&self) -> ValueView<'_> {
        match self {
            serde_json::Value::Null => ValueView::Absent,
            serde_json::Value::Bool(b) => ValueView::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ValueView::Signed(i)
                } else if let Some(u) = n.as_u64() {
                    ValueView::Unsigned(u)
                } else {
                    ValueView::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => ValueView::Text(s),
            serde_json::Value::Array(items) => ValueView::Sequence(Some(items.len())),
            serde_json::Value::Object(entries) => ValueView::Mapping(Some(entries.len())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::{ValueShape, is_empty, is_nil};
    use super::*;
    use serde_json::json;

    #[test]
    fn std_types_classify() {
        assert_eq!("text".view().shape(), ValueShape::Text);
        assert_eq!(vec![1].view().shape(), ValueShape::Sequence);
        assert_eq!([0_u8; 4].view().shape(), ValueShape::Sequence);
        assert_eq!(
            HashMap::<String, u8>::new().view().shape(),
            ValueShape::Mapping
        );
        assert_eq!(true.view().shape(), ValueShape::Boolean);
        assert_eq!(1_i32.view().shape(), ValueShape::Signed);
        assert_eq!(1_u32.view().shape(), ValueShape::Unsigned);
        assert_eq!(1.0_f32.view().shape(), ValueShape::Float);
        assert_eq!(Some(1).view().shape(), ValueShape::Pointer);
    }

    #[test]
    fn raw_pointers() {
        let value = 7_u8;
        let present: *const u8 = &raw const value;
        let absent: *const u8 = std::ptr::null();
        assert!(!is_nil(&present));
        assert!(is_nil(&absent));
        assert!(is_empty(&absent));
    }

    #[test]
    fn references_delegate() {
        let text: &str = "";
        assert!(is_empty(&text));
        let nested: &&str = &text;
        assert!(is_empty(nested));
    }

    #[test]
    fn json_null_is_the_absence_marker() {
        let value = json!(null);
        assert!(is_nil(&value));
        assert!(is_empty(&value));
    }

    #[test]
    fn json_scalars() {
        assert!(is_empty(&json!(0)));
        assert!(!is_empty(&json!(42)));
        assert!(is_empty(&json!(0.0)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!(false)));
        assert!(!is_nil(&json!(0)));
        assert!(!is_nil(&json!(false)));
    }

    #[test]
    fn json_number_families() {
        assert_eq!(json!(-3).view().shape(), ValueShape::Signed);
        assert_eq!(json!(u64::MAX).view().shape(), ValueShape::Unsigned);
        assert_eq!(json!(1.5).view().shape(), ValueShape::Float);
    }

    #[test]
    fn json_containers() {
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!([1])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"k": 1})));
        assert!(!is_nil(&json!([])));
    }
}
