//! TaggedValue: explicit encoding, a discriminant plus an 8 byte payload.
//!
//! Portable and easy to read in a debugger, twice the size of `NanBoxed`.
//! It doubles as the decoded form every encoding unpacks into, so callers
//! can match on it exhaustively instead of going through the checked
//! accessors.
use crate::{ObjectRef, ValueKind, ValueRepr};

// derived PartialEq compares f64 payloads with IEEE semantics and objects by
// handle, which is exactly values_equal
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TaggedValue {
    Bool(bool),
    Nil,
    Number(f64),
    Object(ObjectRef),
}

impl ValueRepr for TaggedValue {
    #[inline]
    fn from_bool(value: bool) -> Self {
        TaggedValue::Bool(value)
    }

    #[inline]
    fn nil() -> Self {
        TaggedValue::Nil
    }

    #[inline]
    fn from_number(value: f64) -> Self {
        TaggedValue::Number(value)
    }

    #[inline]
    fn from_object(object: ObjectRef) -> Self {
        TaggedValue::Object(object)
    }

    #[inline]
    fn is_bool(&self) -> bool {
        matches!(self, TaggedValue::Bool(_))
    }

    #[inline]
    fn is_nil(&self) -> bool {
        matches!(self, TaggedValue::Nil)
    }

    #[inline]
    fn is_number(&self) -> bool {
        matches!(self, TaggedValue::Number(_))
    }

    #[inline]
    fn is_object(&self) -> bool {
        matches!(self, TaggedValue::Object(_))
    }

    #[inline]
    fn unpack(&self) -> TaggedValue {
        *self
    }

    #[inline]
    fn pack(value: TaggedValue) -> Self {
        value
    }

    #[inline]
    fn kind(&self) -> ValueKind {
        match self {
            TaggedValue::Bool(_) => ValueKind::Bool,
            TaggedValue::Nil => ValueKind::Nil,
            TaggedValue::Number(_) => ValueKind::Number,
            TaggedValue::Object(_) => ValueKind::Object,
        }
    }
}

impl From<bool> for TaggedValue {
    fn from(value: bool) -> Self {
        TaggedValue::Bool(value)
    }
}

impl From<f64> for TaggedValue {
    fn from(value: f64) -> Self {
        TaggedValue::Number(value)
    }
}

impl From<ObjectRef> for TaggedValue {
    fn from(value: ObjectRef) -> Self {
        TaggedValue::Object(value)
    }
}
