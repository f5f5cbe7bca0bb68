//! The interface shared by both value encodings.
//!
//! `TaggedValue` stores a discriminant next to its payload, `NanBoxed` packs
//! everything into one `u64`. Code above this layer is written against
//! `ValueRepr` (usually through the `Value` alias) and cannot tell which one
//! it got.
use std::fmt;

use crate::{ObjectRef, TaggedValue, ValueError, ValueResult};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Nil,
    Number,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Nil => "nil",
            ValueKind::Number => "number",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub trait ValueRepr: Copy + fmt::Debug {
    fn from_bool(value: bool) -> Self;
    fn nil() -> Self;
    fn from_number(value: f64) -> Self;
    fn from_object(object: ObjectRef) -> Self;

    fn is_bool(&self) -> bool;
    fn is_nil(&self) -> bool;
    fn is_number(&self) -> bool;
    fn is_object(&self) -> bool;

    /// Decode into the matchable form.
    fn unpack(&self) -> TaggedValue;

    fn pack(value: TaggedValue) -> Self {
        match value {
            TaggedValue::Bool(b) => Self::from_bool(b),
            TaggedValue::Nil => Self::nil(),
            TaggedValue::Number(n) => Self::from_number(n),
            TaggedValue::Object(o) => Self::from_object(o),
        }
    }

    fn kind(&self) -> ValueKind {
        if self.is_number() {
            ValueKind::Number
        } else if self.is_object() {
            ValueKind::Object
        } else if self.is_nil() {
            ValueKind::Nil
        } else {
            ValueKind::Bool
        }
    }

    fn as_bool(&self) -> ValueResult<bool> {
        match self.unpack() {
            TaggedValue::Bool(b) => Ok(b),
            other => Err(mismatch(ValueKind::Bool, other.kind())),
        }
    }

    fn as_number(&self) -> ValueResult<f64> {
        match self.unpack() {
            TaggedValue::Number(n) => Ok(n),
            other => Err(mismatch(ValueKind::Number, other.kind())),
        }
    }

    fn as_object(&self) -> ValueResult<ObjectRef> {
        match self.unpack() {
            TaggedValue::Object(o) => Ok(o),
            other => Err(mismatch(ValueKind::Object, other.kind())),
        }
    }

    /// `nil` and `false` are falsey, everything else is truthy.
    fn is_falsey(&self) -> bool {
        matches!(self.unpack(), TaggedValue::Nil | TaggedValue::Bool(false))
    }

    fn equals(&self, other: &Self) -> bool {
        values_equal(*self, *other)
    }
}

#[inline]
fn mismatch(expected: ValueKind, found: ValueKind) -> ValueError {
    ValueError::TypeMismatch { expected, found }
}

/// Language-level equality.
///
/// Numbers are compared as decoded doubles, so `nan != nan` and
/// `0.0 == -0.0` regardless of encoding. Objects compare by handle only.
pub fn values_equal<V: ValueRepr>(a: V, b: V) -> bool {
    match (a.unpack(), b.unpack()) {
        (TaggedValue::Bool(a), TaggedValue::Bool(b)) => a == b,
        (TaggedValue::Nil, TaggedValue::Nil) => true,
        (TaggedValue::Number(a), TaggedValue::Number(b)) => a == b,
        (TaggedValue::Object(a), TaggedValue::Object(b)) => a == b,
        _ => false,
    }
}
