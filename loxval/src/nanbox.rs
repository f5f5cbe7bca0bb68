//! NanBoxed: every value in one 64 bit word.
//!
//! Numbers are stored as their raw IEEE-754 bits. Everything else lives in
//! quiet NaN space:
//!
//! ```text
//! number   any double whose bits & QNAN != QNAN
//! nil      0x7ffc_0000_0000_0001
//! false    0x7ffc_0000_0000_0002
//! true     0x7ffc_0000_0000_0003
//! object   0xfffc_0000_xxxx_xxxx   sign bit | QNAN | handle index
//! ```
//!
//! The arithmetic producing NaN has to hand us `CANONICAL_NAN` (or any NaN
//! outside the reserved space); `canonicalize_nan` is the agreed hook.
//! `from_number` applies it as well, so no input can forge a tag.
use std::fmt;

use crate::{ObjectRef, TaggedValue, ValueRepr, values_equal};

pub const SIGN_BIT: u64 = 1 << 63;

/// Exponent all ones, quiet bit and one more mantissa bit set.
pub const QNAN: u64 = 0x7ffc_0000_0000_0000;

pub const TAG_NIL: u64 = 0b01;
pub const TAG_FALSE: u64 = 0b10;
pub const TAG_TRUE: u64 = 0b11;

const NIL_BITS: u64 = QNAN | TAG_NIL;
const FALSE_BITS: u64 = QNAN | TAG_FALSE;
const TRUE_BITS: u64 = QNAN | TAG_TRUE;
const OBJECT_BITS: u64 = SIGN_BIT | QNAN;

/// The only NaN arithmetic is allowed to produce.
/// bit 50 is clear, so `CANONICAL_NAN & QNAN != QNAN`
pub const CANONICAL_NAN: u64 = 0x7ff8_0000_0000_0000;

const _: () = assert!(CANONICAL_NAN & QNAN != QNAN);

/// Map a double that would land in tag space onto the canonical NaN.
#[inline]
pub fn canonicalize_nan(value: f64) -> f64 {
    if value.to_bits() & QNAN == QNAN {
        f64::from_bits(CANONICAL_NAN)
    } else {
        value
    }
}

#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct NanBoxed(u64);

impl NanBoxed {
    pub const NIL: Self = Self(NIL_BITS);
    pub const TRUE: Self = Self(TRUE_BITS);
    pub const FALSE: Self = Self(FALSE_BITS);

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    #[inline]
    fn number_bits(self) -> f64 {
        f64::from_bits(self.0)
    }

    #[inline]
    fn object_index(self) -> u32 {
        // objects are built from a u32, the upper payload bits stay clear
        (self.0 & !OBJECT_BITS) as u32
    }
}

impl ValueRepr for NanBoxed {
    #[inline]
    fn from_bool(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    #[inline]
    fn nil() -> Self {
        Self::NIL
    }

    #[inline]
    fn from_number(value: f64) -> Self {
        Self(canonicalize_nan(value).to_bits())
    }

    #[inline]
    fn from_object(object: ObjectRef) -> Self {
        Self(OBJECT_BITS | u64::from(object.index()))
    }

    #[inline]
    fn is_bool(&self) -> bool {
        // false | 1 == true; objects carry the sign bit and never match
        self.0 | 1 == TRUE_BITS
    }

    #[inline]
    fn is_nil(&self) -> bool {
        self.0 == NIL_BITS
    }

    #[inline]
    fn is_number(&self) -> bool {
        self.0 & QNAN != QNAN
    }

    #[inline]
    fn is_object(&self) -> bool {
        self.0 & OBJECT_BITS == OBJECT_BITS
    }

    #[inline]
    fn unpack(&self) -> TaggedValue {
        if self.is_number() {
            TaggedValue::Number(self.number_bits())
        } else if self.is_object() {
            TaggedValue::Object(ObjectRef::new(self.object_index()))
        } else if self.is_nil() {
            TaggedValue::Nil
        } else {
            TaggedValue::Bool(self.0 == TRUE_BITS)
        }
    }
}

// never compare raw words, numbers need IEEE semantics
impl PartialEq for NanBoxed {
    fn eq(&self, other: &Self) -> bool {
        values_equal(*self, *other)
    }
}

impl fmt::Debug for NanBoxed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NanBoxed({:#018x} = {:?})", self.0, self.unpack())
    }
}

impl From<bool> for NanBoxed {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<f64> for NanBoxed {
    fn from(value: f64) -> Self {
        Self::from_number(value)
    }
}

impl From<ObjectRef> for NanBoxed {
    fn from(value: ObjectRef) -> Self {
        Self::from_object(value)
    }
}

impl From<TaggedValue> for NanBoxed {
    fn from(value: TaggedValue) -> Self {
        Self::pack(value)
    }
}

impl From<NanBoxed> for TaggedValue {
    fn from(value: NanBoxed) -> Self {
        value.unpack()
    }
}
