mod array;
mod error;
mod format;
mod interning;
mod nanbox;
mod object;
mod repr;
mod tagged;

pub use array::{MIN_CAPACITY, ValueArray, grow_capacity};
pub use error::{ValueError, ValueResult};
pub use format::{Rendered, display, format_number, render};
pub use interning::InternedStrings;
pub use nanbox::{
    CANONICAL_NAN, NanBoxed, QNAN, SIGN_BIT, TAG_FALSE, TAG_NIL, TAG_TRUE, canonicalize_nan,
};
pub use object::{ObjectRef, ObjectRenderer};
pub use repr::{ValueKind, ValueRepr, values_equal};
pub use tagged::TaggedValue;

/// The runtime's value cell, picked by the `nan-boxing` feature.
#[cfg(feature = "nan-boxing")]
pub type Value = NanBoxed;

/// The runtime's value cell, picked by the `nan-boxing` feature.
#[cfg(not(feature = "nan-boxing"))]
pub type Value = TaggedValue;
