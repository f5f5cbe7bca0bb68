use std::fmt;

use crate::{ObjectRenderer, TaggedValue, ValueRepr};

// outside this range plain decimal output gets unreadable
const EXPONENT_ABOVE: f64 = 1e16;
const EXPONENT_BELOW: f64 = 1e-5;

/// Text form of a number: `3`, `0.5`, `-0`, `1e300`, `inf`, `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Renders `value` without touching any state; objects are handed to the
/// heap layer.
pub fn render<V: ValueRepr>(value: V, objects: &impl ObjectRenderer) -> String {
    match value.unpack() {
        TaggedValue::Bool(b) => b.to_string(),
        TaggedValue::Nil => "nil".to_string(),
        TaggedValue::Number(n) => format_number(n),
        TaggedValue::Object(o) => objects.render_object(o),
    }
}

/// `Display` adapter around `render`.
pub struct Rendered<'a, V, R: ?Sized> {
    value: V,
    objects: &'a R,
}

pub fn display<V: ValueRepr, R: ObjectRenderer + ?Sized>(
    value: V,
    objects: &R,
) -> Rendered<'_, V, R> {
    Rendered { value, objects }
}

impl<V: ValueRepr, R: ObjectRenderer + ?Sized> fmt::Display for Rendered<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.unpack() {
            TaggedValue::Object(o) => f.write_str(&self.objects.render_object(o)),
            TaggedValue::Number(n) => f.write_str(&format_number(n)),
            TaggedValue::Bool(b) => write!(f, "{b}"),
            TaggedValue::Nil => f.write_str("nil"),
        }
    }
}
