use loxval::{
    InternedStrings, NanBoxed, ObjectRef, TaggedValue, Value, ValueArray, ValueError, ValueKind,
    ValueRepr, render, values_equal,
};

fn literals(strings: &InternedStrings) -> Vec<TaggedValue> {
    vec![
        TaggedValue::Bool(true),
        TaggedValue::Bool(false),
        TaggedValue::Nil,
        TaggedValue::Number(0.0),
        TaggedValue::Number(-0.0),
        TaggedValue::Number(42.0),
        TaggedValue::Number(-1.25),
        TaggedValue::Number(f64::INFINITY),
        TaggedValue::Number(f64::NAN),
        TaggedValue::Object(strings.intern("alpha")),
        TaggedValue::Object(strings.intern("beta")),
        TaggedValue::Object(strings.intern("alpha")),
    ]
}

#[test]
fn both_encodings_agree_on_every_operation() {
    let strings = InternedStrings::new();
    let values = literals(&strings);

    for a in &values {
        let boxed = NanBoxed::pack(*a);
        assert_eq!(boxed.kind(), a.kind());
        assert_eq!(boxed.is_falsey(), a.is_falsey());
        assert_eq!(boxed.as_bool(), a.as_bool());
        assert_eq!(boxed.as_object(), a.as_object());
        assert_eq!(
            boxed.as_number().map(f64::to_bits),
            a.as_number().map(f64::to_bits)
        );
        assert_eq!(render(boxed, &strings), render(*a, &strings));

        for b in &values {
            assert_eq!(
                values_equal(boxed, NanBoxed::pack(*b)),
                values_equal(*a, *b),
                "equality of {a:?} and {b:?}"
            );
        }
    }
}

#[test]
fn interned_objects_with_same_contents_are_equal() {
    let strings = InternedStrings::new();
    let values = literals(&strings);
    assert!(values_equal(values[9], values[11]));
    assert!(!values_equal(values[9], values[10]));
}

#[test]
fn selected_value_alias_behaves_like_both() {
    let mut constants: ValueArray = ValueArray::new();
    constants.append(Value::from_number(1.0));
    constants.append(Value::from_bool(true));
    constants.append(Value::nil());
    constants.append(Value::from_object(ObjectRef::new(5)));

    assert_eq!(constants.len(), 4);
    assert_eq!(constants.capacity(), 8);
    assert_eq!(constants.get(0).and_then(|v| v.as_number()), Ok(1.0));
    assert_eq!(constants.get(1).and_then(|v| v.as_bool()), Ok(true));
    assert!(constants.get(2).is_ok_and(|v| v.is_nil()));
    assert_eq!(
        constants.get(3).and_then(|v| v.as_object()),
        Ok(ObjectRef::new(5))
    );
    assert_eq!(
        constants.get(2).and_then(|v| v.as_number()),
        Err(ValueError::TypeMismatch {
            expected: ValueKind::Number,
            found: ValueKind::Nil,
        })
    );
}

#[test]
fn append_then_read_last_for_every_variant() {
    let strings = InternedStrings::new();
    let mut compact = ValueArray::<NanBoxed>::new();
    let mut explicit = ValueArray::<TaggedValue>::new();

    for v in literals(&strings) {
        compact.append(NanBoxed::pack(v));
        explicit.append(v);

        let last_compact = compact.get(compact.len() - 1).expect("appended");
        let last_explicit = explicit.get(explicit.len() - 1).expect("appended");
        let is_nan = v.as_number().is_ok_and(f64::is_nan);
        assert_eq!(values_equal(last_compact, NanBoxed::pack(v)), !is_nan);
        assert_eq!(values_equal(last_explicit, v), !is_nan);
        assert_eq!(last_compact.kind(), last_explicit.kind());
    }
    assert_eq!(compact.len(), 12);
    assert_eq!(compact.capacity(), 16);
    assert_eq!(explicit.capacity(), compact.capacity());
}

#[test]
fn released_array_refuses_reads() {
    let mut stack = ValueArray::<NanBoxed>::new();
    for i in 0..9 {
        stack.append(NanBoxed::from_number(f64::from(i)));
    }
    stack.release();
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), 0);
    assert_eq!(
        stack.get(0),
        Err(ValueError::IndexOutOfBounds { index: 0, count: 0 })
    );
}
