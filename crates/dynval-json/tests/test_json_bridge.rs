use dynval_json::{from_tagged_str, parse_str, to_string, to_tagged_string};
use dynval_types::{Value, ValueMap, ValueMapIntKey, ValueType};
use proptest::prelude::*;

/// Values whose discriminants survive the plain JSON bridge
fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 _]{0,10}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::from),
            prop::collection::hash_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|m: ValueMap| Value::from(m)),
        ]
    })
}

fn arb_float() -> impl Strategy<Value = f32> {
    prop_oneof![
        // Quarters print and parse back exactly
        (-100_000i32..100_000).prop_map(|i| i as f32 / 4.0),
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

fn arb_double() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i32..1_000_000).prop_map(|i| f64::from(i) / 8.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

/// Values of every discriminant, for the tagged format
fn arb_tagged_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<u8>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        arb_float().prop_map(Value::from),
        arb_double().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        ".{0,10}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::from),
            prop::collection::hash_map(".{0,4}", inner.clone(), 0..5)
                .prop_map(|m: ValueMap| Value::from(m)),
            prop::collection::hash_map(any::<i32>(), inner, 0..5)
                .prop_map(|m: ValueMapIntKey| Value::from(m)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_plain_round_trip(v in arb_json_value()) {
        let text = to_string(&v, false).unwrap();
        prop_assert_eq!(parse_str(&text).unwrap(), v);
    }

    #[test]
    fn prop_tagged_round_trip(v in arb_tagged_value(), pretty in any::<bool>()) {
        let text = to_tagged_string(&v, pretty).unwrap();
        let back = from_tagged_str(&text).unwrap();
        prop_assert_eq!(back.value_type(), v.value_type());
        prop_assert_eq!(back, v);
    }
}

#[test]
fn test_plain_bridge_widens_small_types() {
    let v = Value::from(vec![Value::from(7u8), Value::from(0.5f32)]);
    let back = parse_str(&to_string(&v, false).unwrap()).unwrap();
    let items = back.as_value_vector().unwrap();
    assert_eq!(items[0].value_type(), ValueType::Integer);
    assert_eq!(items[1].value_type(), ValueType::Double);
}

#[test]
fn test_tagged_format_keeps_small_types() {
    let mut keyed = ValueMapIntKey::new();
    keyed.insert(1, Value::from(7u8));
    keyed.insert(2, Value::from(0.5f32));
    let v = Value::from(keyed);

    let back = from_tagged_str(&to_tagged_string(&v, false).unwrap()).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.as_int_key_map().unwrap()[&1].value_type(), ValueType::Byte);
}

#[test]
fn test_pretty_output_is_multiline() {
    let v = parse_str(r#"{"a": [1, 2]}"#).unwrap();
    let text = to_string(&v, true).unwrap();
    assert!(text.contains('\n'));
    assert_eq!(parse_str(&text).unwrap(), v);
}
