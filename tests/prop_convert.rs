//! Property tests for the JSON to NBT conversion and the binary codec.
//!
//! Strategies generate JSON trees whose numbers are either typed or lazy text
//! that fits the width the classifier picks, so every generated tree converts.

use json_nbt::{
    BigEndian, JsonNumber, JsonObject, JsonValue, LittleEndian, NbtValue, deserialize, from_slice,
    serialize, to_vec,
};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        Just(String::new()),
        Just("caf\u{e9}".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = JsonNumber> {
    prop_oneof![
        any::<i8>().prop_map(JsonNumber::Byte),
        any::<i16>().prop_map(JsonNumber::Short),
        any::<i32>().prop_map(JsonNumber::Int),
        any::<i64>().prop_map(JsonNumber::Long),
        (-1.0e6f32..1.0e6f32).prop_map(JsonNumber::Float),
        (-1.0e12f64..1.0e12f64).prop_map(JsonNumber::Double),
        any::<i32>().prop_map(|v| JsonNumber::lazy(v.to_string())),
        (-1.0e6f32..1.0e6f32).prop_map(|v| JsonNumber::lazy(format!("{v:.2}"))),
    ]
}

fn arb_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        arb_number().prop_map(JsonValue::Number),
        "[a-zA-Z0-9 \u{e9}\u{4f60}]{0,16}".prop_map(JsonValue::String),
    ]
}

fn arb_json() -> impl Strategy<Value = JsonValue> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<JsonObject>())),
        ]
    })
}

/// Same shape: lists match arrays in length, compounds match objects in keys.
fn same_shape(json: &JsonValue, nbt: &NbtValue) -> bool {
    match (json, nbt) {
        (JsonValue::Array(items), NbtValue::List(tags)) => {
            items.len() == tags.len() && items.iter().zip(tags).all(|(j, n)| same_shape(j, n))
        }
        (JsonValue::Object(object), NbtValue::Compound(compound)) => {
            object.keys().eq(compound.keys())
                && object
                    .values()
                    .zip(compound.values())
                    .all(|(j, n)| same_shape(j, n))
        }
        (JsonValue::Null, NbtValue::Compound(compound)) => compound.is_empty(),
        (JsonValue::Bool(b), NbtValue::Byte(v)) => i8::from(*b) == *v,
        (JsonValue::String(s), NbtValue::String(t)) => s == t,
        (JsonValue::Number(_), n) => !matches!(n, NbtValue::List(_) | NbtValue::Compound(_)),
        _ => false,
    }
}

proptest! {
    #[test]
    fn conversion_mirrors_shape(json in arb_json()) {
        let nbt = serialize(&json).unwrap();
        prop_assert!(same_shape(&json, &nbt));
    }

    #[test]
    fn conversion_is_deterministic(json in arb_json()) {
        prop_assert_eq!(serialize(&json).unwrap(), serialize(&json).unwrap());
    }

    #[test]
    fn codec_round_trips(json in arb_json()) {
        let nbt = serialize(&json).unwrap();
        let be = to_vec::<BigEndian>(&nbt).unwrap();
        prop_assert_eq!(&from_slice::<BigEndian>(&be).unwrap(), &nbt);
        let le = to_vec::<LittleEndian>(&nbt).unwrap();
        prop_assert_eq!(&from_slice::<LittleEndian>(&le).unwrap(), &nbt);
    }

    #[test]
    fn reverse_conversion_is_stable(json in arb_json()) {
        // after one pass every number is typed, so a second pass changes nothing
        let nbt = serialize(&json).unwrap();
        prop_assert_eq!(serialize(&deserialize(&nbt)).unwrap(), nbt);
    }

    #[test]
    fn deep_mixed_lists_round_trip(levels in 1usize..=256, leaf in arb_leaf()) {
        // each mixed level is a list plus a wrapper compound on the wire
        let mut json = leaf;
        for _ in 0..levels {
            json = JsonValue::Array(vec![JsonValue::from("x"), json, JsonValue::from(1i8)]);
        }
        let nbt = serialize(&json).unwrap();
        let bytes = to_vec::<BigEndian>(&nbt).unwrap();
        prop_assert_eq!(from_slice::<BigEndian>(&bytes).unwrap(), nbt);
    }

    #[test]
    fn lazy_integers_become_ints(v in any::<i32>()) {
        prop_assert_eq!(serialize(&JsonValue::Number(JsonNumber::lazy(v.to_string()))).unwrap(), NbtValue::Int(v));
    }

    #[test]
    fn lazy_decimals_become_floats(v in -1.0e30f32..1.0e30f32) {
        let text = format!("{v:.3}");
        let expected = text.parse::<f32>().unwrap();
        prop_assert_eq!(serialize(&JsonValue::Number(JsonNumber::lazy(text))).unwrap(), NbtValue::Float(expected));
    }
}
