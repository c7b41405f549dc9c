use json_nbt::{
    BigEndian, ConvertConfig, Error, JsonCompressionStrategy, JsonNumber, JsonToNbtStrategy,
    JsonValue, LittleEndian, NbtValue, NullPolicy, deserialize, from_slice,
};
use serde::Serialize;

#[derive(Serialize)]
struct Advancement {
    id: String,
    done: bool,
    progress: Vec<u32>,
    reward: Option<f32>,
}

#[test]
fn test_compress_then_decompress() {
    let strategy = JsonToNbtStrategy::new();
    let json = JsonValue::parse(r#"{"a": true, "b": 42, "c": 3.5, "d": [1, "x", null], "e": {}}"#)
        .unwrap();

    let bytes = strategy.compress_to_bytes(&json).unwrap();
    let back = strategy.decompress(&bytes[..]).unwrap();

    // numbers come back typed, so they convert to the very same tags
    assert_eq!(
        strategy.serialize(&back).unwrap(),
        strategy.serialize(&json).unwrap()
    );
    assert_eq!(back.get("e"), Some(&JsonValue::Object(Default::default())));
    assert_eq!(back.get("a"), Some(&JsonValue::Number(JsonNumber::Byte(1))));
    assert_eq!(back.get("c"), Some(&JsonValue::Number(JsonNumber::Float(3.5))));
}

#[test]
fn test_compress_is_smaller_than_json_text() {
    let text = r#"{"values": [1000000, 2000000, 3000000, 4000000, 5000000, 6000000, 7000000, 8000000]}"#;
    let json = JsonValue::parse(text).unwrap();
    let bytes = JsonToNbtStrategy::new().compress_to_bytes(&json).unwrap();
    assert!(bytes.len() < text.len(), "{} >= {}", bytes.len(), text.len());
}

#[test]
fn test_compress_to_writer_matches_bytes() {
    let strategy = JsonToNbtStrategy::new();
    let json = JsonValue::parse(r#"["a", 1, 2.5]"#).unwrap();

    let mut out = Vec::new();
    strategy.compress(&json, &mut out).unwrap();
    assert_eq!(out, strategy.compress_to_bytes(&json).unwrap());
    assert_eq!(
        from_slice::<BigEndian>(&out).unwrap(),
        strategy.serialize(&json).unwrap()
    );
}

#[test]
fn test_little_endian_strategy() {
    let strategy = JsonToNbtStrategy::<LittleEndian>::from_config(ConvertConfig::default());
    let json = JsonValue::parse("258").unwrap();
    let bytes = strategy.compress_to_bytes(&json).unwrap();
    assert_eq!(&bytes[..], [0x03, 0x00, 0x00, 0x02, 0x01, 0x00, 0x00]);
    assert_eq!(
        strategy.decompress(&bytes[..]).unwrap(),
        JsonValue::Number(JsonNumber::Int(258))
    );
}

#[test]
fn test_strategy_reports_conversion_errors() {
    let strategy = JsonToNbtStrategy::new();
    let json = JsonValue::parse("[9999999999]").unwrap();
    assert!(matches!(
        strategy.compress_to_bytes(&json),
        Err(Error::MalformedNumber { .. })
    ));

    let skipping = JsonToNbtStrategy::with_config(
        ConvertConfig::default().with_null_policy(NullPolicy::Skip),
    );
    assert!(matches!(
        skipping.compress_to_bytes(&JsonValue::Null),
        Err(Error::Unconvertible { kind: "null" })
    ));
}

#[test]
fn test_decompress_reports_decode_errors() {
    let strategy = JsonToNbtStrategy::new();
    assert!(matches!(
        strategy.decompress(&[0x0A, 0x00][..]),
        Err(Error::EndOfFile)
    ));
}

#[test]
fn test_serde_struct_through_strategy() {
    let advancement = Advancement {
        id: "story/mine_stone".to_string(),
        done: true,
        progress: vec![3, 5],
        reward: None,
    };
    let json = JsonValue::from(serde_json::to_value(&advancement).unwrap());

    let strategy = JsonToNbtStrategy::new();
    let nbt = strategy.serialize(&json).unwrap();
    assert_eq!(nbt.get("id"), Some(&NbtValue::from("story/mine_stone")));
    assert_eq!(nbt.get("done"), Some(&NbtValue::Byte(1)));
    assert_eq!(
        nbt.get("progress"),
        Some(&NbtValue::List(vec![NbtValue::Int(3), NbtValue::Int(5)]))
    );
    assert_eq!(nbt.get("reward"), Some(&NbtValue::default()));
}

#[test]
fn test_deserialize_is_total() {
    let nbt = NbtValue::List(vec![
        NbtValue::Byte(1),
        NbtValue::Short(2),
        NbtValue::Int(3),
        NbtValue::Long(4),
        NbtValue::Float(5.5),
        NbtValue::Double(6.5),
        NbtValue::from("seven"),
        NbtValue::default(),
    ]);
    let json = deserialize(&nbt);
    assert_eq!(
        json,
        JsonValue::Array(vec![
            JsonValue::from(1i8),
            JsonValue::from(2i16),
            JsonValue::from(3i32),
            JsonValue::from(4i64),
            JsonValue::from(5.5f32),
            JsonValue::from(6.5f64),
            JsonValue::from("seven"),
            JsonValue::Object(Default::default()),
        ])
    );
    // typed numbers convert back to the same tags
    assert_eq!(json_nbt::serialize(&json).unwrap(), nbt);
}

#[test]
fn test_json_text_round_trip() {
    let json = JsonValue::parse(r#"{"f": 0.1, "i": -3, "s": "x", "n": null, "l": [true]}"#)
        .unwrap();
    let nbt = JsonToNbtStrategy::new().serialize(&json).unwrap();
    let text = serde_json::Value::try_from(deserialize(&nbt)).unwrap().to_string();
    assert_eq!(text, r#"{"f":0.1,"i":-3,"s":"x","n":{},"l":[1]}"#);
}

#[test]
fn test_non_finite_numbers_have_no_json_form() {
    let json = JsonValue::from(f32::NAN);
    assert!(matches!(
        serde_json::Value::try_from(json),
        Err(Error::NonFiniteNumber)
    ));
}

#[test]
fn test_nbt_serializes_with_serde() {
    let nbt = json_nbt::serialize(&JsonValue::parse(r#"{"a": [1, 2.5], "b": "c"}"#).unwrap())
        .unwrap();
    assert_eq!(
        serde_json::to_string(&nbt).unwrap(),
        r#"{"a":[1,2.5],"b":"c"}"#
    );
}

#[test]
fn test_strategy_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JsonToNbtStrategy>();
    assert_send_sync::<JsonToNbtStrategy<LittleEndian>>();
}

fn nested_mixed_json(levels: usize) -> JsonValue {
    let mut json = JsonValue::from("leaf");
    for _ in 0..levels {
        json = JsonValue::Array(vec![JsonValue::from(0i32), json]);
    }
    json
}

#[test]
fn test_deep_mixed_document_round_trips() {
    let strategy = JsonToNbtStrategy::new();
    let json = nested_mixed_json(256);
    let bytes = strategy.compress_to_bytes(&json).unwrap();
    assert_eq!(strategy.decompress(&bytes[..]).unwrap(), json);
}

#[test]
fn test_compress_refuses_what_decompress_cannot_read() {
    // well inside the converter's limit, but every mixed level doubles on the wire
    let strategy = JsonToNbtStrategy::new();
    let json = nested_mixed_json(300);
    assert!(strategy.serialize(&json).is_ok());
    assert!(matches!(
        strategy.compress_to_bytes(&json),
        Err(Error::DepthLimitExceeded(512))
    ));
}

#[test]
fn test_new_strategy_uses_default_config() {
    assert_eq!(*JsonToNbtStrategy::new().config(), ConvertConfig::default());
    assert_eq!(ConvertConfig::new(), ConvertConfig::default());
    assert_eq!(ConvertConfig::new().null_policy, NullPolicy::EmptyCompound);
    assert_eq!(ConvertConfig::new().max_depth, 512);
}
