#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use envelope_core::{
        binary::{decode, decode_as, encode, encode_tagged, encode_value, EnvelopeTag},
        types::EnvelopeError,
    };

    #[test]
    fn test_round_trip_value_kinds() {
        let cases = [
            (json!("a"), EnvelopeTag::String),
            (json!(42), EnvelopeTag::Integer),
            (json!(4.2), EnvelopeTag::Float),
            (json!(true), EnvelopeTag::Boolean),
            (json!([1, 2]), EnvelopeTag::Array),
            (json!({"k": 1}), EnvelopeTag::Object),
            (Value::Null, EnvelopeTag::Null),
        ];
        for (value, tag) in cases {
            let buf = encode(&value).unwrap();
            assert_eq!(decode(&buf).unwrap(), (tag, value));
        }
    }

    #[test]
    fn test_wire_layout() {
        let buf = encode("a").unwrap();
        assert_eq!(buf, vec![0x20, 0x00, b'"', b'a', b'"']);

        let buf = encode(&42).unwrap();
        assert_eq!(buf, vec![0x21, 0x00, b'4', b'2']);
    }

    #[test]
    fn test_explicit_tags() {
        let buf = encode_tagged(EnvelopeTag::BigInt, &json!("12345678901234567890")).unwrap();
        assert_eq!(buf[0], 0x24);
        let (tag, value) = decode(&buf).unwrap();
        assert_eq!(tag, EnvelopeTag::BigInt);
        assert_eq!(value, json!("12345678901234567890"));

        let buf = encode_tagged(EnvelopeTag::Undefined, &Value::Null).unwrap();
        assert_eq!(decode(&buf).unwrap().0, EnvelopeTag::Undefined);
    }

    #[test]
    fn test_typed_decode() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Order {
            id: u32,
            items: Vec<String>,
        }

        let order = Order { id: 7, items: vec!["tea".into(), "scone".into()] };
        let buf = encode(&order).unwrap();
        assert_eq!(buf[0], EnvelopeTag::Object.as_u8());

        let (tag, back): (EnvelopeTag, Order) = decode_as(&buf).unwrap();
        assert_eq!(tag, EnvelopeTag::Object);
        assert_eq!(back, order);
    }

    #[test]
    fn test_short_buffer_is_out_of_range() {
        for buf in [&[][..], &[0x20][..], &[0x20, 0x00][..]] {
            assert!(matches!(decode(buf), Err(EnvelopeError::OutOfRange { need: 3, .. })));
        }
    }

    #[test]
    fn test_unknown_tag_is_invalid_argument() {
        assert!(matches!(decode(&[0x1F, 0x00, b'1']), Err(EnvelopeError::InvalidArgument(_))));
        assert!(matches!(decode(&[0x2B, 0x00, b'1']), Err(EnvelopeError::InvalidArgument(_))));
    }

    #[test]
    fn test_reserved_byte_must_be_zero() {
        assert!(matches!(decode(&[0x21, 0x01, b'1']), Err(EnvelopeError::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_text_is_parse_error() {
        assert!(matches!(decode(&[0x25, 0x00, b'{']), Err(EnvelopeError::Parse(_))));
        assert!(matches!(decode(&[0x20, 0x00, 0xFF, 0xFE]), Err(EnvelopeError::Parse(_))));
    }

    #[test]
    fn test_unrepresentable_value_is_serialization_error() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1);
        assert!(matches!(encode(&map), Err(EnvelopeError::Serialization(_))));
    }

    #[test]
    fn test_tag_inference() {
        assert_eq!(EnvelopeTag::of(&json!(-3)), EnvelopeTag::Integer);
        assert_eq!(EnvelopeTag::of(&json!(u64::MAX)), EnvelopeTag::Integer);
        assert_eq!(EnvelopeTag::of(&json!(0.5)), EnvelopeTag::Float);
        assert_eq!(encode_value(&json!(false)).unwrap()[0], 0x23);
    }
}
