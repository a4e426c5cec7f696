use std::collections::BTreeMap;

use bytes::Bytes;
use proptest::prelude::*;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(
        decode(b"i-9223372036854775808e").unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_decode_integer_invalid() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i-e").is_err());
    assert!(decode(b"i+5e").is_err());
    assert!(decode(b"i4x2e").is_err());
    assert!(matches!(
        decode(b"i9223372036854775808e"),
        Err(DecodeError::InvalidInteger { offset: 1, .. })
    ));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(
        decode(b"0:").unwrap(),
        Value::Bytes(Bytes::from_static(b""))
    );
    assert_eq!(
        decode(b"2:\xff\xfe").unwrap(),
        Value::Bytes(Bytes::from_static(b"\xff\xfe"))
    );
}

#[test]
fn test_decode_bytes_invalid_length() {
    assert_eq!(decode(b"04:spam"), Err(DecodeError::InvalidStringLength(0)));
    assert_eq!(decode(b"3x:abc"), Err(DecodeError::InvalidStringLength(0)));
    assert_eq!(
        decode(b"-3:abc"),
        Err(DecodeError::UnexpectedChar { offset: 0, ch: '-' })
    );
}

#[test]
fn test_decode_truncated() {
    assert_eq!(decode(b"5:abc"), Err(DecodeError::UnexpectedEof(5)));
    assert_eq!(decode(b"12"), Err(DecodeError::UnexpectedEof(2)));
    assert_eq!(decode(b"i42"), Err(DecodeError::UnexpectedEof(3)));
    assert_eq!(decode(b"l4:spam"), Err(DecodeError::UnexpectedEof(7)));
    assert_eq!(decode(b"d3:cow3:moo"), Err(DecodeError::UnexpectedEof(11)));
    assert_eq!(decode(b""), Err(DecodeError::UnexpectedEof(0)));
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(&Bytes::from_static(b"cow")),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_non_string_key() {
    assert_eq!(decode(b"di1e3:fooe"), Err(DecodeError::NonStringKey(1)));
    assert_eq!(decode(b"dl1:aei1ee"), Err(DecodeError::NonStringKey(1)));
}

#[test]
fn test_decode_dict_key_order() {
    assert_eq!(
        decode(b"d3:zoo1:a3:cow1:be"),
        Err(DecodeError::UnsortedKey(9))
    );
    assert_eq!(decode(b"d1:ai1e1:ai2ee"), Err(DecodeError::UnsortedKey(7)));
    // A key that is a strict prefix of the next one sorts first.
    assert!(decode(b"d1:ai1e2:abi2ee").is_ok());
}

#[test]
fn test_decode_unexpected_char() {
    assert_eq!(
        decode(b"x"),
        Err(DecodeError::UnexpectedChar { offset: 0, ch: 'x' })
    );
}

#[test]
fn test_nesting_limit() {
    let mut data = vec![b'l'; 70];
    data.extend(std::iter::repeat(b'e').take(70));
    assert_eq!(decode(&data), Err(DecodeError::NestingTooDeep));

    let mut shallow = vec![b'l'; 10];
    shallow.extend(std::iter::repeat(b'e').take(10));
    assert!(decode(&shallow).is_ok());
}

#[test]
fn test_trailing_data_error() {
    assert_eq!(decode(b"i42eextra"), Err(DecodeError::TrailingData(4)));
    assert_eq!(decode(b"dee"), Err(DecodeError::TrailingData(2)));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)).unwrap(), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"spam"))).unwrap(),
        b"4:spam"
    );
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list).unwrap(), b"l4:spami42ee");
}

#[test]
fn test_encode_dict_sorted_regardless_of_insertion() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"zebra"), Value::Integer(1));
    dict.insert(Bytes::from_static(b"apple"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"Zulu"), Value::Integer(3));
    assert_eq!(
        encode(&Value::Dict(dict)).unwrap(),
        b"d4:Zului3e5:applei2e5:zebrai1ee"
    );
}

#[test]
fn test_encode_to_writer() {
    let mut out = Vec::new();
    encode_to(&Value::string("abc"), &mut out).unwrap();
    assert_eq!(out, b"3:abc");
}

#[test]
fn test_roundtrip_fastresume() {
    let original: &[u8] = b"d11:file-format22:libtorrent resume file12:file-versioni1e\
        6:piecesl3:abce12:qBt-category0:12:qBt-savePath15:/data/Temp/Foo/\
        9:save_path15:/data/Temp/Foo/5:totali-1ee";
    let decoded = decode(original).unwrap();
    assert_eq!(
        decoded.get(b"save_path").and_then(|v| v.as_str()),
        Some("/data/Temp/Foo/")
    );
    assert_eq!(encode(&decoded).unwrap(), original);
}

#[test]
fn test_nested_structures() {
    let data = b"d4:listl4:spami42eee";
    let decoded = decode(data).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert_eq!(value.type_name(), "integer");

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let mut value = Value::Dict(BTreeMap::new());
    assert!(value.as_list().is_none());
    value
        .as_dict_mut()
        .unwrap()
        .insert(Bytes::from_static(b"k"), Value::Integer(1));
    assert_eq!(value.get(b"k"), Some(&Value::Integer(1)));
}

#[test]
fn test_value_from_conversions() {
    let mut dict: BTreeMap<Bytes, Value> = BTreeMap::new();
    dict.insert(Bytes::from_static(b"directory"), "/data/Temp/".into());
    dict.insert(
        Bytes::from_static(b"files"),
        Value::from(vec![Value::from(Bytes::from_static(b"a.mkv")), 3i64.into()]),
    );
    let value = Value::from(dict);

    assert_eq!(value.type_name(), "dictionary");
    assert_eq!(
        encode(&value).unwrap(),
        b"d9:directory11:/data/Temp/5:filesl5:a.mkvi3eee"
    );
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(|b| Value::Bytes(Bytes::from(b))),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            proptest::collection::btree_map(
                proptest::collection::vec(any::<u8>(), 0..8).prop_map(Bytes::from),
                inner,
                0..6,
            )
            .prop_map(Value::Dict),
        ]
    })
}

proptest! {
    #[test]
    fn prop_encoded_values_roundtrip(value in arb_value()) {
        let encoded = encode(&value).unwrap();
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(&decoded, &value);
        prop_assert_eq!(encode(&decoded).unwrap(), encoded);
    }

    #[test]
    fn prop_truncated_input_never_decodes(value in arb_value(), cut in any::<prop::sample::Index>()) {
        let encoded = encode(&value).unwrap();
        let cut = cut.index(encoded.len());
        prop_assert!(decode(&encoded[..cut]).is_err());
    }
}
