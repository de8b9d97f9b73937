use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::{arr, num, obj, string};
use crate::{DecodeOptions, Map, Value, decode, decode_with};

#[rstest]
#[case::null(b"null", Value::Null)]
#[case::true_(b"true", Value::Boolean(true))]
#[case::false_(b"false", Value::Boolean(false))]
#[case::integer(b"42", num(42.0))]
#[case::zero(b"0", num(0.0))]
#[case::leading_zeros(b"007", num(7.0))]
#[case::decimal(b"3.25", num(3.25))]
#[case::negative(b"-5", num(-5.0))]
#[case::negative_decimal(b"-0.5", num(-0.5))]
#[case::minus_then_space(b"- 12", num(-12.0))]
#[case::string(br#""hello""#, string("hello"))]
#[case::empty_string(br#""""#, string(""))]
#[case::empty_array(b"[]", arr(vec![]))]
#[case::empty_object(b"{}", Value::Object(Map::default()))]
#[case::padded(b" \t\r\n [ 1 ] \n", arr(vec![num(1.0)]))]
fn decodes(#[case] input: &[u8], #[case] expected: Value) {
    assert_eq!(decode(input).unwrap(), expected);
}

#[test]
fn words_are_classified_by_first_letter() {
    assert_eq!(decode(b"nil").unwrap(), Value::Null);
    assert_eq!(decode(b"tru").unwrap(), Value::Boolean(true));
    assert_eq!(decode(b"[fals, nothing]").unwrap(), arr(vec![Value::Boolean(false), Value::Null]));
}

#[test]
fn negative_numbers_in_array() {
    assert_eq!(
        decode(b"[-1,2,-3]").unwrap(),
        arr(vec![num(-1.0), num(2.0), num(-3.0)])
    );
}

#[test]
fn strings_are_copied_verbatim() {
    let v = decode(b"[\"a\\nb\", \"tab\there\", \"\xff\xfe\", \"two\nlines\"]").unwrap();
    let bytes: Vec<&[u8]> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_bytes().unwrap())
        .collect();
    assert_eq!(
        bytes,
        [
            &b"a\\nb"[..],
            &b"tab\there"[..],
            &b"\xff\xfe"[..],
            &b"two\nlines"[..],
        ]
    );
}

#[test]
fn backslash_quote_ends_the_string() {
    // `\` has no meaning, so the string is `a\` and the `"` after it closes it
    assert_eq!(decode(br#"["a\"]"#).unwrap(), arr(vec![string("a\\")]));
}

#[test]
fn nested_document() {
    let input = br#"
    {
        "name": "modem",
        "ports": [80, 443, -1],
        "tls": {"enabled": true, "cert": null},
        "ratio": 0.75,
        "tags": [[], {}, ["x"]]
    }"#;
    let expected = obj([
        ("name", string("modem")),
        ("ports", arr(vec![num(80.0), num(443.0), num(-1.0)])),
        ("tls", obj([("enabled", Value::Boolean(true)), ("cert", Value::Null)])),
        ("ratio", num(0.75)),
        (
            "tags",
            arr(vec![arr(vec![]), Value::Object(Map::default()), arr(vec![string("x")])]),
        ),
    ]);
    assert_eq!(decode(input).unwrap(), expected);
}

#[test]
fn object_preserves_member_order() {
    let v = decode(br#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&[u8]> = v.as_object().unwrap().keys().map(|k| k.as_slice()).collect();
    assert_eq!(keys, [&b"z"[..], &b"a"[..], &b"m"[..]]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = decode(br#"{"a":1,"a":2}"#).unwrap();
    let map = v.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(v["a"], num(2.0));

    // the key keeps the position of its first occurrence
    let v = decode(br#"{"a":1,"b":2,"a":3}"#).unwrap();
    let members: Vec<(&[u8], &Value)> = v
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.as_slice(), v))
        .collect();
    assert_eq!(members, [(&b"a"[..], &num(3.0)), (&b"b"[..], &num(2.0))]);
}

#[test]
fn trailing_bytes_ignored_by_default() {
    assert_eq!(decode(b"[1] [2]").unwrap(), arr(vec![num(1.0)]));
    assert_eq!(decode(b"{} garbage \x00").unwrap(), Value::Object(Map::default()));
    assert_eq!(decode(b"12abc").unwrap(), num(12.0));
}

#[test]
fn require_eof_accepts_trailing_whitespace() {
    let options = DecodeOptions {
        require_eof: true,
        ..Default::default()
    };
    assert_eq!(
        decode_with(b"[1]\n\t \r\n", options).unwrap(),
        arr(vec![num(1.0)])
    );
}

#[test]
fn nesting_up_to_the_limit() {
    let options = DecodeOptions {
        max_depth: 8,
        ..Default::default()
    };
    let input = b"[[[[[[[[]]]]]]]]";
    let mut expected = arr(vec![]);
    for _ in 0..7 {
        expected = arr(vec![expected]);
    }
    assert_eq!(decode_with(input, options).unwrap(), expected);
}

#[test]
fn large_integers_parse_as_doubles() {
    assert_eq!(decode(b"9007199254740993").unwrap(), num(9_007_199_254_740_992.0));
    assert_eq!(decode(b"-0").unwrap(), num(-0.0));
}
