#![allow(missing_docs)]
use rawjson::{Map, Value, decode};

mod common;

fn from_serde(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().expect("finite number")),
        serde_json::Value::String(s) => Value::from(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_serde).collect()),
        serde_json::Value::Object(members) => {
            let mut map = Map::default();
            for (k, v) in members {
                map.insert(k.into(), from_serde(v));
            }
            Value::Object(map)
        }
    }
}

#[test]
fn agrees_with_serde_json_inside_the_grammar() {
    for src in common::PORTABLE {
        let expected = from_serde(serde_json::from_str(src).expect("oracle accepts document"));
        let got = decode(src.as_bytes()).unwrap_or_else(|e| panic!("{src:?}: {e}"));
        assert_eq!(got, expected, "{src:?}");
    }
}

#[test]
fn duplicate_keys_match_serde_json_order() {
    let src = r#"{"dup": 1, "other": 2, "dup": 3}"#;
    let oracle: serde_json::Value = serde_json::from_str(src).unwrap();
    let oracle_keys: Vec<&str> = oracle.as_object().unwrap().keys().map(String::as_str).collect();

    let value = decode(src.as_bytes()).unwrap();
    let keys: Vec<String> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys, oracle_keys);
    assert_eq!(value["dup"], Value::Number(3.0));
}
