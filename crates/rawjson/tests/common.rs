#![allow(missing_docs, dead_code)]

/// A configuration-like document using every construct the grammar has.
pub const DOCUMENT: &str = r#"
{
    "service": "relay",
    "enabled": true,
    "replicas": 3,
    "offset": -12,
    "limits": {
        "cpu": 2,
        "memory": 512,
        "burst": null
    },
    "ports": [
        80,
        443,
        -1
    ],
    "tags": [
        "edge",
        "eu-west",
        [],
        {}
    ],
    "nested": [[[1]], {"a": {"b": [false]}}]
}
"#;

/// Documents inside the grammar that a strict JSON parser also accepts.
pub const PORTABLE: &[&str] = &[
    "[]",
    "{}",
    "[0, 1, -1, 10.5, -0.25, 12345678901]",
    r#"{"a": [true, false, null], "b": {"c": "d"}}"#,
    r#"{"dup": 1, "other": 2, "dup": 3}"#,
    r#"[{"x": [{"y": [{"z": "deep"}]}]}]"#,
    "[\n\t\"spaces inside\",\r\n  \"trailing \"\n]",
    DOCUMENT,
];
