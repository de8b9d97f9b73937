mod decode_good;

use alloc::vec::Vec;

use crate::Value;

pub(crate) fn arr(items: Vec<Value>) -> Value {
    Value::Array(items)
}

pub(crate) fn obj<const N: usize>(members: [(&str, Value); N]) -> Value {
    members.into_iter().collect()
}

pub(crate) fn num(n: f64) -> Value {
    Value::Number(n)
}

pub(crate) fn string(s: &str) -> Value {
    Value::from(s)
}
