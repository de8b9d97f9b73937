#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rawjson::{DecodeOptions, EncodeOptions, decode_with, encode_with};

#[derive(Debug, Arbitrary)]
struct Input {
    require_eof: bool,
    max_depth: u8,
    initial_capacity: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let options = DecodeOptions {
        require_eof: input.require_eof,
        max_depth: usize::from(input.max_depth),
    };
    let Ok(value) = decode_with(&input.data, options) else {
        return;
    };

    // anything we decoded and can write back must decode to the same value
    let encoded = encode_with(
        &value,
        EncodeOptions {
            initial_capacity: usize::from(input.initial_capacity),
        },
    );
    let Ok(bytes) = encoded else {
        return;
    };
    let again = decode_with(
        &bytes,
        DecodeOptions {
            require_eof: true,
            max_depth: usize::MAX,
        },
    )
    .unwrap_or_else(|e| panic!("re-decode failed: {e}\n{:?}", lossy(&bytes)));
    assert_eq!(again, value);
});

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
