#![no_main]

use libfuzzer_sys::fuzz_target;

use servicefabric_core::{JsonRead, JsonReader, RawJson};

fuzz_target!(|data: &[u8]| {
    let mut reader = JsonReader::new(data).with_max_depth(64);
    if reader.skip_value().is_ok() && reader.finish().is_ok() {
        // Anything the skipper accepts must also be capturable verbatim.
        if let Ok(text) = std::str::from_utf8(data) {
            let raw = RawJson::parse(text).expect("skip_value accepted the input");
            assert_eq!(raw.as_str(), text.trim());
        }
    }
});
