#![no_main]
use libfuzzer_sys::fuzz_target;
use pantry_match::parsers::{parse_pantry_str, parse_preferences_str, InputFormat};

/// Fuzz pantry and preferences parsing across every input format.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for format in [InputFormat::Json, InputFormat::Yaml, InputFormat::Lines] {
            let _ = parse_pantry_str(s, format);
        }
        let _ = parse_preferences_str(s, InputFormat::detect_from_content(s));
    }
});
