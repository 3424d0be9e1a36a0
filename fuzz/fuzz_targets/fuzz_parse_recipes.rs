#![no_main]
use libfuzzer_sys::fuzz_target;
use pantry_match::parsers::{parse_recipes_str, InputFormat};

/// Fuzz recipe document parsing.
///
/// Detects the format from content, then parses. Boundary coercion of ids,
/// numbers and ingredient lists must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let format = InputFormat::detect_from_content(s);
        let _ = parse_recipes_str(s, format);
        let _ = parse_recipes_str(s, InputFormat::Yaml);
    }
});
