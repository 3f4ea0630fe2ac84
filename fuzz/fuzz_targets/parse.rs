#![no_main]

use libfuzzer_sys::fuzz_target;
use signal::{format_bits, format_levels, parse_bits, parse_levels};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(bits) = parse_bits(text) {
        assert_eq!(parse_bits(&format_bits(&bits)).ok(), Some(bits));
    }
    if let Ok(levels) = parse_levels(text) {
        assert_eq!(parse_levels(&format_levels(&levels)).ok(), Some(levels));
    }
});
