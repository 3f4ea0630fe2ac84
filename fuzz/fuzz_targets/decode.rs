#![no_main]

use libfuzzer_sys::fuzz_target;
use linecode::{CodecConfig, Scheme, StreamDecoder};
use signal::Level;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let scheme = Scheme::ALL[usize::from(selector % 6)];
    let mut config = if selector & 0x40 == 0 {
        CodecConfig::default()
    } else {
        CodecConfig::strict_default()
    };
    if selector & 0x80 != 0 {
        if let Ok(high) = CodecConfig::new(Level::High) {
            config = high.with_mode(config.mode());
        }
    }

    let levels: Vec<Level> = rest
        .iter()
        .map(|byte| match byte % 3 {
            0 => Level::NoLine,
            1 => Level::High,
            _ => Level::Low,
        })
        .collect();

    let code = scheme.build(config);
    let one_shot = code.decode(&levels);
    let _ = code.violation_check().map(|check| check.has_violations(&levels));

    // Feed the same trace in uneven chunks; results must agree with one-shot decoding.
    let mut decoder = StreamDecoder::new(&*code);
    let mut chunked = Vec::new();
    let mut failed = false;
    for chunk in levels.chunks(usize::from(selector % 5) + 1) {
        match decoder.push(chunk) {
            Ok(bits) => chunked.extend(bits),
            Err(_) => {
                failed = true;
                break;
            }
        }
    }
    if !failed && decoder.finish().is_ok() {
        assert_eq!(one_shot.ok(), Some(chunked));
    } else {
        assert!(one_shot.is_err());
    }
});
