use linecode::{
    has_bipolar_violations, CodecConfig, LineCode, Scheme, StreamDecoder, StreamEncoder,
};
use proptest::prelude::*;
use signal::{Bit, Level};

fn bits_strategy() -> impl Strategy<Value = Vec<Bit>> {
    prop::collection::vec(any::<bool>().prop_map(Bit::from), 0..256)
}

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::High), Just(Level::Low), Just(Level::NoLine)]
}

fn scheme_strategy() -> impl Strategy<Value = Scheme> {
    prop::sample::select(Scheme::ALL.to_vec())
}

fn config_strategy() -> impl Strategy<Value = CodecConfig> {
    (prop_oneof![Just(Level::High), Just(Level::Low)], any::<bool>()).prop_map(
        |(initial, strict)| {
            let config = CodecConfig::new(initial).unwrap();
            if strict {
                config.strict()
            } else {
                config
            }
        },
    )
}

/// Splits `len` into chunk boundaries driven by `cuts`.
fn chunk_bounds(len: usize, cuts: &[usize]) -> Vec<(usize, usize)> {
    let mut points: Vec<usize> = cuts.iter().map(|cut| cut % (len + 1)).collect();
    points.push(0);
    points.push(len);
    points.sort_unstable();
    points.windows(2).map(|w| (w[0], w[1])).collect()
}

proptest! {
    #[test]
    fn prop_roundtrip(scheme in scheme_strategy(), config in config_strategy(), bits in bits_strategy()) {
        let code = scheme.build(config);
        let levels = code.encode(&bits);
        prop_assert_eq!(code.decode(&levels).unwrap(), bits);
    }

    #[test]
    fn prop_length_law(scheme in scheme_strategy(), bits in bits_strategy()) {
        let code = scheme.build(CodecConfig::default());
        let levels = code.encode(&bits);
        prop_assert_eq!(levels.len(), bits.len() * scheme.intervals_per_bit());
    }

    #[test]
    fn prop_two_level_schemes_never_idle(scheme in scheme_strategy(), bits in bits_strategy()) {
        let code = scheme.build(CodecConfig::default());
        let levels = code.encode(&bits);
        if !scheme.has_violation_check() {
            prop_assert!(levels.iter().all(|level| level.is_pulse()));
        }
    }

    #[test]
    fn prop_bipolar_output_is_violation_free(config in config_strategy(), bits in bits_strategy()) {
        for scheme in [Scheme::BipolarAmi, Scheme::Pseudoternary] {
            let code = scheme.build(config);
            let levels = code.encode(&bits);
            prop_assert!(!has_bipolar_violations(&levels));
            prop_assert!(!code.violation_check().unwrap().has_violations(&levels));
        }
    }

    #[test]
    fn prop_manchester_family_has_mid_bit_transitions(bits in bits_strategy()) {
        for scheme in [Scheme::Manchester, Scheme::DifferentialManchester] {
            let levels = scheme.build(CodecConfig::default()).encode(&bits);
            for pair in levels.chunks_exact(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn prop_lenient_decode_never_fails(
        scheme in scheme_strategy(),
        levels in prop::collection::vec(level_strategy(), 0..256),
    ) {
        let code = scheme.build(CodecConfig::default());
        let bits = code.decode(&levels).unwrap();
        prop_assert_eq!(bits.len(), levels.len() / scheme.intervals_per_bit());
    }

    #[test]
    fn prop_strict_decode_never_panics(
        scheme in scheme_strategy(),
        levels in prop::collection::vec(level_strategy(), 0..256),
    ) {
        let _ = scheme.build(CodecConfig::strict_default()).decode(&levels);
    }

    #[test]
    fn prop_chunked_stream_matches_one_shot(
        scheme in scheme_strategy(),
        config in config_strategy(),
        bits in bits_strategy(),
        cuts in prop::collection::vec(any::<usize>(), 0..8),
    ) {
        let code = scheme.build(config);
        let expected = code.encode(&bits);

        let mut encoder = StreamEncoder::new(&*code);
        let mut levels = Vec::new();
        for (start, end) in chunk_bounds(bits.len(), &cuts) {
            levels.extend(encoder.push(&bits[start..end]));
        }
        prop_assert_eq!(&levels, &expected);

        let mut decoder = StreamDecoder::new(&*code);
        let mut decoded = Vec::new();
        for (start, end) in chunk_bounds(levels.len(), &cuts) {
            decoded.extend(decoder.push(&levels[start..end]).unwrap());
        }
        prop_assert_eq!(decoder.finish().unwrap(), bits.len());
        prop_assert_eq!(decoded, bits);
    }
}
