use packed_codes::coder::{Coder, Comma, EliasDelta, EliasGamma, Fibonacci};
use packed_codes::{Aggregate, CodeKind, CodecConfig, CodedVector};
use packed_ints::BitBuf;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn kind() -> impl Strategy<Value = CodeKind> {
    proptest::sample::select(CodeKind::ALL.to_vec())
}

/// Mix of small values and full-range outliers.
fn value() -> impl Strategy<Value = u64> {
    prop_oneof![
        4 => 0u64..64,
        2 => 0u64..1 << 20,
        1 => any::<u64>(),
    ]
}

fn stream_roundtrip<C: Coder>(values: &[u64]) {
    let mut buf = BitBuf::new();
    for &x in values {
        C::encode(x, &mut buf);
    }
    let mut pos = 0;
    for &x in values {
        assert_eq!(C::decode(&buf, &mut pos), Some(x));
    }
    assert_eq!(pos, buf.len());
}

proptest! {
    #[test]
    fn coders_roundtrip_streams(values in prop::collection::vec(value(), 0..200)) {
        stream_roundtrip::<EliasGamma>(&values);
        stream_roundtrip::<EliasDelta>(&values);
        stream_roundtrip::<Fibonacci>(&values);
        stream_roundtrip::<Comma<2>>(&values);
    }

    #[test]
    fn coded_vectors_match_input(
        kind in kind(),
        values in prop::collection::vec(value(), 0..400),
        density in 1usize..200,
        chunk_width in 1usize..=64,
    ) {
        let config = CodecConfig::default()
            .with_sample_density(density)
            .with_dac_chunk_width(chunk_width);
        let v = CodedVector::build(kind, &config, values.iter().copied()).unwrap();
        prop_assert_eq!(v.len(), values.len());
        prop_assert_eq!(v.iter().collect::<Vec<_>>(), values.clone());
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(v.get(i), Ok(x));
        }
        prop_assert_eq!(v.min_value(), values.iter().copied().min());
        prop_assert_eq!(v.max_value(), values.iter().copied().max());
        prop_assert_eq!(v.sum(), values.iter().map(|&x| u128::from(x)).sum::<u128>());
    }

    #[test]
    fn signed_input_rejects_negatives(
        kind in kind(),
        values in prop::collection::vec(any::<i64>(), 1..50),
    ) {
        let result = CodedVector::try_from_signed(kind, &CodecConfig::default(), values.iter().copied());
        match values.iter().find(|&&x| x < 0) {
            Some(&neg) => prop_assert_eq!(result, Err(packed_codes::CodecError::UnsupportedValue(neg))),
            None => prop_assert_eq!(result.unwrap().len(), values.len()),
        }
    }
}

#[test]
fn seeded_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for kind in CodeKind::ALL {
        for _ in 0..5 {
            let len = rng.random_range(0..3000);
            let bits = rng.random_range(1..=64u32);
            let values: Vec<u64> = (0..len)
                .map(|_| rng.random::<u64>() >> (64 - bits))
                .collect();
            let v = CodedVector::build(kind, &CodecConfig::default(), values.iter().copied()).unwrap();
            assert_eq!(v.iter().collect::<Vec<_>>(), values, "{kind}");
            for _ in 0..100.min(len) {
                let i = rng.random_range(0..len);
                assert_eq!(v.get(i), Ok(values[i]), "{kind} index {i}");
            }
        }
    }
}

#[test]
fn sorted_data_favours_differential_layout() {
    let values: Vec<u64> = (0..10_000u64).map(|i| 1_000_000 + i * 4).collect();
    let config = CodecConfig::default();
    let enc = CodedVector::build(CodeKind::EncEliasDelta, &config, values.iter().copied()).unwrap();
    let vlc = CodedVector::build(CodeKind::VlcEliasDelta, &config, values.iter().copied()).unwrap();
    assert!(enc.size_in_bytes() * 3 < vlc.size_in_bytes());
}
