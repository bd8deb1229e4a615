use packed_vectors::prelude::*;
use packed_vectors::{CodecError, PackedIntsError};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_SIZE: usize = 5;

fn boundary_values(width: usize) -> [u64; VECTOR_SIZE] {
    [0, 1, packed_vectors::bit_ops::mask(width), 1 << (width - 1), 0]
}

#[test]
fn int_vector_every_width() -> Result<()> {
    for width in 1..=64 {
        let mut v = IntVector::from_elem(0, 0, width)?;
        assert_eq!(v.width(), width);
        assert!(v.is_empty());

        v.resize(VECTOR_SIZE)?;
        assert_eq!(v.len(), VECTOR_SIZE);
        assert_eq!(v.get(0)?, 0);

        let l = boundary_values(width);
        for (i, &x) in l.iter().enumerate() {
            v.set(i, x)?;
            assert_eq!(v.get(i)?, x, "width {width}");
        }
        assert_eq!(v.max_value(), l.iter().copied().max());
        assert_eq!(v.min_value(), l.iter().copied().min());
        assert_eq!(v.sum(), l.iter().map(|&x| u128::from(x)).sum::<u128>());
    }
    Ok(())
}

fn fixed_width<const W: usize>() -> Result<()> {
    let mut v = FixedIntVector::<W>::from_elem(0, 0)?;
    assert_eq!(v.width(), W);
    assert!(v.is_empty());

    v.resize(VECTOR_SIZE)?;
    assert_eq!(v.len(), VECTOR_SIZE);
    assert_eq!(v.get(0)?, 0);

    let l = boundary_values(W);
    for (i, &x) in l.iter().enumerate() {
        v.set(i, x)?;
        assert_eq!(v.get(i)?, x);
    }
    assert_eq!(v.max_value(), l.iter().copied().max());
    assert_eq!(v.min_value(), l.iter().copied().min());
    assert_eq!(v.sum(), l.iter().map(|&x| u128::from(x)).sum::<u128>());
    Ok(())
}

#[test]
fn fixed_width_vectors() -> Result<()> {
    fixed_width::<8>()?;
    fixed_width::<16>()?;
    fixed_width::<32>()?;
    fixed_width::<64>()?;
    assert_eq!(IntVector8::default().width(), 8);
    assert_eq!(IntVector64::default().width(), 64);
    Ok(())
}

#[test]
fn bit_vector_flip() -> Result<()> {
    let mut v = BitVector::from_elem(0, 0)?;
    assert_eq!(v.width(), 1);
    assert!(v.is_empty());

    v.resize(VECTOR_SIZE)?;
    assert_eq!(v.len(), VECTOR_SIZE);
    assert_eq!(v.get(0)?, 0);

    let l = [0u64, 1, 0, 1, 0];
    for (i, &x) in l.iter().enumerate() {
        v.set(i, x)?;
        assert_eq!(v.get(i)?, x);
    }
    v.flip();
    for (i, &x) in l.iter().enumerate() {
        assert_eq!(v.get(i)?, 1 - x);
    }
    assert_eq!(v.max_value(), Some(1));
    assert_eq!(v.min_value(), Some(0));
    assert_eq!(v.sum(), (l.len() - 2) as u128);
    Ok(())
}

#[test]
fn encoded_vectors_match_source() -> Result<()> {
    let mut v = IntVector::from_elem(1 << 10, 0, 64)?;
    for i in 0..v.len() {
        v.set(i, i as u64)?;
    }
    for kind in CodeKind::ALL {
        let ev = v.to_coded(kind)?;
        assert_eq!(ev.len(), v.len(), "{kind}");
        for i in 0..v.len() {
            assert_eq!(v.get(i)?, ev.get(i)?, "{kind} index {i}");
        }
    }
    Ok(())
}

#[test]
fn errors_surface_through_the_umbrella() {
    assert_eq!(
        IntVector::new(65).map_err(Error::from),
        Err(Error::Packed(PackedIntsError::InvalidWidth(65)))
    );
    assert_eq!(
        IntVector::new(0).map_err(Error::from),
        Err(Error::Packed(PackedIntsError::InvalidWidth(0)))
    );
    assert_eq!(
        IntVector::from_elem(usize::MAX, 0, 2).map_err(Error::from),
        Err(Error::Packed(PackedIntsError::LengthOverflow {
            len: usize::MAX,
            width: 2
        }))
    );

    let mut v = IntVector8::from_values([1, 2]).unwrap();
    assert!(matches!(
        v.set(2, 0),
        Err(PackedIntsError::IndexOutOfRange { index: 2, len: 2 })
    ));

    let mut wide = IntVector::from_values([1, 2], 2).unwrap();
    assert!(matches!(
        wide.flip(),
        Err(PackedIntsError::UnsupportedOperation(_))
    ));

    assert_eq!(
        CodedVector::try_from_signed(CodeKind::Dac, &CodecConfig::default(), [-3]),
        Err(CodecError::UnsupportedValue(-3))
    );
    assert_eq!(
        "rrr_vector".parse::<CodeKind>().map_err(Error::from),
        Err(Error::Codec(CodecError::UnknownCodeKind("rrr_vector".into())))
    );
}

#[test]
fn overflowing_writes_are_masked() -> Result<()> {
    let mut v = IntVector::from_elem(3, 0, 4)?;
    v.set(0, 0x1F)?;
    v.push(0xFF);
    assert_eq!(v.get(0)?, 0xF);
    assert_eq!(v.get(3)?, 0xF);
    assert_eq!(v.get(1)?, 0);
    Ok(())
}

#[test]
fn seeded_random_vectors_through_every_kind() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..8 {
        let width = rng.random_range(1..=64usize);
        let len = rng.random_range(0..600usize);
        let v = IntVector::from_values((0..len).map(|_| rng.random::<u64>()), width)?;
        let config = CodecConfig::default()
            .with_sample_density(rng.random_range(1..200usize))
            .with_dac_chunk_width(rng.random_range(1..=64usize));
        for kind in CodeKind::ALL {
            let coded = v.to_coded_with(kind, &config)?;
            assert_eq!(coded.len(), len, "{kind} width {width}");
            assert!(coded.iter().eq(v.iter()), "{kind} width {width}");
            assert_eq!(coded.sum(), v.sum());
            if len > 0 {
                let i = rng.random_range(0..len);
                assert_eq!(coded.get(i)?, v.get(i)?, "{kind} index {i}");
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn coded_slices_match_input(
        values in prop::collection::vec(any::<u64>(), 0..200),
        density in 1usize..64,
        chunk_width in 1usize..=64,
    ) {
        let config = CodecConfig::default()
            .with_sample_density(density)
            .with_dac_chunk_width(chunk_width);
        for kind in CodeKind::ALL {
            let coded = values.to_coded_with(kind, &config).unwrap();
            prop_assert_eq!(coded.iter().collect::<Vec<_>>(), values.clone());
        }
    }
}
