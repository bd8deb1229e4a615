use packed_vectors::prelude::*;

fn main() -> Result<()> {
    println!("=== Packed Vectors Quick Start ===\n");

    // 1024 values in 10 bits each
    let mut v = IntVector::from_elem(1 << 10, 0, 10)?;
    for i in 0..v.len() {
        v.set(i, i as u64)?;
    }
    println!("int_vector: {} values, width {}, {} bytes", v.len(), v.width(), v.size_in_bytes());
    if let Some(s) = v.summary() {
        println!("  min={} max={} sum={}", s.min, s.max, s.sum);
    }

    // Values wider than the element width are masked
    let mut narrow = IntVector::from_elem(4, 0, 3)?;
    narrow.set(0, 13)?;
    println!("  13 stored in 3 bits reads back as {}", narrow.get(0)?);

    // Fixed widths and bit vectors
    let bytes = IntVector8::from_values([10, 20, 30])?;
    println!("\nint_vector_8: [{}] width {}", bytes, bytes.width());

    let mut bits = BitVector::from_values([0, 1, 0, 1, 0])?;
    bits.flip();
    println!("bit_vector after flip: [{}], ones={}", bits, bits.count_ones());

    // Every coded layout over the same data
    println!("\n=== Coded Vectors ===");
    for kind in CodeKind::ALL {
        let coded = v.to_coded(kind)?;
        println!(
            "  {:<24} get(1000)={} size={} bytes",
            kind.to_string(),
            coded.get(1000)?,
            coded.size_in_bytes()
        );
    }

    // Sampling is configurable
    let config = CodecConfig::default().with_sample_density(16);
    let dense = v.to_coded_with(CodeKind::VlcEliasGamma, &config)?;
    println!("\nvlc_vector_elias_gamma, density 16: {} bytes", dense.size_in_bytes());

    // Negative input is rejected
    match CodedVector::try_from_signed(CodeKind::Dac, &CodecConfig::default(), [4, -2, 8]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("signed input: {e}"),
    }

    Ok(())
}
