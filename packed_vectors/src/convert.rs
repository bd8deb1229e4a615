//! Conversion from packed vectors into coded ones

use packed_codes::{CodeKind, CodecConfig, CodedVector};
use packed_ints::{FixedIntVector, IntVector};

use crate::Result;

/// Re-encodes a sequence of `u64` into a [`CodedVector`].
///
/// # Examples
///
/// ```
/// use packed_vectors::{CodeKind, CodecConfig, ToCoded};
///
/// let values = [3u64, 1, 4, 1, 5, 9, 2, 6];
/// let coded = values.to_coded(CodeKind::VlcFibonacci).unwrap();
/// assert_eq!(coded.get(5), Ok(9));
///
/// let config = CodecConfig::default().with_dac_chunk_width(2);
/// let dac = values.to_coded_with(CodeKind::Dac, &config).unwrap();
/// assert_eq!(dac.iter().collect::<Vec<_>>(), values);
/// ```
pub trait ToCoded {
    fn to_coded_with(&self, kind: CodeKind, config: &CodecConfig) -> Result<CodedVector>;

    /// Encodes with the default [`CodecConfig`].
    fn to_coded(&self, kind: CodeKind) -> Result<CodedVector> {
        self.to_coded_with(kind, &CodecConfig::default())
    }
}

impl ToCoded for [u64] {
    fn to_coded_with(&self, kind: CodeKind, config: &CodecConfig) -> Result<CodedVector> {
        Ok(CodedVector::build(kind, config, self.iter().copied())?)
    }
}

impl ToCoded for IntVector {
    fn to_coded_with(&self, kind: CodeKind, config: &CodecConfig) -> Result<CodedVector> {
        Ok(CodedVector::from_int_vector(kind, config, self)?)
    }
}

impl<const W: usize> ToCoded for FixedIntVector<W> {
    fn to_coded_with(&self, kind: CodeKind, config: &CodecConfig) -> Result<CodedVector> {
        self.as_dynamic().to_coded_with(kind, config)
    }
}
