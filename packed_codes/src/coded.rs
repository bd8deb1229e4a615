//! One type for every coded layout, selected at runtime by [`CodeKind`].

use packed_ints::{Aggregate, IntVector, mega_bytes};

use crate::coder::{Comma, EliasDelta, EliasGamma, Fibonacci};
use crate::{
    CodeKind, CodecConfig, CodecError, DacIter, DacVector, EncIter, EncVector, Result, VlcIter,
    VlcVector,
};

pub type EncVectorEliasDelta = EncVector<EliasDelta>;
pub type EncVectorEliasGamma = EncVector<EliasGamma>;
pub type EncVectorFibonacci = EncVector<Fibonacci>;
pub type EncVectorComma2 = EncVector<Comma<2>>;
pub type VlcVectorEliasDelta = VlcVector<EliasDelta>;
pub type VlcVectorEliasGamma = VlcVector<EliasGamma>;
pub type VlcVectorFibonacci = VlcVector<Fibonacci>;
pub type VlcVectorComma2 = VlcVector<Comma<2>>;

/// Any of the coded layouts.
///
/// ```rust
/// use packed_codes::{Aggregate, CodeKind, CodecConfig, CodedVector};
///
/// let values: Vec<u64> = (0..1024).collect();
/// for kind in CodeKind::ALL {
///     let v = CodedVector::build(kind, &CodecConfig::default(), values.iter().copied()).unwrap();
///     assert_eq!(v.kind(), kind);
///     assert_eq!(v.get(1000), Ok(1000));
///     assert_eq!(v.sum(), 1023 * 1024 / 2);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodedVector {
    EncEliasDelta(EncVectorEliasDelta),
    EncEliasGamma(EncVectorEliasGamma),
    EncFibonacci(EncVectorFibonacci),
    EncComma2(EncVectorComma2),
    VlcEliasDelta(VlcVectorEliasDelta),
    VlcEliasGamma(VlcVectorEliasGamma),
    VlcFibonacci(VlcVectorFibonacci),
    VlcComma2(VlcVectorComma2),
    Dac(DacVector),
}

macro_rules! dispatch {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            CodedVector::EncEliasDelta($v) => $body,
            CodedVector::EncEliasGamma($v) => $body,
            CodedVector::EncFibonacci($v) => $body,
            CodedVector::EncComma2($v) => $body,
            CodedVector::VlcEliasDelta($v) => $body,
            CodedVector::VlcEliasGamma($v) => $body,
            CodedVector::VlcFibonacci($v) => $body,
            CodedVector::VlcComma2($v) => $body,
            CodedVector::Dac($v) => $body,
        }
    };
}

impl CodedVector {
    /// Encodes `values` with the layout and code named by `kind`.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidSampleDensity`] or [`CodecError::InvalidChunkWidth`]
    /// if `config` does not validate.
    pub fn build<I>(kind: CodeKind, config: &CodecConfig, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        config.validate()?;
        let density = config.sample_density;
        Ok(match kind {
            CodeKind::EncEliasDelta => {
                Self::EncEliasDelta(EncVector::with_sample_density(values, density)?)
            }
            CodeKind::EncEliasGamma => {
                Self::EncEliasGamma(EncVector::with_sample_density(values, density)?)
            }
            CodeKind::EncFibonacci => {
                Self::EncFibonacci(EncVector::with_sample_density(values, density)?)
            }
            CodeKind::EncComma2 => Self::EncComma2(EncVector::with_sample_density(values, density)?),
            CodeKind::VlcEliasDelta => {
                Self::VlcEliasDelta(VlcVector::with_sample_density(values, density)?)
            }
            CodeKind::VlcEliasGamma => {
                Self::VlcEliasGamma(VlcVector::with_sample_density(values, density)?)
            }
            CodeKind::VlcFibonacci => {
                Self::VlcFibonacci(VlcVector::with_sample_density(values, density)?)
            }
            CodeKind::VlcComma2 => Self::VlcComma2(VlcVector::with_sample_density(values, density)?),
            CodeKind::Dac => Self::Dac(DacVector::with_chunk_width(values, config.dac_chunk_width)?),
        })
    }

    /// Like [`build`](Self::build) for signed input. Stops at the first
    /// negative value.
    ///
    /// ```rust
    /// use packed_codes::{CodeKind, CodecConfig, CodecError, CodedVector};
    ///
    /// let config = CodecConfig::default();
    /// let ok = CodedVector::try_from_signed(CodeKind::Dac, &config, [1, 2, 3]).unwrap();
    /// assert_eq!(ok.len(), 3);
    ///
    /// let err = CodedVector::try_from_signed(CodeKind::VlcFibonacci, &config, [1, -4, 3]);
    /// assert_eq!(err, Err(CodecError::UnsupportedValue(-4)));
    /// ```
    pub fn try_from_signed<I>(kind: CodeKind, config: &CodecConfig, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let values = values
            .into_iter()
            .map(|x| u64::try_from(x).map_err(|_| CodecError::UnsupportedValue(x)))
            .collect::<Result<Vec<u64>>>()?;
        Self::build(kind, config, values)
    }

    /// Re-encodes the elements of a packed vector.
    pub fn from_int_vector(kind: CodeKind, config: &CodecConfig, source: &IntVector) -> Result<Self> {
        Self::build(kind, config, source.iter())
    }

    pub fn kind(&self) -> CodeKind {
        match self {
            Self::EncEliasDelta(_) => CodeKind::EncEliasDelta,
            Self::EncEliasGamma(_) => CodeKind::EncEliasGamma,
            Self::EncFibonacci(_) => CodeKind::EncFibonacci,
            Self::EncComma2(_) => CodeKind::EncComma2,
            Self::VlcEliasDelta(_) => CodeKind::VlcEliasDelta,
            Self::VlcEliasGamma(_) => CodeKind::VlcEliasGamma,
            Self::VlcFibonacci(_) => CodeKind::VlcFibonacci,
            Self::VlcComma2(_) => CodeKind::VlcComma2,
            Self::Dac(_) => CodeKind::Dac,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<u64> {
        dispatch!(self, v => v.get(index))
    }

    /// Sample spacing, or `None` for the DAC layout which has no samples.
    pub fn sample_density(&self) -> Option<usize> {
        match self {
            Self::Dac(_) => None,
            Self::EncEliasDelta(v) => Some(v.sample_density()),
            Self::EncEliasGamma(v) => Some(v.sample_density()),
            Self::EncFibonacci(v) => Some(v.sample_density()),
            Self::EncComma2(v) => Some(v.sample_density()),
            Self::VlcEliasDelta(v) => Some(v.sample_density()),
            Self::VlcEliasGamma(v) => Some(v.sample_density()),
            Self::VlcFibonacci(v) => Some(v.sample_density()),
            Self::VlcComma2(v) => Some(v.sample_density()),
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        dispatch!(self, v => v.size_in_bytes())
    }

    pub fn size_in_mega_bytes(&self) -> f64 {
        mega_bytes(self.size_in_bytes())
    }

    pub fn iter(&self) -> CodedIter<'_> {
        match self {
            Self::EncEliasDelta(v) => CodedIter::EncEliasDelta(v.iter()),
            Self::EncEliasGamma(v) => CodedIter::EncEliasGamma(v.iter()),
            Self::EncFibonacci(v) => CodedIter::EncFibonacci(v.iter()),
            Self::EncComma2(v) => CodedIter::EncComma2(v.iter()),
            Self::VlcEliasDelta(v) => CodedIter::VlcEliasDelta(v.iter()),
            Self::VlcEliasGamma(v) => CodedIter::VlcEliasGamma(v.iter()),
            Self::VlcFibonacci(v) => CodedIter::VlcFibonacci(v.iter()),
            Self::VlcComma2(v) => CodedIter::VlcComma2(v.iter()),
            Self::Dac(v) => CodedIter::Dac(v.iter()),
        }
    }

    /// Decodes everything back into a packed vector of minimal width.
    pub fn to_int_vector(&self) -> IntVector {
        IntVector::from_slice(&self.iter().collect::<Vec<_>>())
    }
}

pub enum CodedIter<'a> {
    EncEliasDelta(EncIter<'a, EliasDelta>),
    EncEliasGamma(EncIter<'a, EliasGamma>),
    EncFibonacci(EncIter<'a, Fibonacci>),
    EncComma2(EncIter<'a, Comma<2>>),
    VlcEliasDelta(VlcIter<'a, EliasDelta>),
    VlcEliasGamma(VlcIter<'a, EliasGamma>),
    VlcFibonacci(VlcIter<'a, Fibonacci>),
    VlcComma2(VlcIter<'a, Comma<2>>),
    Dac(DacIter<'a>),
}

macro_rules! dispatch_iter {
    ($self:expr, $it:ident => $body:expr) => {
        match $self {
            CodedIter::EncEliasDelta($it) => $body,
            CodedIter::EncEliasGamma($it) => $body,
            CodedIter::EncFibonacci($it) => $body,
            CodedIter::EncComma2($it) => $body,
            CodedIter::VlcEliasDelta($it) => $body,
            CodedIter::VlcEliasGamma($it) => $body,
            CodedIter::VlcFibonacci($it) => $body,
            CodedIter::VlcComma2($it) => $body,
            CodedIter::Dac($it) => $body,
        }
    };
}

impl Iterator for CodedIter<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        dispatch_iter!(self, it => it.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        dispatch_iter!(self, it => it.size_hint())
    }
}

impl ExactSizeIterator for CodedIter<'_> {}

impl Aggregate for CodedVector {
    type Values<'a> = CodedIter<'a>;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a CodedVector {
    type Item = u64;
    type IntoIter = CodedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_10_scenario_for_every_kind() -> Result<()> {
        let source = IntVector::from_values(0..1024, 10)?;
        let config = CodecConfig::default();
        for kind in CodeKind::ALL {
            let v = CodedVector::from_int_vector(kind, &config, &source)?;
            assert_eq!(v.len(), 1024, "{kind}");
            for i in 0..1024 {
                assert_eq!(v.get(i)?, i as u64, "{kind} index {i}");
            }
            assert_eq!(v.min_value(), Some(0));
            assert_eq!(v.max_value(), Some(1023));
            assert_eq!(v.sum(), 523_776);
            assert_eq!(v.to_int_vector(), source);
            assert_eq!(
                v.get(1024),
                Err(CodecError::IndexOutOfRange { index: 1024, len: 1024 })
            );
        }
        Ok(())
    }

    #[test]
    fn signed_input() -> Result<()> {
        let config = CodecConfig::default();
        for kind in CodeKind::ALL {
            assert_eq!(
                CodedVector::try_from_signed(kind, &config, [0, 5, -1, 7]),
                Err(CodecError::UnsupportedValue(-1))
            );
            let v = CodedVector::try_from_signed(kind, &config, [0, 5, i64::MAX])?;
            assert_eq!(v.get(2)?, i64::MAX as u64);
        }
        Ok(())
    }

    #[test]
    fn config_is_validated_and_applied() -> Result<()> {
        let bad = CodecConfig::default().with_sample_density(0);
        assert_eq!(
            CodedVector::build(CodeKind::EncFibonacci, &bad, [1]),
            Err(CodecError::InvalidSampleDensity(0))
        );

        let config = CodecConfig::default().with_sample_density(16).with_dac_chunk_width(8);
        let v = CodedVector::build(CodeKind::VlcComma2, &config, 0..100)?;
        assert_eq!(v.sample_density(), Some(16));
        let dac = CodedVector::build(CodeKind::Dac, &config, 0..100)?;
        assert_eq!(dac.sample_density(), None);
        match dac {
            CodedVector::Dac(inner) => assert_eq!(inner.chunk_width(), 8),
            other => panic!("unexpected layout {:?}", other.kind()),
        }
        Ok(())
    }

    #[test]
    fn sizes_in_mega_bytes() -> Result<()> {
        let values: Vec<u64> = (0..50_000u64).map(|i| i * i).collect();
        for kind in CodeKind::ALL {
            let v = CodedVector::build(kind, &CodecConfig::default(), values.iter().copied())?;
            assert!(v.size_in_bytes() > 0);
            assert_eq!(v.size_in_mega_bytes(), v.size_in_bytes() as f64 / 1_048_576.0, "{kind}");
        }
        Ok(())
    }

    #[test]
    fn empty_vectors() -> Result<()> {
        for kind in CodeKind::ALL {
            let v = CodedVector::build(kind, &CodecConfig::default(), [])?;
            assert!(v.is_empty());
            assert_eq!(v.iter().len(), 0);
            assert_eq!(v.summary(), None);
            assert_eq!(v.sum(), 0);
        }
        Ok(())
    }
}
