use core::fmt;
use core::marker::PhantomData;

use packed_ints::{Aggregate, BitBuf, mega_bytes};

use crate::coder::Coder;
use crate::sample::SampleTable;
use crate::{CodecError, DEFAULT_SAMPLE_DENSITY, Result};

/// Immutable sequence storing every value directly as a codeword of `C`.
///
/// Random access jumps to the nearest preceding sample and decodes forward,
/// touching at most `sample_density - 1` extra codewords.
///
/// ```rust
/// use packed_codes::VlcVector;
/// use packed_codes::coder::Fibonacci;
///
/// let v = VlcVector::<Fibonacci>::new([5, 0, 13, 1 << 40]).unwrap();
/// assert_eq!(v.len(), 4);
/// assert_eq!(v.get(2), Ok(13));
/// assert_eq!(v.iter().collect::<Vec<_>>(), vec![5, 0, 13, 1 << 40]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct VlcVector<C> {
    payload: BitBuf,
    samples: SampleTable,
    len: usize,
    _coder: PhantomData<C>,
}

impl<C: Coder> VlcVector<C> {
    pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Result<Self> {
        Self::with_sample_density(values, DEFAULT_SAMPLE_DENSITY)
    }

    pub fn with_sample_density<I>(values: I, sample_density: usize) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut samples = SampleTable::builder(sample_density)?;
        let mut payload = BitBuf::new();
        let mut len = 0;
        for value in values {
            samples.observe(len, payload.len());
            C::encode(value, &mut payload);
            len += 1;
        }
        payload.shrink_to_fit();
        log::debug!(
            "vlc_vector_{}: {len} values in {} bits, sample density {sample_density}",
            C::NAME,
            payload.len()
        );
        Ok(Self {
            payload,
            samples: samples.finish(),
            len,
            _coder: PhantomData,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn sample_density(&self) -> usize {
        self.samples.density()
    }

    /// Length of the encoded payload in bits.
    pub fn bit_len(&self) -> usize {
        self.payload.len()
    }

    pub fn get(&self, index: usize) -> Result<u64> {
        if index >= self.len {
            return Err(CodecError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let (_, mut pos, skip) = self.samples.locate(index)?;
        C::skip(&self.payload, &mut pos, skip).ok_or(CodecError::CorruptPayload { pos })?;
        C::decode(&self.payload, &mut pos).ok_or(CodecError::CorruptPayload { pos })
    }

    /// Decodes sequentially without going back to the samples.
    pub fn iter(&self) -> VlcIter<'_, C> {
        VlcIter {
            payload: &self.payload,
            pos: 0,
            remaining: self.len,
            _coder: PhantomData,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.payload.size_in_bytes() + self.samples.size_in_bytes() + core::mem::size_of::<usize>()
    }

    pub fn size_in_mega_bytes(&self) -> f64 {
        mega_bytes(self.size_in_bytes())
    }
}

impl<C> fmt::Debug for VlcVector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VlcVector")
            .field("len", &self.len)
            .field("bit_len", &self.payload.len())
            .field("sample_density", &self.samples.density())
            .finish()
    }
}

impl<C: Coder> Aggregate for VlcVector<C> {
    type Values<'a>
        = VlcIter<'a, C>
    where
        Self: 'a;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<'a, C: Coder> IntoIterator for &'a VlcVector<C> {
    type Item = u64;
    type IntoIter = VlcIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct VlcIter<'a, C> {
    payload: &'a BitBuf,
    pos: usize,
    remaining: usize,
    _coder: PhantomData<C>,
}

impl<C: Coder> Iterator for VlcIter<'_, C> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = C::decode(self.payload, &mut self.pos);
        if value.is_none() {
            self.remaining = 0;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: Coder> ExactSizeIterator for VlcIter<'_, C> {}
