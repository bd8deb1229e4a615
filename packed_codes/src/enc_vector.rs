use core::fmt;
use core::marker::PhantomData;

use packed_ints::{Aggregate, BitBuf, IntVector, mega_bytes};

use crate::coder::{Coder, unzigzag, zigzag};
use crate::sample::SampleTable;
use crate::{CodecError, DEFAULT_SAMPLE_DENSITY, Result};

/// Immutable sequence storing differences between neighbours as codewords of `C`.
///
/// The first element of every block of `sample_density` values is kept
/// verbatim in an anchor vector; the others are stored as the zigzag-mapped
/// wrapping difference to their predecessor. Sorted or slowly varying data
/// compresses to a few bits per element, arbitrary data still round-trips.
///
/// ```rust
/// use packed_codes::EncVector;
/// use packed_codes::coder::EliasDelta;
///
/// let v = EncVector::<EliasDelta>::new((0..1000).map(|i| 10_000 + 3 * i)).unwrap();
/// assert_eq!(v.get(999), Ok(12_997));
/// // anchors aside, each step of 3 costs 5 bits
/// assert!(v.bit_len() < 1000 * 5);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EncVector<C> {
    payload: BitBuf,
    samples: SampleTable,
    anchors: IntVector,
    len: usize,
    _coder: PhantomData<C>,
}

impl<C: Coder> EncVector<C> {
    pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Result<Self> {
        Self::with_sample_density(values, DEFAULT_SAMPLE_DENSITY)
    }

    pub fn with_sample_density<I>(values: I, sample_density: usize) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut samples = SampleTable::builder(sample_density)?;
        let mut anchors = Vec::new();
        let mut payload = BitBuf::new();
        let mut prev = 0u64;
        let mut len = 0;
        for value in values {
            if samples.observe(len, payload.len()) {
                anchors.push(value);
            } else {
                C::encode(zigzag(value.wrapping_sub(prev)), &mut payload);
            }
            prev = value;
            len += 1;
        }
        payload.shrink_to_fit();
        log::debug!(
            "enc_vector_{}: {len} values in {} bits plus {} anchors",
            C::NAME,
            payload.len(),
            anchors.len()
        );
        Ok(Self {
            payload,
            samples: samples.finish(),
            anchors: IntVector::from_slice(&anchors),
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

    /// Length of the difference payload in bits, anchors excluded.
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
        let (block, mut pos, steps) = self.samples.locate(index)?;
        let mut value = self.anchors.get(block)?;
        for _ in 0..steps {
            let z = C::decode(&self.payload, &mut pos).ok_or(CodecError::CorruptPayload { pos })?;
            value = value.wrapping_add(unzigzag(z));
        }
        Ok(value)
    }

    /// Decodes sequentially, picking up each anchor as its block starts.
    pub fn iter(&self) -> EncIter<'_, C> {
        EncIter {
            vec: self,
            index: 0,
            pos: 0,
            prev: 0,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.payload.size_in_bytes()
            + self.samples.size_in_bytes()
            + self.anchors.size_in_bytes()
            + core::mem::size_of::<usize>()
    }

    pub fn size_in_mega_bytes(&self) -> f64 {
        mega_bytes(self.size_in_bytes())
    }
}

impl<C> fmt::Debug for EncVector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncVector")
            .field("len", &self.len)
            .field("bit_len", &self.payload.len())
            .field("sample_density", &self.samples.density())
            .field("anchor_width", &self.anchors.width())
            .finish()
    }
}

impl<C: Coder> Aggregate for EncVector<C> {
    type Values<'a>
        = EncIter<'a, C>
    where
        Self: 'a;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<'a, C: Coder> IntoIterator for &'a EncVector<C> {
    type Item = u64;
    type IntoIter = EncIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct EncIter<'a, C> {
    vec: &'a EncVector<C>,
    index: usize,
    pos: usize,
    prev: u64,
}

impl<C: Coder> Iterator for EncIter<'_, C> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.index >= self.vec.len {
            return None;
        }
        let density = self.vec.samples.density();
        let value = if self.index % density == 0 {
            self.vec.anchors.get(self.index / density).ok()?
        } else {
            let z = C::decode(&self.vec.payload, &mut self.pos)?;
            self.prev.wrapping_add(unzigzag(z))
        };
        self.prev = value;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: Coder> ExactSizeIterator for EncIter<'_, C> {}
