//! Directly addressable codes.
//!
//! A value is cut into chunks of `b` bits, lowest first. Level `k` holds the
//! `k`-th chunk of every value that has one, in input order, next to a bit
//! telling whether the value continues on level `k + 1`. The position on the
//! next level is the number of continuing values before it, which a small
//! popcount directory answers in constant time.

use core::fmt;

use packed_ints::bit_ops::{WORD_BITS, mask};
use packed_ints::{Aggregate, BitVector, IntVector, mega_bytes};

use crate::{CodecError, DEFAULT_DAC_CHUNK_WIDTH, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Level {
    chunks: IntVector,
    /// Absent on the last level.
    next: Option<Continuation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Continuation {
    bits: BitVector,
    /// Ones in the words before each word of `bits`.
    ranks: IntVector,
}

impl Continuation {
    fn new(bits: BitVector) -> Self {
        let mut ranks = Vec::with_capacity(bits.words().len());
        let mut acc = 0u64;
        for word in bits.words() {
            ranks.push(acc);
            acc += u64::from(word.count_ones());
        }
        Self {
            bits,
            ranks: IntVector::from_slice(&ranks),
        }
    }

    #[inline]
    fn continues(&self, index: usize) -> bool {
        self.bits.get(index).is_ok_and(|bit| bit == 1)
    }

    /// Continuing values strictly before `index`.
    #[inline]
    fn rank(&self, index: usize) -> Result<usize> {
        let word = index / WORD_BITS;
        let below = self.bits.words()[word] & mask(index % WORD_BITS);
        Ok(self.ranks.get(word)? as usize + below.count_ones() as usize)
    }

    fn size_in_bytes(&self) -> usize {
        self.bits.size_in_bytes() + self.ranks.size_in_bytes()
    }
}

/// Immutable sequence with constant-time access whose cost grows with the
/// magnitude of each value rather than the largest one.
///
/// ```rust
/// use packed_codes::DacVector;
///
/// let v = DacVector::new([3, 300, 0, u64::MAX]).unwrap();
/// assert_eq!(v.get(1), Ok(300));
/// assert_eq!(v.get(3), Ok(u64::MAX));
/// assert_eq!(v.num_levels(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DacVector {
    levels: Vec<Level>,
    chunk_width: usize,
    len: usize,
}

impl DacVector {
    pub fn new<I: IntoIterator<Item = u64>>(values: I) -> Result<Self> {
        Self::with_chunk_width(values, DEFAULT_DAC_CHUNK_WIDTH)
    }

    pub fn with_chunk_width<I>(values: I, chunk_width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        if !(1..=WORD_BITS).contains(&chunk_width) {
            return Err(CodecError::InvalidChunkWidth(chunk_width));
        }
        let mut current: Vec<u64> = values.into_iter().collect();
        let len = current.len();
        let mut levels = Vec::new();
        while !current.is_empty() {
            let chunks = IntVector::from_values(current.iter().copied(), chunk_width)?;
            let mut flags = BitVector::with_capacity(current.len())?;
            let mut rest = Vec::new();
            for &value in &current {
                let high = value.checked_shr(chunk_width as u32).unwrap_or(0);
                flags.push(u64::from(high != 0));
                if high != 0 {
                    rest.push(high);
                }
            }
            let next = (!rest.is_empty()).then(|| Continuation::new(flags));
            levels.push(Level { chunks, next });
            current = rest;
        }
        log::debug!(
            "dac_vector: {len} values over {} levels of {chunk_width}-bit chunks",
            levels.len()
        );
        Ok(Self {
            levels,
            chunk_width,
            len,
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

    pub fn chunk_width(&self) -> usize {
        self.chunk_width
    }

    /// Number of levels, i.e. the chunk count of the largest value.
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, index: usize) -> Result<u64> {
        if index >= self.len {
            return Err(CodecError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut value = 0u64;
        let mut pos = index;
        for (k, level) in self.levels.iter().enumerate() {
            value |= level.chunks.get(pos)? << (k * self.chunk_width);
            match &level.next {
                Some(next) if next.continues(pos) => pos = next.rank(pos)?,
                _ => break,
            }
        }
        Ok(value)
    }

    pub fn iter(&self) -> DacIter<'_> {
        DacIter {
            vec: self,
            cursors: vec![0; self.levels.len()],
            index: 0,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.levels
            .iter()
            .map(|l| l.chunks.size_in_bytes() + l.next.as_ref().map_or(0, Continuation::size_in_bytes))
            .sum::<usize>()
            + 2 * core::mem::size_of::<usize>()
    }

    pub fn size_in_mega_bytes(&self) -> f64 {
        mega_bytes(self.size_in_bytes())
    }
}

impl fmt::Debug for DacVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DacVector")
            .field("len", &self.len)
            .field("chunk_width", &self.chunk_width)
            .field("levels", &self.levels.iter().map(|l| l.chunks.len()).collect::<Vec<_>>())
            .finish()
    }
}

impl Aggregate for DacVector {
    type Values<'a> = DacIter<'a>;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a DacVector {
    type Item = u64;
    type IntoIter = DacIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential reader keeping one cursor per level, so no rank query is needed.
pub struct DacIter<'a> {
    vec: &'a DacVector,
    cursors: Vec<usize>,
    index: usize,
}

impl Iterator for DacIter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.index >= self.vec.len {
            return None;
        }
        self.index += 1;
        let mut value = 0u64;
        for (k, level) in self.vec.levels.iter().enumerate() {
            let pos = self.cursors[k];
            self.cursors[k] += 1;
            value |= level.chunks.get(pos).ok()? << (k * self.vec.chunk_width);
            if !level.next.as_ref().is_some_and(|next| next.continues(pos)) {
                break;
            }
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DacIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(values: &[u64], chunk_width: usize) -> Result<()> {
        let v = DacVector::with_chunk_width(values.iter().copied(), chunk_width)?;
        assert_eq!(v.len(), values.len());
        for (i, &x) in values.iter().enumerate() {
            assert_eq!(v.get(i)?, x, "chunk width {chunk_width} index {i}");
        }
        assert_eq!(v.iter().collect::<Vec<_>>(), values);
        Ok(())
    }

    #[test]
    fn every_chunk_width() -> Result<()> {
        let mut values: Vec<u64> = (0..200u64).map(|i| (i * 7919) % 5000).collect();
        values.extend([u64::MAX, 0, 1 << 63, (1 << 32) - 1, 1]);
        for b in 1..=64 {
            check(&values, b)?;
        }
        Ok(())
    }

    #[test]
    fn level_count_follows_largest_value() -> Result<()> {
        assert_eq!(DacVector::new([0, 15])?.num_levels(), 1);
        assert_eq!(DacVector::new([0, 16])?.num_levels(), 2);
        assert_eq!(DacVector::with_chunk_width([u64::MAX], 64)?.num_levels(), 1);
        assert_eq!(DacVector::with_chunk_width([u64::MAX], 7)?.num_levels(), 10);
        Ok(())
    }

    #[test]
    fn rank_crosses_word_boundaries() -> Result<()> {
        // every third value needs a second level
        let values: Vec<u64> = (0..500u64).map(|i| if i % 3 == 0 { 100 + i } else { i % 16 }).collect();
        check(&values, 4)
    }

    #[test]
    fn errors() -> Result<()> {
        assert_eq!(
            DacVector::with_chunk_width([1], 0),
            Err(CodecError::InvalidChunkWidth(0))
        );
        assert_eq!(
            DacVector::with_chunk_width([1], 65),
            Err(CodecError::InvalidChunkWidth(65))
        );
        let v = DacVector::new([])?;
        assert!(v.is_empty());
        assert_eq!(v.num_levels(), 0);
        assert_eq!(v.get(0), Err(CodecError::IndexOutOfRange { index: 0, len: 0 }));
        assert_eq!(v.min_value(), None);
        Ok(())
    }

    #[test]
    fn aggregates() -> Result<()> {
        let v = DacVector::new([17, 2, 4096])?;
        assert_eq!(v.summary().map(|s| (s.min, s.max, s.sum)), Some((2, 4096, 4115)));
        Ok(())
    }
}
