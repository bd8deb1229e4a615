//! Growable bit buffer backed by a [`Container<u64>`].
//!
//! # Examples
//!
//! ```rust
//! use packed_ints::BitBuf;
//!
//! let mut buf = BitBuf::new();
//! buf.push_bits(0b101, 3);
//! buf.push_bit(true);
//!
//! assert_eq!(buf.len(), 4);
//! assert_eq!(buf.get_bits(0, 4), Ok(0b1101));
//! assert_eq!(buf.next_one(1), Some(2));
//! ```

use crate::bit_ops::{self, WORD_BITS, words_for};
use crate::{PackedIntsError, Result};
use raw_words::Container;

/// Owned run of bits with random access.
///
/// Bits past `len()` inside the last word are always zero, so whole-word
/// comparisons and population counts never see stale data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuf {
    words: Container<u64>,
    len: usize,
}

impl BitBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Container::with_capacity(words_for(bits)),
            len: 0,
        }
    }

    /// `len` zero bits.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: Container::zeroed(words_for(len)),
            len,
        }
    }

    /// Number of bits stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bits allocated.
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_BITS
    }

    pub fn words(&self) -> &[u64] {
        self.words.as_slice()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.words.size_in_bytes() + core::mem::size_of::<usize>()
    }

    #[inline]
    fn check_range(&self, pos: usize, len: usize) -> Result<()> {
        if !(1..=WORD_BITS).contains(&len) || pos.checked_add(len).is_none_or(|end| end > self.len) {
            return Err(PackedIntsError::BitRangeOutOfBounds {
                pos,
                len,
                bit_len: self.len,
            });
        }
        Ok(())
    }

    /// Reads `len` bits (1..=64) starting at `pos`.
    pub fn get_bits(&self, pos: usize, len: usize) -> Result<u64> {
        self.check_range(pos, len)?;
        Ok(bit_ops::get_bits(self.words.as_slice(), pos, len))
    }

    /// Overwrites `len` bits (1..=64) at `pos` with the low bits of `value`.
    pub fn set_bits(&mut self, pos: usize, value: u64, len: usize) -> Result<()> {
        self.check_range(pos, len)?;
        bit_ops::set_bits(self.words.as_mut_slice(), pos, len, value);
        Ok(())
    }

    /// Unchecked read for callers that already validated the range.
    #[inline(always)]
    pub(crate) fn read(&self, pos: usize, len: usize) -> u64 {
        bit_ops::get_bits(self.words.as_slice(), pos, len)
    }

    #[inline(always)]
    pub(crate) fn write(&mut self, pos: usize, len: usize, value: u64) {
        bit_ops::set_bits(self.words.as_mut_slice(), pos, len, value);
    }

    pub fn get_bit(&self, pos: usize) -> Option<bool> {
        (pos < self.len).then(|| bit_ops::get_bit(self.words.as_slice(), pos))
    }

    pub fn set_bit(&mut self, pos: usize, bit: bool) -> Result<()> {
        self.check_range(pos, 1)?;
        bit_ops::set_bit(self.words.as_mut_slice(), pos, bit);
        Ok(())
    }

    pub fn push_bit(&mut self, bit: bool) {
        self.grow(1);
        if bit {
            bit_ops::set_bit(self.words.as_mut_slice(), self.len - 1, true);
        }
    }

    /// Appends the low `len` bits of `value`. `len` may be zero.
    pub fn push_bits(&mut self, value: u64, len: usize) {
        debug_assert!(len <= WORD_BITS);
        if len == 0 {
            return;
        }
        let pos = self.len;
        self.grow(len);
        bit_ops::set_bits(self.words.as_mut_slice(), pos, len, value);
    }

    /// Appends `count` zero bits.
    pub fn push_zeros(&mut self, count: usize) {
        self.grow(count);
    }

    /// # Panics
    ///
    /// If the bit length would overflow `usize`.
    fn grow(&mut self, extra: usize) {
        self.len = match self.len.checked_add(extra) {
            Some(len) => len,
            None => bit_length_overflow(),
        };
        let needed = words_for(self.len);
        if needed > self.words.len() {
            self.words.resize(needed);
        }
    }

    /// Resizes to `len` bits. New bits are zero.
    pub fn resize(&mut self, len: usize) {
        if len >= self.len {
            self.grow(len - self.len);
            return;
        }
        self.len = len;
        self.words.resize(words_for(len));
        self.clear_tail();
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    pub fn shrink_to_fit(&mut self) {
        self.words.shrink_to_fit();
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            let last = self.words.len() - 1;
            self.words[last] &= bit_ops::mask(used);
        }
    }

    /// Complements every stored bit.
    pub fn flip_all(&mut self) {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
        self.clear_tail();
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Position of the first set bit at or after `pos`.
    pub fn next_one(&self, pos: usize) -> Option<usize> {
        let words = self.words.as_slice();
        let mut block = pos / WORD_BITS;
        if pos >= self.len || block >= words.len() {
            return None;
        }
        let mut word = words[block] & (u64::MAX << (pos % WORD_BITS));
        loop {
            if word != 0 {
                let found = block * WORD_BITS + word.trailing_zeros() as usize;
                return (found < self.len).then_some(found);
            }
            block += 1;
            if block >= words.len() {
                return None;
            }
            word = words[block];
        }
    }

    /// Applies `op` word by word against a buffer of the same length.
    pub(crate) fn zip_words(&mut self, other: &BitBuf, op: impl Fn(u64, u64) -> u64) {
        debug_assert_eq!(self.len, other.len);
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a = op(*a, b);
        }
        self.clear_tail();
    }
}

#[cold]
fn bit_length_overflow() -> ! {
    panic!("bit length overflows usize")
}
