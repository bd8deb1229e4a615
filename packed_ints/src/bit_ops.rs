//! Word-level bit manipulation over little-endian `u64` slices.
//!
//! Bit `i` of a slice lives in word `i / 64` at position `i % 64`. A field of
//! `width` bits may straddle two adjacent words; both accessors handle that
//! with one extra shift-and-mask and never allocate.

pub const WORD_BITS: usize = 64;

/// Mask covering the low `width` bits. `width` must be in `0..=64`.
#[inline(always)]
pub const fn mask(width: usize) -> u64 {
    if width >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Minimal width able to represent `value`; zero still needs one bit.
#[inline]
pub const fn needed_bits(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        WORD_BITS - value.leading_zeros() as usize
    }
}

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Reads `width` bits (1..=64) starting at bit `pos`.
#[inline(always)]
pub fn get_bits(words: &[u64], pos: usize, width: usize) -> u64 {
    debug_assert!((1..=WORD_BITS).contains(&width));
    let block = pos / WORD_BITS;
    let shift = pos % WORD_BITS;
    if shift + width <= WORD_BITS {
        (words[block] >> shift) & mask(width)
    } else {
        ((words[block] >> shift) | (words[block + 1] << (WORD_BITS - shift))) & mask(width)
    }
}

/// Writes the low `width` bits (1..=64) of `value` starting at bit `pos`.
#[inline(always)]
pub fn set_bits(words: &mut [u64], pos: usize, width: usize, value: u64) {
    debug_assert!((1..=WORD_BITS).contains(&width));
    let value = value & mask(width);
    let block = pos / WORD_BITS;
    let shift = pos % WORD_BITS;

    words[block] &= !(mask(width) << shift);
    words[block] |= value << shift;

    if shift + width > WORD_BITS {
        let spill = shift + width - WORD_BITS;
        words[block + 1] &= !mask(spill);
        words[block + 1] |= value >> (WORD_BITS - shift);
    }
}

#[inline(always)]
pub fn get_bit(words: &[u64], pos: usize) -> bool {
    (words[pos / WORD_BITS] >> (pos % WORD_BITS)) & 1 == 1
}

#[inline(always)]
pub fn set_bit(words: &mut [u64], pos: usize, bit: bool) {
    let m = 1u64 << (pos % WORD_BITS);
    if bit {
        words[pos / WORD_BITS] |= m;
    } else {
        words[pos / WORD_BITS] &= !m;
    }
}
