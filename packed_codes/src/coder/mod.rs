//! Self-delimiting integer codes over a [`BitBuf`].
//!
//! Every coder maps the whole `u64` range to a prefix-free codeword. Codewords
//! are written least significant bit first, matching the layout of
//! [`BitBuf`] itself.
//!
//! ```rust
//! use packed_codes::coder::{Coder, EliasDelta, Fibonacci};
//! use packed_ints::BitBuf;
//!
//! let mut buf = BitBuf::new();
//! EliasDelta::encode(1000, &mut buf);
//! Fibonacci::encode(7, &mut buf);
//!
//! let mut pos = 0;
//! assert_eq!(EliasDelta::decode(&buf, &mut pos), Some(1000));
//! assert_eq!(Fibonacci::decode(&buf, &mut pos), Some(7));
//! assert_eq!(pos, buf.len());
//! ```

mod comma;
mod elias_delta;
mod elias_gamma;
mod fibonacci;

pub use comma::Comma;
pub use elias_delta::EliasDelta;
pub use elias_gamma::EliasGamma;
pub use fibonacci::Fibonacci;

use packed_ints::BitBuf;
use packed_ints::bit_ops::mask;

/// A prefix-free code for non-negative integers.
pub trait Coder {
    /// Short name used in logs and code kind names.
    const NAME: &'static str;

    /// Appends the codeword of `value`.
    fn encode(value: u64, out: &mut BitBuf);

    /// Decodes the codeword starting at `*pos` and advances `*pos` past it.
    ///
    /// Returns `None` if the buffer ends before the codeword does.
    fn decode(buf: &BitBuf, pos: &mut usize) -> Option<u64>;

    /// Length in bits of the codeword of `value`.
    fn encoded_len(value: u64) -> usize;

    /// Skips `count` codewords.
    fn skip(buf: &BitBuf, pos: &mut usize, count: usize) -> Option<()> {
        for _ in 0..count {
            Self::decode(buf, pos)?;
        }
        Some(())
    }
}

/// Bits needed for a positive value of up to 65 bits.
#[inline]
pub(crate) fn bit_width(y: u128) -> usize {
    debug_assert!(y > 0);
    (u128::BITS - y.leading_zeros()) as usize
}

/// Gamma codeword of a positive value `y < 2^65`: `n - 1` zeros, a one, then
/// the low `n - 1` bits of `y`, where `n` is the bit width of `y`.
pub(crate) fn write_gamma(y: u128, out: &mut BitBuf) {
    let low = bit_width(y) - 1;
    out.push_zeros(low);
    out.push_bit(true);
    out.push_bits(y as u64 & mask(low), low);
}

pub(crate) fn read_gamma(buf: &BitBuf, pos: &mut usize) -> Option<u128> {
    let one = buf.next_one(*pos)?;
    let low = one - *pos;
    if low > 64 {
        return None;
    }
    *pos = one + 1;
    let y = (1u128 << low) | u128::from(read_low_bits(buf, pos, low)?);
    Some(y)
}

/// Reads `len` bits (0..=64) at `*pos` and advances past them.
#[inline]
pub(crate) fn read_low_bits(buf: &BitBuf, pos: &mut usize, len: usize) -> Option<u64> {
    if len == 0 {
        return Some(0);
    }
    let bits = buf.get_bits(*pos, len).ok()?;
    *pos += len;
    Some(bits)
}

/// Maps a wrapping difference onto small codes for small magnitudes of either sign.
#[inline(always)]
pub(crate) fn zigzag(delta: u64) -> u64 {
    let d = delta as i64;
    ((d << 1) ^ (d >> 63)) as u64
}

#[inline(always)]
pub(crate) fn unzigzag(z: u64) -> u64 {
    ((z >> 1) as i64 ^ -((z & 1) as i64)) as u64
}
