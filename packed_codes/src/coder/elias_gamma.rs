use super::{Coder, bit_width, read_gamma, write_gamma};
use packed_ints::BitBuf;

/// Elias-gamma code of `x + 1`: its bit width in unary, then the bits below
/// the leading one.
///
/// `2 * floor(log2(x + 1)) + 1` bits; best for values that are mostly small.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasGamma;

impl Coder for EliasGamma {
    const NAME: &'static str = "elias_gamma";

    #[inline]
    fn encode(value: u64, out: &mut BitBuf) {
        write_gamma(u128::from(value) + 1, out);
    }

    #[inline]
    fn decode(buf: &BitBuf, pos: &mut usize) -> Option<u64> {
        read_gamma(buf, pos).map(|y| (y - 1) as u64)
    }

    fn encoded_len(value: u64) -> usize {
        2 * bit_width(u128::from(value) + 1) - 1
    }
}
