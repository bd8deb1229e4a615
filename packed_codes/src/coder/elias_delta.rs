use super::{Coder, bit_width, read_gamma, read_low_bits, write_gamma};
use packed_ints::BitBuf;
use packed_ints::bit_ops::mask;

/// Elias-delta code of `x + 1`: the bit width gamma-coded, then the bits below
/// the leading one.
///
/// Asymptotically shorter than [`EliasGamma`](super::EliasGamma) for large values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliasDelta;

impl Coder for EliasDelta {
    const NAME: &'static str = "elias_delta";

    fn encode(value: u64, out: &mut BitBuf) {
        let y = u128::from(value) + 1;
        let n = bit_width(y);
        write_gamma(n as u128, out);
        out.push_bits(y as u64 & mask(n - 1), n - 1);
    }

    fn decode(buf: &BitBuf, pos: &mut usize) -> Option<u64> {
        let n = read_gamma(buf, pos)?;
        if !(1..=65).contains(&n) {
            return None;
        }
        let low = n as usize - 1;
        let y = (1u128 << low) | u128::from(read_low_bits(buf, pos, low)?);
        Some((y - 1) as u64)
    }

    fn encoded_len(value: u64) -> usize {
        let n = bit_width(u128::from(value) + 1);
        2 * bit_width(n as u128) - 1 + n - 1
    }
}
