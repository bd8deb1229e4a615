use super::Coder;
use packed_ints::BitBuf;

const FIB_LEN: usize = 93;

/// `FIB[i]` is the Fibonacci number F(i + 2): 1, 2, 3, 5, 8, ...
/// The last entry is the first one above 2^64.
const FIB: [u128; FIB_LEN] = {
    let mut fib = [0u128; FIB_LEN];
    fib[0] = 1;
    fib[1] = 2;
    let mut i = 2;
    while i < FIB_LEN {
        fib[i] = fib[i - 1] + fib[i - 2];
        i += 1;
    }
    fib
};

/// Fibonacci code of `x + 1`: its Zeckendorf representation, smallest term
/// first, closed by an extra one bit.
///
/// No two adjacent ones occur inside a codeword, so `11` marks every codeword
/// end and a decoder can resynchronise after a damaged bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fibonacci;

/// Zeckendorf digits of `y > 0` as a bit mask, and the index of the top term.
fn zeckendorf(y: u128) -> (u128, usize) {
    let top = FIB.iter().rposition(|&f| f <= y).unwrap_or(0);
    let mut rest = y;
    let mut digits = 0u128;
    for i in (0..=top).rev() {
        if FIB[i] <= rest {
            digits |= 1 << i;
            rest -= FIB[i];
        }
    }
    (digits, top)
}

impl Coder for Fibonacci {
    const NAME: &'static str = "fibonacci";

    fn encode(value: u64, out: &mut BitBuf) {
        let (digits, top) = zeckendorf(u128::from(value) + 1);
        let code = digits | (1 << (top + 1));
        let len = top + 2;
        if len <= 64 {
            out.push_bits(code as u64, len);
        } else {
            out.push_bits(code as u64, 64);
            out.push_bits((code >> 64) as u64, len - 64);
        }
    }

    fn decode(buf: &BitBuf, pos: &mut usize) -> Option<u64> {
        let mut y = 0u128;
        let mut prev = false;
        let mut p = *pos;
        for &f in FIB.iter() {
            let bit = buf.get_bit(p)?;
            p += 1;
            if bit && prev {
                *pos = p;
                return Some((y - 1) as u64);
            }
            if bit {
                y += f;
            }
            prev = bit;
        }
        None
    }

    fn encoded_len(value: u64) -> usize {
        zeckendorf(u128::from(value) + 1).1 + 2
    }
}
