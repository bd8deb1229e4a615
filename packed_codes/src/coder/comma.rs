use super::Coder;
use packed_ints::BitBuf;

/// Comma code with `W`-bit digits.
///
/// A value is written in base `2^W - 1`, least significant digit first, and
/// closed by the reserved digit `2^W - 1` (all ones), which never occurs as a
/// data digit. `Comma<2>` uses base 3. Zero is the comma alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comma<const W: usize>;

impl<const W: usize> Comma<W> {
    const VALID: () = assert!(W >= 2 && W <= 32, "comma digit width must be in 2..=32");

    /// The terminating digit, also the number base.
    pub const COMMA: u64 = (1 << W) - 1;
}

impl<const W: usize> Coder for Comma<W> {
    const NAME: &'static str = "comma";

    fn encode(value: u64, out: &mut BitBuf) {
        let () = Self::VALID;
        let mut rest = value;
        while rest > 0 {
            out.push_bits(rest % Self::COMMA, W);
            rest /= Self::COMMA;
        }
        out.push_bits(Self::COMMA, W);
    }

    fn decode(buf: &BitBuf, pos: &mut usize) -> Option<u64> {
        let () = Self::VALID;
        let mut p = *pos;
        let mut value = 0u128;
        let mut scale = 1u128;
        loop {
            let digit = buf.get_bits(p, W).ok()?;
            p += W;
            if digit == Self::COMMA {
                break;
            }
            value = value.checked_add(u128::from(digit).checked_mul(scale)?)?;
            scale = scale.checked_mul(u128::from(Self::COMMA))?;
        }
        *pos = p;
        u64::try_from(value).ok()
    }

    fn encoded_len(value: u64) -> usize {
        let mut digits = 1;
        let mut rest = value;
        while rest > 0 {
            rest /= Self::COMMA;
            digits += 1;
        }
        digits * W
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_three_digits() {
        assert_eq!(Comma::<2>::COMMA, 3);

        let mut buf = BitBuf::new();
        Comma::<2>::encode(0, &mut buf);
        assert_eq!(buf.get_bits(0, 2), Ok(0b11));

        // 7 = 1 + 2 * 3: digits 1, 2, then the comma
        let mut buf = BitBuf::new();
        Comma::<2>::encode(7, &mut buf);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.get_bits(0, 6), Ok(0b11_10_01));
    }

    #[test]
    fn overflowing_digit_run_is_rejected() {
        let mut buf = BitBuf::new();
        for _ in 0..60 {
            buf.push_bits(2, 2);
        }
        buf.push_bits(3, 2);
        let mut pos = 0;
        assert_eq!(Comma::<2>::decode(&buf, &mut pos), None);
    }
}
