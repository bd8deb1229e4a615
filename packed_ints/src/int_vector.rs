//! Integer vector with a runtime element width of 1 to 64 bits.
//!
//! # Examples
//!
//! ```rust
//! use packed_ints::{Aggregate, IntVector};
//!
//! let mut v = IntVector::from_elem(0, 0, 10).expect("valid width");
//! assert!(v.is_empty());
//!
//! v.resize(4).unwrap();
//! v.set(1, 1023).unwrap();
//! v.set(2, 1024).unwrap(); // masked to 10 bits
//!
//! assert_eq!(v.get(1), Ok(1023));
//! assert_eq!(v.get(2), Ok(0));
//! assert_eq!(v.max_value(), Some(1023));
//! assert_eq!(v.sum(), 1023);
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::bit_ops::{self, WORD_BITS, needed_bits};
use crate::iter::Iter;
use crate::{Aggregate, BitBuf, PackedIntsError, Result, mega_bytes};

/// Validates an element width.
#[inline(always)]
pub(crate) fn validate_width(width: usize) -> Result<()> {
    if (1..=WORD_BITS).contains(&width) {
        Ok(())
    } else {
        Err(PackedIntsError::InvalidWidth(width))
    }
}

/// Bits taken by `len` elements of `width` bits.
#[inline]
fn bits_for(len: usize, width: usize) -> Result<usize> {
    len.checked_mul(width)
        .ok_or(PackedIntsError::LengthOverflow { len, width })
}

/// Vector of unsigned integers, each stored in exactly `width` bits.
///
/// Element `i` occupies bits `i * width .. (i + 1) * width` of the backing
/// buffer. Every write stores the low `width` bits of its argument; wider
/// values are masked, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntVector {
    bits: BitBuf,
    len: usize,
    width: usize,
}

impl IntVector {
    /// Creates an empty vector of `width`-bit integers.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::InvalidWidth`] if `width` is not in `1..=64`.
    pub fn new(width: usize) -> Result<Self> {
        validate_width(width)?;
        Ok(Self {
            bits: BitBuf::new(),
            len: 0,
            width,
        })
    }

    /// Creates an empty vector with space reserved for `capacity` elements.
    pub fn with_capacity(capacity: usize, width: usize) -> Result<Self> {
        validate_width(width)?;
        Ok(Self {
            bits: BitBuf::with_capacity(bits_for(capacity, width)?),
            len: 0,
            width,
        })
    }

    /// Creates `len` elements of `width` bits, all set to `fill` (masked).
    ///
    /// ```
    /// use packed_ints::IntVector;
    ///
    /// let v = IntVector::from_elem(3, 7, 3).unwrap();
    /// assert_eq!(v.iter().collect::<Vec<_>>(), vec![7, 7, 7]);
    /// assert!(IntVector::from_elem(3, 7, 65).is_err());
    /// ```
    pub fn from_elem(len: usize, fill: u64, width: usize) -> Result<Self> {
        validate_width(width)?;
        let mut v = Self {
            bits: BitBuf::zeroed(bits_for(len, width)?),
            len,
            width,
        };
        if fill & bit_ops::mask(width) != 0 {
            for i in 0..len {
                v.bits.write(i * width, width, fill);
            }
        }
        Ok(v)
    }

    /// Builds a vector from `values`, masking each to `width` bits.
    pub fn from_values<I>(values: I, width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let values = values.into_iter();
        let mut v = Self::with_capacity(values.size_hint().0, width)?;
        v.extend(values);
        Ok(v)
    }

    /// Builds a vector whose width is the minimum able to hold every value.
    ///
    /// ```
    /// use packed_ints::IntVector;
    ///
    /// let v = IntVector::from_slice(&[5, 256, 0]);
    /// assert_eq!(v.width(), 9);
    /// assert_eq!(v.get(1), Ok(256));
    /// ```
    pub fn from_slice(values: &[u64]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        let width = needed_bits(max);
        let mut v = Self {
            bits: BitBuf::with_capacity(values.len().saturating_mul(width)),
            len: 0,
            width,
        };
        v.extend(values.iter().copied());
        v
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the vector holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bits per element.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest element count addressable at the current width.
    pub fn max_len(&self) -> usize {
        usize::MAX / self.width
    }

    /// Bits occupied by the elements, `len() * width()`.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Bits allocated for elements.
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.bits.size_in_bytes() + 2 * core::mem::size_of::<usize>()
    }

    /// [`size_in_bytes`](Self::size_in_bytes) in MiB.
    pub fn size_in_mega_bytes(&self) -> f64 {
        mega_bytes(self.size_in_bytes())
    }

    /// Raw words of the packed buffer.
    pub fn words(&self) -> &[u64] {
        self.bits.words()
    }

    /// The packed buffer viewed as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.bits.words())
    }

    pub(crate) fn bits(&self) -> &BitBuf {
        &self.bits
    }

    pub(crate) fn bits_mut(&mut self) -> &mut BitBuf {
        &mut self.bits
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(PackedIntsError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u64> {
        self.check_index(index)?;
        Ok(self.value(index))
    }

    /// Element read without a bounds check on `index`.
    #[inline(always)]
    pub(crate) fn value(&self, index: usize) -> u64 {
        self.bits.read(index * self.width, self.width)
    }

    /// Stores the low `width()` bits of `value` at `index`.
    ///
    /// Nothing is written when the index is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, value: u64) -> Result<()> {
        self.check_index(index)?;
        self.bits.write(index * self.width, self.width, value);
        Ok(())
    }

    /// Appends the low `width()` bits of `value`.
    ///
    /// # Panics
    ///
    /// If the vector already holds [`max_len()`](Self::max_len) elements.
    /// [`try_push`](Self::try_push) reports this as an error instead.
    pub fn push(&mut self, value: u64) {
        if let Err(e) = self.try_push(value) {
            panic!("{e}");
        }
    }

    /// Appends the low `width()` bits of `value`.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::LengthOverflow`] if the vector is already at
    /// [`max_len()`](Self::max_len).
    pub fn try_push(&mut self, value: u64) -> Result<()> {
        if self.len >= self.max_len() {
            return Err(PackedIntsError::LengthOverflow {
                len: self.len.saturating_add(1),
                width: self.width,
            });
        }
        self.bits.push_bits(value, self.width);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<u64> {
        let last = self.len.checked_sub(1)?;
        let value = self.value(last);
        self.set_len(last);
        Some(value)
    }

    /// Grows or shrinks to `new_len` elements; new elements are zero.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::LengthOverflow`] if `new_len` exceeds
    /// [`max_len()`](Self::max_len). The vector is left unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        bits_for(new_len, self.width)?;
        log::trace!(
            "resizing int vector: {} -> {} elements of {} bits",
            self.len,
            new_len,
            self.width
        );
        self.set_len(new_len);
        Ok(())
    }

    /// `new_len * width` must not overflow.
    fn set_len(&mut self, new_len: usize) {
        self.bits.resize(new_len * self.width);
        self.len = new_len;
    }

    /// Resizes to `bits / width()` elements.
    pub fn bit_resize(&mut self, bits: usize) {
        self.set_len(bits / self.width);
    }

    pub fn clear(&mut self) {
        self.bits.clear();
        self.len = 0;
    }

    pub fn shrink_to_fit(&mut self) {
        self.bits.shrink_to_fit();
    }

    /// Reads `len` raw bits (1..=64) at bit offset `pos`, ignoring element boundaries.
    pub fn get_bits(&self, pos: usize, len: usize) -> Result<u64> {
        self.bits.get_bits(pos, len)
    }

    /// Writes `len` raw bits (1..=64) at bit offset `pos`, ignoring element boundaries.
    pub fn set_bits(&mut self, pos: usize, value: u64, len: usize) -> Result<()> {
        self.bits.set_bits(pos, value, len)
    }

    /// Repacks every element into `new_width` bits, masking wider values.
    pub fn convert_width(&mut self, new_width: usize) -> Result<()> {
        validate_width(new_width)?;
        if new_width == self.width {
            return Ok(());
        }
        log::debug!(
            "converting {} elements from {} to {} bits",
            self.len,
            self.width,
            new_width
        );
        bits_for(self.len, new_width)?;
        self.repack(new_width);
        Ok(())
    }

    /// `new_width` must be valid and hold `len` elements.
    fn repack(&mut self, new_width: usize) {
        let mut bits = BitBuf::zeroed(self.len * new_width);
        for (i, v) in self.iter().enumerate() {
            bits.write(i * new_width, new_width, v);
        }
        self.bits = bits;
        self.width = new_width;
    }

    /// Shrinks the width to the minimum needed by the largest element.
    pub fn bit_compress(&mut self) {
        let width = needed_bits(self.max_value().unwrap_or(0));
        if width < self.width {
            log::debug!("bit-compressing {} -> {} bits", self.width, width);
            self.repack(width);
        }
    }

    /// Complements every bit. Defined only for width 1.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::UnsupportedOperation`] for any other width.
    pub fn flip(&mut self) -> Result<()> {
        if self.width != 1 {
            return Err(PackedIntsError::UnsupportedOperation(
                "flip requires an element width of 1",
            ));
        }
        self.bits.flip_all();
        Ok(())
    }

    fn check_compatible(&self, other: &IntVector) -> Result<()> {
        if self.len != other.len {
            return Err(PackedIntsError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        if self.width != other.width {
            return Err(PackedIntsError::WidthMismatch {
                expected: self.width,
                found: other.width,
            });
        }
        Ok(())
    }

    /// Element-wise bitwise AND with a vector of the same length and width.
    pub fn and_with(&mut self, other: &IntVector) -> Result<()> {
        self.check_compatible(other)?;
        self.bits.zip_words(&other.bits, |a, b| a & b);
        Ok(())
    }

    /// Element-wise bitwise OR with a vector of the same length and width.
    pub fn or_with(&mut self, other: &IntVector) -> Result<()> {
        self.check_compatible(other)?;
        self.bits.zip_words(&other.bits, |a, b| a | b);
        Ok(())
    }

    /// Element-wise bitwise XOR with a vector of the same length and width.
    pub fn xor_with(&mut self, other: &IntVector) -> Result<()> {
        self.check_compatible(other)?;
        self.bits.zip_words(&other.bits, |a, b| a ^ b);
        Ok(())
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Default for IntVector {
    /// An empty vector of 64-bit integers.
    fn default() -> Self {
        Self {
            bits: BitBuf::new(),
            len: 0,
            width: WORD_BITS,
        }
    }
}

impl Extend<u64> for IntVector {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Aggregate for IntVector {
    type Values<'a> = Iter<'a>;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl PartialOrd for IntVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntVector {
    /// Lexicographic over the values, then length, then width.
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter()
            .cmp(other.iter())
            .then_with(|| self.width.cmp(&other.width))
    }
}

impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
