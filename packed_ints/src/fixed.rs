//! Integer vectors whose width is fixed at compile time.
//!
//! ```rust
//! use packed_ints::{Aggregate, BitVector, IntVector16};
//!
//! let mut v = IntVector16::from_elem(3, 0).unwrap();
//! v.set(0, u16::MAX as u64).unwrap();
//! assert_eq!(v.width(), 16);
//! assert_eq!(v.max_value(), Some(65535));
//!
//! let mut bits = BitVector::from_elem(4, 0).unwrap();
//! bits.set(1, 1).unwrap();
//! bits.flip();
//! assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 0, 1, 1]);
//! assert_eq!(bits.count_ones(), 3);
//! ```

use core::fmt;

use crate::int_vector::validate_width;
use crate::iter::Iter;
use crate::{Aggregate, IntVector, PackedIntsError, Result};

/// [`IntVector`] with its width pinned to `W` bits.
///
/// Shares the layout of the dynamic vector; there is no way to change the
/// width of a fixed vector after construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixedIntVector<const W: usize> {
    inner: IntVector,
}

pub type IntVector8 = FixedIntVector<8>;
pub type IntVector16 = FixedIntVector<16>;
pub type IntVector32 = FixedIntVector<32>;
pub type IntVector64 = FixedIntVector<64>;

/// Vector of single bits.
pub type BitVector = FixedIntVector<1>;

impl<const W: usize> FixedIntVector<W> {
    /// Creates an empty vector.
    ///
    /// # Errors
    ///
    /// [`PackedIntsError::InvalidWidth`] if `W` is not in `1..=64`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: IntVector::new(W)?,
        })
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: IntVector::with_capacity(capacity, W)?,
        })
    }

    /// `len` elements set to `fill` (masked to `W` bits).
    pub fn from_elem(len: usize, fill: u64) -> Result<Self> {
        Ok(Self {
            inner: IntVector::from_elem(len, fill, W)?,
        })
    }

    /// Same as [`from_elem`](Self::from_elem) but with an explicit width,
    /// which must equal `W`.
    ///
    /// ```
    /// use packed_ints::{IntVector8, PackedIntsError};
    ///
    /// assert!(IntVector8::with_width(2, 0, 8).is_ok());
    /// assert_eq!(IntVector8::with_width(2, 0, 9), Err(PackedIntsError::InvalidWidth(9)));
    /// ```
    pub fn with_width(len: usize, fill: u64, width: usize) -> Result<Self> {
        if width != W {
            return Err(PackedIntsError::InvalidWidth(width));
        }
        Self::from_elem(len, fill)
    }

    pub fn from_values<I: IntoIterator<Item = u64>>(values: I) -> Result<Self> {
        Ok(Self {
            inner: IntVector::from_values(values, W)?,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline(always)]
    pub const fn width(&self) -> usize {
        W
    }

    pub fn max_len(&self) -> usize {
        self.inner.max_len()
    }

    pub fn bit_len(&self) -> usize {
        self.inner.bit_len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.inner.size_in_bytes()
    }

    pub fn size_in_mega_bytes(&self) -> f64 {
        self.inner.size_in_mega_bytes()
    }

    pub fn words(&self) -> &[u64] {
        self.inner.words()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<u64> {
        self.inner.get(index)
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: u64) -> Result<()> {
        self.inner.set(index, value)
    }

    pub fn push(&mut self, value: u64) {
        self.inner.push(value);
    }

    pub fn try_push(&mut self, value: u64) -> Result<()> {
        self.inner.try_push(value)
    }

    pub fn pop(&mut self) -> Option<u64> {
        self.inner.pop()
    }

    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        self.inner.resize(new_len)
    }

    pub fn bit_resize(&mut self, bits: usize) {
        self.inner.bit_resize(bits);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn get_bits(&self, pos: usize, len: usize) -> Result<u64> {
        self.inner.get_bits(pos, len)
    }

    pub fn set_bits(&mut self, pos: usize, value: u64, len: usize) -> Result<()> {
        self.inner.set_bits(pos, value, len)
    }

    pub fn and_with(&mut self, other: &Self) -> Result<()> {
        self.inner.and_with(&other.inner)
    }

    pub fn or_with(&mut self, other: &Self) -> Result<()> {
        self.inner.or_with(&other.inner)
    }

    pub fn xor_with(&mut self, other: &Self) -> Result<()> {
        self.inner.xor_with(&other.inner)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.inner.iter()
    }

    pub fn as_dynamic(&self) -> &IntVector {
        &self.inner
    }

    pub fn into_dynamic(self) -> IntVector {
        self.inner
    }
}

impl FixedIntVector<1> {
    /// Complements every bit: each element becomes `1 - value`.
    pub fn flip(&mut self) {
        self.inner.bits_mut().flip_all();
    }

    /// Number of set bits; always equal to [`Aggregate::sum`].
    pub fn count_ones(&self) -> usize {
        self.inner.bits().count_ones()
    }

    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

impl<const W: usize> Default for FixedIntVector<W> {
    /// An empty vector. `W` outside `1..=64` is rejected at compile time.
    fn default() -> Self {
        const { assert!(W >= 1 && W <= 64, "width must be in 1..=64") };
        Self {
            inner: IntVector::from_elem(0, 0, W).unwrap_or_default(),
        }
    }
}

impl<const W: usize> TryFrom<IntVector> for FixedIntVector<W> {
    type Error = PackedIntsError;

    /// Adopts a dynamic vector whose width is exactly `W`.
    fn try_from(inner: IntVector) -> Result<Self> {
        validate_width(W)?;
        if inner.width() != W {
            return Err(PackedIntsError::InvalidWidth(inner.width()));
        }
        Ok(Self { inner })
    }
}

impl<const W: usize> From<FixedIntVector<W>> for IntVector {
    fn from(v: FixedIntVector<W>) -> Self {
        v.inner
    }
}

impl<const W: usize> Extend<u64> for FixedIntVector<W> {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, const W: usize> IntoIterator for &'a FixedIntVector<W> {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const W: usize> Aggregate for FixedIntVector<W> {
    type Values<'a> = Iter<'a>;

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<const W: usize> fmt::Display for FixedIntVector<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
