//! # packed_ints
//!
//! Bit-packed integer vectors with a configurable element width.
//!
//! ```rust
//! use packed_ints::{Aggregate, IntVector};
//!
//! // 1024 values in 10 bits each: 1280 bytes instead of 8192
//! let mut v = IntVector::from_elem(1 << 10, 0, 10).expect("valid width");
//! for i in 0..v.len() {
//!     v.set(i, i as u64).unwrap();
//! }
//!
//! assert_eq!(v.get(1000), Ok(1000));
//! assert_eq!(v.words().len() * 8, 1280);
//! assert_eq!(v.sum(), 1023 * 1024 / 2);
//! ```
//!
//! Fixed-width variants pin the width in the type:
//!
//! ```rust
//! use packed_ints::{BitVector, IntVector8};
//!
//! let bytes = IntVector8::from_values([1, 2, 300]).unwrap();
//! assert_eq!(bytes.get(2), Ok(300 & 0xFF));
//!
//! let mut bits = BitVector::from_values([1, 0, 1]).unwrap();
//! bits.flip();
//! assert_eq!(bits.to_string(), "0 1 0");
//! ```

pub mod aggregate;
pub mod bit_buf;
pub mod bit_ops;
pub mod error;
pub mod fixed;
pub mod int_vector;
pub mod iter;

pub use aggregate::{Aggregate, Summary};
pub use bit_buf::BitBuf;
pub use error::{PackedIntsError, Result};
pub use fixed::{BitVector, FixedIntVector, IntVector16, IntVector32, IntVector64, IntVector8};
pub use int_vector::IntVector;
pub use iter::Iter;

/// Converts a byte count to MiB.
#[inline]
pub fn mega_bytes(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
