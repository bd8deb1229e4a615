//! # Packed Vectors
//!
//! Memory-compact integer sequences in Rust.
//!
//! ## Features
//!
//! - **Bit-packed vectors**: any element width from 1 to 64 bits, resizable
//! - **Fixed widths**: 8/16/32/64-bit and single-bit vectors checked at compile time
//! - **Coded vectors**: Elias-gamma, Elias-delta, Fibonacci and comma codes with sampled random access
//! - **Directly addressable codes**: chunked levels with constant-time lookup
//! - **Aggregates**: min, max and sum over every sequence type
//!
//! ## Quick Start
//!
//! ```rust
//! use packed_vectors::prelude::*;
//!
//! # fn main() -> packed_vectors::Result<()> {
//! let mut v = IntVector::from_elem(1024, 0, 10)?;
//! for i in 0..v.len() {
//!     v.set(i, i as u64)?;
//! }
//!
//! let coded = v.to_coded(CodeKind::EncEliasDelta)?;
//! assert_eq!(coded.get(512)?, 512);
//! assert_eq!(coded.sum(), v.sum());
//! assert!(coded.size_in_bytes() < v.size_in_bytes());
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod prelude;

pub use crate::convert::ToCoded;
pub use crate::error::{Error, Result};

// Re-export packed_ints types
pub use packed_ints::{
    Aggregate, BitBuf, BitVector, FixedIntVector, IntVector, IntVector8, IntVector16,
    IntVector32, IntVector64, Iter, PackedIntsError, Summary, bit_ops,
};

// Re-export packed_codes types
pub use packed_codes::{
    CodeKind, CodecConfig, CodecError, CodedIter, CodedVector, DacVector, EncVector,
    EncVectorComma2, EncVectorEliasDelta, EncVectorEliasGamma, EncVectorFibonacci,
    SampleTable, VlcVector, VlcVectorComma2, VlcVectorEliasDelta, VlcVectorEliasGamma,
    VlcVectorFibonacci, coder,
};

// Re-export raw_words types
pub use raw_words::{Container, ContainerError};

pub use bytemuck::{Pod, Zeroable};
