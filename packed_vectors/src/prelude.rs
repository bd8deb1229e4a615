//! Convenience re-exports for common usage

pub use crate::convert::ToCoded;
pub use crate::error::{Error, Result};

// Packed types
pub use packed_ints::{
    Aggregate, BitVector, FixedIntVector, IntVector, IntVector8, IntVector16, IntVector32,
    IntVector64,
};

// Coded types
pub use packed_codes::{CodeKind, CodecConfig, CodedVector, DacVector, EncVector, VlcVector};
pub use packed_codes::coder::{Coder, Comma, EliasDelta, EliasGamma, Fibonacci};

// Bytemuck utilities
pub use bytemuck::cast_slice;
