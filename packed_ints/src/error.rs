use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackedIntsError {
    #[error("width must be in the range 1..=64, got {0}")]
    InvalidWidth(usize),

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("bit range {pos}..{pos}+{len} is out of bounds for {bit_len} bits")]
    BitRangeOutOfBounds { pos: usize, len: usize, bit_len: usize },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("width mismatch: expected {expected}, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("{len} elements of {width} bits exceed the addressable bit range")]
    LengthOverflow { len: usize, width: usize },
}

pub type Result<T> = core::result::Result<T, PackedIntsError>;
