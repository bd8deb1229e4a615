use packed_ints::PackedIntsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("value {0} cannot be encoded: only non-negative integers are supported")]
    UnsupportedValue(i64),

    #[error("sample density must be at least 1, got {0}")]
    InvalidSampleDensity(usize),

    #[error("chunk width must be in the range 1..=64, got {0}")]
    InvalidChunkWidth(usize),

    #[error("unknown code kind {0:?}")]
    UnknownCodeKind(String),

    #[error("encoded payload ends inside a codeword at bit {pos}")]
    CorruptPayload { pos: usize },

    #[error("packed vector error: {0}")]
    PackedInts(#[from] PackedIntsError),
}

pub type Result<T> = core::result::Result<T, CodecError>;
