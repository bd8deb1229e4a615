use packed_codes::CodecError;
use packed_ints::PackedIntsError;
use thiserror::Error;

/// Any error raised by the packed or coded layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Packed(#[from] PackedIntsError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, Error>;
