//! # packed_codes
//!
//! Immutable integer sequences stored as variable-length codes.
//!
//! Two sampled layouts are generic over a [`Coder`](coder::Coder):
//! [`VlcVector`] stores each value as a codeword, [`EncVector`] stores the
//! difference to the previous value. [`DacVector`] splits values into chunks
//! spread across levels. [`CodedVector`] wraps all nine combinations behind a
//! runtime [`CodeKind`].
//!
//! ```rust
//! use packed_codes::{Aggregate, CodeKind, CodecConfig, CodedVector};
//!
//! let kind: CodeKind = "enc_vector_elias_delta".parse().unwrap();
//! let v = CodedVector::build(kind, &CodecConfig::default(), [10, 11, 12, 9]).unwrap();
//!
//! assert_eq!(v.get(3), Ok(9));
//! assert_eq!(v.max_value(), Some(12));
//! assert_eq!(v.iter().collect::<Vec<_>>(), vec![10, 11, 12, 9]);
//! ```

pub mod coded;
pub mod coder;
pub mod config;
pub mod dac_vector;
pub mod enc_vector;
pub mod error;
pub mod sample;
pub mod vlc_vector;

pub use coded::{
    CodedIter, CodedVector, EncVectorComma2, EncVectorEliasDelta, EncVectorEliasGamma,
    EncVectorFibonacci, VlcVectorComma2, VlcVectorEliasDelta, VlcVectorEliasGamma,
    VlcVectorFibonacci,
};
pub use config::{CodeKind, CodecConfig, DEFAULT_DAC_CHUNK_WIDTH, DEFAULT_SAMPLE_DENSITY};
pub use dac_vector::{DacIter, DacVector};
pub use enc_vector::{EncIter, EncVector};
pub use error::{CodecError, Result};
pub use packed_ints::Aggregate;
pub use sample::SampleTable;
pub use vlc_vector::{VlcIter, VlcVector};
