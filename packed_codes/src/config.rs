//! Construction parameters and the closed set of code kinds.

use core::fmt;
use core::str::FromStr;

use crate::{CodecError, Result};

/// Default distance, in elements, between two samples of an enc/vlc vector.
pub const DEFAULT_SAMPLE_DENSITY: usize = 128;

/// Default number of bits per chunk of a DAC level.
pub const DEFAULT_DAC_CHUNK_WIDTH: usize = 4;

/// Parameters shared by every coded vector constructor.
///
/// ```rust
/// use packed_codes::CodecConfig;
///
/// let config = CodecConfig::default().with_sample_density(32);
/// assert_eq!(config.sample_density, 32);
/// assert_eq!(config.dac_chunk_width, 4);
/// assert!(config.validate().is_ok());
///
/// assert!(CodecConfig::default().with_dac_chunk_width(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// One absolute sample every `sample_density` elements.
    pub sample_density: usize,
    /// Bits per chunk in a [`DacVector`](crate::DacVector).
    pub dac_chunk_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            sample_density: DEFAULT_SAMPLE_DENSITY,
            dac_chunk_width: DEFAULT_DAC_CHUNK_WIDTH,
        }
    }
}

impl CodecConfig {
    pub fn with_sample_density(mut self, sample_density: usize) -> Self {
        self.sample_density = sample_density;
        self
    }

    pub fn with_dac_chunk_width(mut self, dac_chunk_width: usize) -> Self {
        self.dac_chunk_width = dac_chunk_width;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_density == 0 {
            return Err(CodecError::InvalidSampleDensity(self.sample_density));
        }
        if !(1..=64).contains(&self.dac_chunk_width) {
            return Err(CodecError::InvalidChunkWidth(self.dac_chunk_width));
        }
        Ok(())
    }
}

/// Every supported combination of layout and code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    EncEliasDelta,
    EncEliasGamma,
    EncFibonacci,
    EncComma2,
    VlcEliasDelta,
    VlcEliasGamma,
    VlcFibonacci,
    VlcComma2,
    Dac,
}

impl CodeKind {
    pub const ALL: [CodeKind; 9] = [
        CodeKind::EncEliasDelta,
        CodeKind::EncEliasGamma,
        CodeKind::EncFibonacci,
        CodeKind::EncComma2,
        CodeKind::VlcEliasDelta,
        CodeKind::VlcEliasGamma,
        CodeKind::VlcFibonacci,
        CodeKind::VlcComma2,
        CodeKind::Dac,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CodeKind::EncEliasDelta => "enc_vector_elias_delta",
            CodeKind::EncEliasGamma => "enc_vector_elias_gamma",
            CodeKind::EncFibonacci => "enc_vector_fibonacci",
            CodeKind::EncComma2 => "enc_vector_comma_2",
            CodeKind::VlcEliasDelta => "vlc_vector_elias_delta",
            CodeKind::VlcEliasGamma => "vlc_vector_elias_gamma",
            CodeKind::VlcFibonacci => "vlc_vector_fibonacci",
            CodeKind::VlcComma2 => "vlc_vector_comma_2",
            CodeKind::Dac => "dac_vector",
        }
    }

    /// `true` for kinds that keep a sample table.
    pub const fn is_sampled(self) -> bool {
        !matches!(self, CodeKind::Dac)
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodeKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        CodeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CodecError::UnknownCodeKind(s.to_owned()))
    }
}
