#[cfg(feature = "std")]
use thiserror::Error;

/// Container errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}
