//! Bit-offset checkpoints for random access into a variable-length payload.

use packed_ints::IntVector;

use crate::{CodecError, Result};

/// Bit offset of every `density`-th codeword of a payload.
///
/// Entry `k` is the offset of element `k * density`. The table is built in the
/// same pass that writes the payload and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    density: usize,
    offsets: IntVector,
}

impl SampleTable {
    /// Collects offsets while a payload is being written.
    pub(crate) fn builder(density: usize) -> Result<SampleTableBuilder> {
        if density == 0 {
            return Err(CodecError::InvalidSampleDensity(density));
        }
        Ok(SampleTableBuilder {
            density,
            offsets: Vec::new(),
        })
    }

    pub fn density(&self) -> usize {
        self.density
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Block holding `index`, the payload offset of that block and how many
    /// elements into the block `index` sits.
    #[inline]
    pub fn locate(&self, index: usize) -> Result<(usize, usize, usize)> {
        let block = index / self.density;
        let offset = self.offsets.get(block)? as usize;
        Ok((block, offset, index % self.density))
    }

    pub fn size_in_bytes(&self) -> usize {
        self.offsets.size_in_bytes() + core::mem::size_of::<usize>()
    }
}

pub(crate) struct SampleTableBuilder {
    density: usize,
    offsets: Vec<u64>,
}

impl SampleTableBuilder {
    /// Records `offset` if `index` starts a block. Returns whether it did.
    #[inline]
    pub(crate) fn observe(&mut self, index: usize, offset: usize) -> bool {
        if index % self.density == 0 {
            self.offsets.push(offset as u64);
            true
        } else {
            false
        }
    }

    pub(crate) fn finish(self) -> SampleTable {
        SampleTable {
            density: self.density,
            offsets: IntVector::from_slice(&self.offsets),
        }
    }
}
