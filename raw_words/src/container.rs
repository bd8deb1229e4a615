use crate::ContainerError;
use bytemuck::Pod;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Growable in-memory buffer of plain-old-data words.
///
/// `Container<T>` owns a contiguous run of `T` values, where `T` must implement
/// [`bytemuck::Pod`] so the whole buffer can be viewed as bytes without copying.
/// Growth always zero-fills, which is what the bit-packing layers above rely on:
/// a freshly exposed word reads as all-zero bits.
///
/// # Examples
///
/// ```
/// use raw_words::Container;
///
/// let mut words = Container::<u64>::new();
/// words.push(7);
/// words.push(9);
///
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.get(1), Ok(&9));
///
/// words.write(0, 42).unwrap();
/// assert_eq!(words[0], 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T: Pod> {
    data: Vec<T>,
}

impl<T: Pod> Container<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Container { data: Vec::new() }
    }

    /// Creates an empty container with room for at least `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a container holding `len` all-zero words.
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let words = Container::<u32>::zeroed(3);
    /// assert_eq!(words.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn zeroed(len: usize) -> Self {
        Container {
            data: vec_zeroed(len),
        }
    }

    /// Creates a container from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Container {
            data: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of words the container can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns a reference to the word at `index`.
    ///
    /// # Errors
    ///
    /// [`ContainerError::OutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.data.get(index).ok_or(ContainerError::OutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Overwrites the word at `index`.
    pub fn write(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Resizes to `new_len` words. New words are zeroed; surplus words are dropped.
    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, T::zeroed());
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Releases spare capacity.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Overwrites every word with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Views the words as raw bytes (native endianness).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Heap bytes occupied by the live words.
    pub fn size_in_bytes(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

fn vec_zeroed<T: Pod>(len: usize) -> Vec<T> {
    let mut data = Vec::with_capacity(len);
    data.resize(len, T::zeroed());
    data
}

impl<T: Pod> core::ops::Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for Container<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Pod> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Pod> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Pod> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
    struct Pair {
        lo: u32,
        hi: u32,
    }

    #[test]
    fn push_and_read() {
        let mut c = Container::<u64>::new();
        assert!(c.is_empty());
        c.push(1);
        c.push(u64::MAX);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(0), Ok(&1));
        assert_eq!(c[1], u64::MAX);
        assert_eq!(
            c.get(2),
            Err(ContainerError::OutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn resize_zero_fills() {
        let mut c = Container::<u64>::from_slice(&[5, 6]);
        c.resize(4);
        assert_eq!(c.as_slice(), &[5, 6, 0, 0]);
        c.resize(1);
        assert_eq!(c.as_slice(), &[5]);
        c.resize(3);
        assert_eq!(c.as_slice(), &[5, 0, 0]);
    }

    #[test]
    fn write_out_of_bounds_leaves_buffer_untouched() {
        let mut c = Container::<u16>::zeroed(2);
        assert!(c.write(2, 9).is_err());
        assert_eq!(c.as_slice(), &[0, 0]);
        c.write(1, 9).unwrap();
        assert_eq!(c.as_slice(), &[0, 9]);
    }

    #[test]
    fn byte_view_matches_pod_layout() {
        let c = Container::from_slice(&[Pair { lo: 1, hi: 2 }]);
        assert_eq!(c.size_in_bytes(), 8);
        let expected: &[u8] = bytemuck::bytes_of(&Pair { lo: 1, hi: 2 });
        assert_eq!(c.as_bytes(), expected);
    }

    #[test]
    fn fill_and_clear() {
        let mut c = Container::<u8>::zeroed(3);
        c.fill(0xAA);
        assert!(c.iter().all(|&b| b == 0xAA));
        c.clear();
        assert!(c.is_empty());
    }
}
