use core::iter::FusedIterator;

use crate::IntVector;

/// Iterator over the elements of an [`IntVector`], created by [`IntVector::iter()`].
///
/// Values are decoded on demand.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    vec: &'a IntVector,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub fn new(vec: &'a IntVector) -> Self {
        Self {
            vec,
            front: 0,
            back: vec.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let v = self.vec.value(self.front);
        self.front += 1;
        Some(v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vec.value(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::IntVector;

    #[test]
    fn iterates_both_ends() {
        let v = IntVector::from_values([1, 2, 3, 4], 3).unwrap();
        let mut it = v.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(v.iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn nth_skips_without_decoding() {
        let v = IntVector::from_values(0..100, 7).unwrap();
        let mut it = v.iter();
        assert_eq!(it.nth(42), Some(42));
        assert_eq!(it.next(), Some(43));
        assert_eq!(it.nth(1000), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn restartable() {
        let v = IntVector::from_values([9, 8], 4).unwrap();
        let first: Vec<_> = v.iter().collect();
        let second: Vec<_> = (&v).into_iter().collect();
        assert_eq!(first, second);
    }
}
