//! Whole-sequence reductions shared by every integer sequence in the workspace.

/// Minimum, maximum and sum gathered in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub min: u64,
    pub max: u64,
    /// Accumulated in 128 bits so `len * u64::MAX` cannot overflow in practice.
    pub sum: u128,
    pub count: usize,
}

impl Summary {
    /// Folds `values` into a summary, or `None` for an empty sequence.
    pub fn from_values<I: IntoIterator<Item = u64>>(values: I) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        let init = Summary {
            min: first,
            max: first,
            sum: u128::from(first),
            count: 1,
        };
        Some(values.fold(init, |acc, v| Summary {
            min: acc.min.min(v),
            max: acc.max.max(v),
            sum: acc.sum + u128::from(v),
            count: acc.count + 1,
        }))
    }
}

/// Reductions over a lazily decoded sequence of `u64` values.
///
/// Implementors only provide [`values()`](Aggregate::values); each reduction is
/// a single forward pass and never materializes the sequence.
pub trait Aggregate {
    type Values<'a>: Iterator<Item = u64>
    where
        Self: 'a;

    fn values(&self) -> Self::Values<'_>;

    fn min_value(&self) -> Option<u64> {
        self.values().reduce(u64::min)
    }

    fn max_value(&self) -> Option<u64> {
        self.values().reduce(u64::max)
    }

    fn sum(&self) -> u128 {
        self.values().map(u128::from).sum()
    }

    fn summary(&self) -> Option<Summary> {
        Summary::from_values(self.values())
    }
}
