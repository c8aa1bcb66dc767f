use crate::compare::compare;
use crate::sortable::Sortable;
use crate::stable::sort_stable;
use crate::value::ScalarValue;
use std::cmp::Ordering;

/// Sortable view over a single column of [`ScalarValue`]s.
///
/// The view borrows the column mutably for its whole lifetime and reorders it in place.
#[derive(Debug)]
pub struct Sort<'a> {
    values: &'a mut [ScalarValue],
}

impl<'a> Sort<'a> {
    pub fn new(values: &'a mut [ScalarValue]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[ScalarValue] {
        self.values
    }

    /// Stable-sorts the column by [`compare`].
    pub fn sort(&mut self) {
        sort_stable(self);
    }
}

impl Sortable for Sort<'_> {
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        compare(&self.values[i], &self.values[j]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }
}

/// Stable-sorts `values` in place.
pub fn sort_values(values: &mut [ScalarValue]) {
    Sort::new(values).sort();
}
