use crate::compare::compare;
use crate::error::{SortError, SortResult};
use crate::sortable::Sortable;
use crate::stable::sort_stable;
use crate::value::ScalarValue;
use std::cmp::Ordering;

/// Sortable view that orders a payload column by a parallel key column.
///
/// Only `keys` take part in comparisons. Every swap moves the key and its payload record
/// together, so each `(keys[i], payload[i])` pair survives the sort as a unit. Neither column
/// can be reordered on its own through this type.
#[derive(Debug)]
pub struct SortBy<'a, R> {
    keys: &'a mut [ScalarValue],
    payload: &'a mut [R],
}

impl<'a, R> SortBy<'a, R> {
    /// Pairs `keys` with `payload`.
    ///
    /// Fails with [`SortError::LengthMismatch`] when the columns differ in length; neither
    /// column is touched in that case.
    pub fn new(keys: &'a mut [ScalarValue], payload: &'a mut [R]) -> SortResult<Self> {
        if keys.len() != payload.len() {
            log::debug!(
                "rejecting sort-by view: {} keys vs {} payload records",
                keys.len(),
                payload.len()
            );
            return Err(SortError::LengthMismatch {
                keys: keys.len(),
                payload: payload.len(),
            });
        }
        Ok(Self { keys, payload })
    }

    pub fn keys(&self) -> &[ScalarValue] {
        self.keys
    }

    pub fn payload(&self) -> &[R] {
        self.payload
    }

    /// Releases the borrowed columns.
    pub fn into_parts(self) -> (&'a mut [ScalarValue], &'a mut [R]) {
        (self.keys, self.payload)
    }

    /// Stable-sorts both columns by key.
    pub fn sort(&mut self) {
        sort_stable(self);
    }
}

impl<R> Sortable for SortBy<'_, R> {
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        compare(&self.keys[i], &self.keys[j]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.payload.swap(i, j);
    }
}

/// Stable-sorts `payload` by the parallel `keys` column, reordering both in place.
pub fn sort_values_by<R>(keys: &mut [ScalarValue], payload: &mut [R]) -> SortResult<()> {
    SortBy::new(keys, payload)?.sort();
    Ok(())
}
