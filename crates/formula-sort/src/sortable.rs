/// An index-addressed sequence that can be sorted in place.
///
/// Implementors only describe how to compare and exchange two positions; the sort routines in
/// this crate never read or copy elements directly. `less` must be a strict weak ordering over
/// `0..len()` for the result to be sorted.
pub trait Sortable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);
}
