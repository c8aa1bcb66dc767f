//! Stable in-place sorting over [`Sortable`] sequences.
//!
//! Runs of `BLOCK_SIZE` elements are insertion-sorted first, then merged pairwise with doubling
//! width using the SymMerge algorithm (Kim & Kutzner, "Stable Minimum Storage Merging by
//! Symmetric Comparisons"). Every data movement is a `Sortable::swap`, so no element is ever
//! copied out of the sequence and the only extra memory is the merge recursion stack
//! (`O(log n)` frames).
//!
//! The block pass costs `O(n · BLOCK_SIZE)` comparisons and swaps. Each SymMerge of runs of
//! length `m <= n` uses `O(m log(n / m + 1))` comparisons and `O((m + n) log m)` swaps, so for
//! large `n` the whole sort is `O(n log n)` comparisons and `O(n log² n)` swaps. Input that is
//! already sorted performs no swaps at all.

use crate::sortable::Sortable;

const BLOCK_SIZE: usize = 20;

/// Sorts `data` in non-decreasing order, keeping equal elements in their input order.
pub fn sort_stable<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    log::trace!("stable sort over {len} elements");

    let mut block = BLOCK_SIZE;
    let mut start = 0;
    while start < len {
        let end = (start + block).min(len);
        insertion_sort(data, start, end);
        start = end;
    }

    while block < len {
        let mut lo = 0;
        while lo + 2 * block <= len {
            sym_merge(data, lo, lo + block, lo + 2 * block);
            lo += 2 * block;
        }
        let mid = lo + block;
        if mid < len {
            sym_merge(data, lo, mid, len);
        }
        block *= 2;
    }
}

/// Returns `true` if no element of `data` sorts before its predecessor.
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges the sorted runs `lo..mid` and `mid..hi` in place.
fn sym_merge<S: Sortable + ?Sized>(data: &mut S, lo: usize, mid: usize, hi: usize) {
    if lo >= mid || mid >= hi {
        return;
    }

    // A single element on the left: binary-search its slot in the right run and bubble it there.
    if mid - lo == 1 {
        let mut i = mid;
        let mut j = hi;
        while i < j {
            let h = i + (j - i) / 2;
            if data.less(h, lo) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in lo..i - 1 {
            data.swap(k, k + 1);
        }
        return;
    }

    // Mirror case: a single element on the right goes after every left element it does not
    // sort before.
    if hi - mid == 1 {
        let mut i = lo;
        let mut j = mid;
        while i < j {
            let h = i + (j - i) / 2;
            if data.less(mid, h) {
                j = h;
            } else {
                i = h + 1;
            }
        }
        for k in (i + 1..=mid).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let half = lo + (hi - lo) / 2;
    let n = half + mid;
    let (mut start, mut r) = if mid > half {
        (n - hi, half)
    } else {
        (lo, mid)
    };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if data.less(p - c, c) {
            r = c;
        } else {
            start = c + 1;
        }
    }

    let end = n - start;
    if start < mid && mid < end {
        rotate(data, start, mid, end);
    }
    if lo < start && start < half {
        sym_merge(data, lo, start, half);
    }
    if half < end && end < hi {
        sym_merge(data, half, end, hi);
    }
}

/// Exchanges the adjacent blocks `lo..mid` and `mid..hi`. Both must be non-empty.
fn rotate<S: Sortable + ?Sized>(data: &mut S, lo: usize, mid: usize, hi: usize) {
    let mut i = mid - lo;
    let mut j = hi - mid;

    while i != j {
        if i > j {
            swap_range(data, mid - i, mid, j);
            i -= j;
        } else {
            swap_range(data, mid - i, mid + j - i, i);
            j -= i;
        }
    }
    swap_range(data, mid - i, mid, i);
}

fn swap_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, n: usize) {
    for i in 0..n {
        data.swap(a + i, b + i);
    }
}
