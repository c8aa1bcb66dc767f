//! Stable in-place sorting over dynamically-typed scalar columns.
//!
//! This crate focuses on:
//! - A total order over mixed-kind [`ScalarValue`]s (numbers, timestamps, text, unset).
//! - [`Sort`]: reorder one column in place.
//! - [`SortBy`]: reorder a payload column by a parallel key column, keeping rows paired.
//! - A meteorite-fall fixture ([`Meteorites`]) used to benchmark both on realistic data.

#![forbid(unsafe_code)]

mod compare;
mod dataset;
mod error;
mod record;
mod sort;
mod sort_by;
mod sortable;
mod stable;
mod value;

pub use crate::compare::{compare, compare_numbers, compare_timestamps, KIND_PRECEDENCE};
pub use crate::dataset::{parse_timestamp, DatasetOptions, MeteoriteColumn, Meteorites};
pub use crate::error::{SortError, SortResult};
pub use crate::record::MeteoriteRecord;
pub use crate::sort::{sort_values, Sort};
pub use crate::sort_by::{sort_values_by, SortBy};
pub use crate::sortable::Sortable;
pub use crate::stable::{is_sorted, sort_stable};
pub use crate::value::{ScalarValue, ValueKind};
