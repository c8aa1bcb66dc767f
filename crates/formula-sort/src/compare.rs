use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::value::{ScalarValue, ValueKind};

/// Cross-kind ordering, lowest first.
///
/// Values of different kinds never compare equal; the one whose kind appears earlier here sorts
/// first regardless of payload.
pub const KIND_PRECEDENCE: [ValueKind; 4] = [
    ValueKind::Unset,
    ValueKind::Number,
    ValueKind::Timestamp,
    ValueKind::Text,
];

/// Total order over [`ScalarValue`]s.
///
/// Same-kind values use their natural order:
/// - numbers: NaN equals NaN and sorts after every other number, `-0.0 == 0.0`
/// - timestamps: the zero timestamp (`None`) first, then chronological
/// - text: byte-wise (code point) lexicographic
///
/// Mixed kinds fall back to [`KIND_PRECEDENCE`].
#[inline]
pub fn compare(a: &ScalarValue, b: &ScalarValue) -> Ordering {
    match (a, b) {
        (ScalarValue::Number(a), ScalarValue::Number(b)) => compare_numbers(*a, *b),
        (ScalarValue::Text(a), ScalarValue::Text(b)) => a.as_ref().cmp(b.as_ref()),
        (ScalarValue::Timestamp(a), ScalarValue::Timestamp(b)) => {
            compare_timestamps(a.as_ref(), b.as_ref())
        }
        (ScalarValue::Unset, ScalarValue::Unset) => Ordering::Equal,
        _ => a.kind().cmp(&b.kind()),
    }
}

#[inline]
pub fn compare_numbers(a: f64, b: f64) -> Ordering {
    OrderedFloat(a).cmp(&OrderedFloat(b))
}

#[inline]
pub fn compare_timestamps(a: Option<&DateTime<Utc>>, b: Option<&DateTime<Utc>>) -> Ordering {
    a.cmp(&b)
}
