use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::compare::compare;

/// Runtime kind of a [`ScalarValue`].
///
/// Declaration order is the cross-kind precedence used by [`compare`]:
/// `Unset < Number < Timestamp < Text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Unset,
    Number,
    Timestamp,
    Text,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Unset => "unset",
            ValueKind::Number => "number",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dynamically-typed cell taken from a heterogeneous column.
///
/// Equality and ordering are defined by [`compare`], so `NaN == NaN` and `-0.0 == 0.0` here even
/// though neither holds for raw `f64`.
#[derive(Clone, Debug, Default)]
pub enum ScalarValue {
    #[default]
    Unset,
    Number(f64),
    /// `None` is the zero timestamp; it sorts before every real instant.
    Timestamp(Option<DateTime<Utc>>),
    Text(Arc<str>),
}

impl ScalarValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ScalarValue::Unset => ValueKind::Unset,
            ScalarValue::Number(_) => ValueKind::Number,
            ScalarValue::Timestamp(_) => ValueKind::Timestamp,
            ScalarValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ScalarValue::Unset)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ScalarValue::Timestamp(ts) => *ts,
            _ => None,
        }
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for ScalarValue {}

impl PartialOrd for ScalarValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalarValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Unset | ScalarValue::Timestamp(None) => Ok(()),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Timestamp(Some(ts)) => f.write_str(&ts.to_rfc3339()),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Number(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(Arc::from(value))
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(Arc::from(value))
    }
}

impl From<DateTime<Utc>> for ScalarValue {
    fn from(value: DateTime<Utc>) -> Self {
        ScalarValue::Timestamp(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ScalarValue::Unset.kind(), ValueKind::Unset);
        assert_eq!(ScalarValue::from(1.5).kind(), ValueKind::Number);
        assert_eq!(ScalarValue::Timestamp(None).kind(), ValueKind::Timestamp);
        assert_eq!(ScalarValue::from("x").kind(), ValueKind::Text);
    }

    #[test]
    fn accessors_only_match_their_own_kind() {
        let ts = Utc.with_ymd_and_hms(2013, 4, 22, 0, 0, 0).unwrap();
        assert_eq!(ScalarValue::from(ts).as_timestamp(), Some(ts));
        assert_eq!(ScalarValue::from("Chelyabinsk").as_text(), Some("Chelyabinsk"));
        assert_eq!(ScalarValue::from("Chelyabinsk").as_number(), None);
        assert_eq!(ScalarValue::from(1.5).as_text(), None);
        assert!(ScalarValue::default().is_unset());
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(ScalarValue::from(f64::NAN), ScalarValue::from(f64::NAN));
        assert_eq!(ScalarValue::from(-0.0), ScalarValue::from(0.0));
    }

    #[test]
    fn display_renders_cells() {
        let ts = Utc.with_ymd_and_hms(1880, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ScalarValue::from(ts).to_string(), "1880-01-01T00:00:00+00:00");
        assert_eq!(ScalarValue::Timestamp(None).to_string(), "");
        assert_eq!(ScalarValue::from(21.0).to_string(), "21");
        assert_eq!(ScalarValue::from("Aachen").to_string(), "Aachen");
    }
}
