//! Columnar meteorite-fall fixture used by the benches and tests.
//!
//! Input is the `rows` array of the NASA "Meteorite Landings" export (`rows.json`): each row is a
//! positional array of loosely-typed JSON cells. Four columns are pulled out into parallel
//! [`ScalarValue`] vectors plus one [`MeteoriteRecord`] per row. Reading the file is the caller's
//! job; this module only works on in-memory JSON.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

use crate::error::{SortError, SortResult};
use crate::record::MeteoriteRecord;
use crate::value::ScalarValue;

/// Positions of the extracted cells within a source row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetOptions {
    pub sid_column: usize,
    pub name_column: usize,
    pub mass_column: usize,
    pub time_column: usize,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            sid_column: 0,
            name_column: 8,
            mass_column: 12,
            time_column: 14,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeteoriteColumn {
    /// Unique per-row id; random distribution with a common prefix.
    Sids,
    /// Mostly sorted, apart from UTF-8 anomalies.
    Names,
    /// Grams; fairly random.
    Masses,
    /// Fall time; somewhat sorted.
    Times,
}

impl MeteoriteColumn {
    pub const ALL: [MeteoriteColumn; 4] = [
        MeteoriteColumn::Masses,
        MeteoriteColumn::Times,
        MeteoriteColumn::Names,
        MeteoriteColumn::Sids,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeteoriteColumn::Sids => "SIDs",
            MeteoriteColumn::Names => "Names",
            MeteoriteColumn::Masses => "Masses",
            MeteoriteColumn::Times => "Times",
        }
    }
}

/// Extracted meteorite columns. All vectors have one entry per source row.
#[derive(Clone, Debug, Default)]
pub struct Meteorites {
    pub sids: Vec<ScalarValue>,
    pub names: Vec<ScalarValue>,
    pub masses: Vec<ScalarValue>,
    pub times: Vec<ScalarValue>,
    pub records: Vec<MeteoriteRecord>,
}

impl Meteorites {
    /// Parses a `{"rows": [[...], ...]}` document.
    pub fn from_json_str(json: &str, options: &DatasetOptions) -> SortResult<Self> {
        let mut document: JsonValue = serde_json::from_str(json)?;
        let Some(JsonValue::Array(rows)) = document.get_mut("rows").map(JsonValue::take) else {
            return Err(SortError::InvalidDataset("missing `rows` array".to_string()));
        };

        let mut parsed = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            let JsonValue::Array(cells) = row else {
                return Err(SortError::InvalidDataset(format!("row {idx} is not an array")));
            };
            parsed.push(cells);
        }

        Ok(Self::from_rows(&parsed, options))
    }

    /// Extracts the columns from already-parsed rows.
    ///
    /// Missing or mistyped cells become the zero value of their column (empty string, `0.0`,
    /// zero timestamp) rather than failing the whole load.
    pub fn from_rows(rows: &[Vec<JsonValue>], options: &DatasetOptions) -> Self {
        let mut out = Self {
            sids: Vec::with_capacity(rows.len()),
            names: Vec::with_capacity(rows.len()),
            masses: Vec::with_capacity(rows.len()),
            times: Vec::with_capacity(rows.len()),
            records: Vec::with_capacity(rows.len()),
        };

        for row in rows {
            let record = MeteoriteRecord {
                id: text_cell(row, options.sid_column, "sid"),
                name: text_cell(row, options.name_column, "name"),
                mass: mass_cell(row, options.mass_column),
                time: time_cell(row, options.time_column),
            };
            out.sids.push(ScalarValue::from(record.id.as_str()));
            out.names.push(ScalarValue::from(record.name.as_str()));
            out.masses.push(ScalarValue::Number(record.mass));
            out.times.push(ScalarValue::Timestamp(record.time));
            out.records.push(record);
        }

        log::debug!("extracted {} meteorite rows", out.len());
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column(&self, column: MeteoriteColumn) -> &[ScalarValue] {
        match column {
            MeteoriteColumn::Sids => &self.sids,
            MeteoriteColumn::Names => &self.names,
            MeteoriteColumn::Masses => &self.masses,
            MeteoriteColumn::Times => &self.times,
        }
    }
}

/// Parses an RFC 3339 timestamp, or a zone-less ISO-8601 one (`1880-01-01T00:00:00.000`) taken
/// as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn text_cell(row: &[JsonValue], col: usize, column: &'static str) -> String {
    match row.get(col) {
        Some(JsonValue::String(s)) => s.clone(),
        None | Some(JsonValue::Null) => String::new(),
        Some(other) => {
            warn_unrecognized(column, other);
            String::new()
        }
    }
}

fn mass_cell(row: &[JsonValue], col: usize) -> f64 {
    match row.get(col) {
        Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(0.0),
        // The NASA export stores numeric cells as strings.
        Some(JsonValue::String(s)) => s.trim().parse().unwrap_or(0.0),
        None | Some(JsonValue::Null) => 0.0,
        Some(other) => {
            warn_unrecognized("mass", other);
            0.0
        }
    }
}

fn time_cell(row: &[JsonValue], col: usize) -> Option<DateTime<Utc>> {
    match row.get(col) {
        Some(JsonValue::String(s)) => parse_timestamp(s),
        None | Some(JsonValue::Null) => None,
        Some(other) => {
            warn_unrecognized("time", other);
            None
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn warn_unrecognized(column: &'static str, value: &JsonValue) {
    static WARNED: OnceLock<Mutex<BTreeSet<(&'static str, &'static str)>>> = OnceLock::new();

    let kind = json_kind(value);
    let warned = WARNED.get_or_init(|| Mutex::new(BTreeSet::new()));
    let mut warned = match warned.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if warned.insert((column, kind)) {
        log::warn!(
            "unrecognized {kind} cell in meteorite {column} column; using the column's zero value"
        );
    }
}
