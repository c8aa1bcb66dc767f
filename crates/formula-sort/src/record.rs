use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One meteorite fall, assembled from the id, name, mass and time columns of a source row.
///
/// Records are payload only: sorting never looks inside them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeteoriteRecord {
    pub id: String,
    pub name: String,
    /// Mass in grams; `0.0` when the source cell was missing.
    pub mass: f64,
    /// `None` when the source cell was missing or unparseable.
    pub time: Option<DateTime<Utc>>,
}
