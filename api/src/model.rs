//! Wire types returned by the backend.

use std::fmt;

use anyhow::anyhow;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Averages the summary cards always display, in card order.
pub const MEASUREMENTS: [&str; 3] = ["Flowrate", "Pressure", "Temperature"];

/// Backend record identifier. The server currently sends integers, but nothing on the
/// client depends on that, so both numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local file name used when saving the PDF report for this record.
    pub fn report_file_name(&self) -> String {
        format!("report_{}.pdf", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One processed upload as returned by the upload and summary endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentResult {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_csv: Option<String>,
}

/// Aggregates computed over an uploaded dataset. Map order follows the JSON payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: u64,
    #[serde(default)]
    pub averages: IndexMap<String, f64>,
    #[serde(default)]
    pub type_distribution: IndexMap<String, u64>,
}

impl Summary {
    pub fn average(&self, name: &str) -> anyhow::Result<f64> {
        self.averages
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("summary is missing the `{name}` average"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RFC 3339 timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}
