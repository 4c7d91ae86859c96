use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Validated output of an analysis request.
///
/// Wire field names follow the JSON contract the generation model is
/// instructed to produce (Czech keys, whole-CZK cost). After validation
/// `pros`/`cons` are always present, defaulting to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairAnalysis {
    #[serde(rename = "problem_analyza")]
    pub problem_analysis: String,
    #[serde(rename = "odhadovana_cena_kc")]
    pub estimated_cost_czk: u64,
    #[serde(rename = "klady_opravy", default)]
    pub pros: Vec<String>,
    #[serde(rename = "zapory_opravy", default)]
    pub cons: Vec<String>,
    #[serde(rename = "info_o_zarizeni", default, skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Phone,
    Tablet,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Phone => write!(f, "phone"),
            DeviceType::Tablet => write!(f, "tablet"),
        }
    }
}

/// A history entry: the analysis plus the request metadata it answered.
///
/// The persisted snapshot keeps the original camelCase metadata names, so
/// snapshots written by older builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: String,
    pub timestamp: i64,
    #[serde(flatten)]
    pub analysis: RepairAnalysis,
    #[serde(rename = "deviceType")]
    pub device_type: DeviceType,
    #[serde(rename = "deviceModel")]
    pub device_model: String,
    #[serde(rename = "problemDescription")]
    pub problem_description: String,
}

impl StoredAnalysis {
    /// Insertion time as a UTC datetime, for display.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Request metadata recorded alongside an analysis when it enters history.
#[derive(Debug, Clone)]
pub struct EntryMeta {
    pub device_type: DeviceType,
    pub device_model: String,
    pub problem_description: String,
}
