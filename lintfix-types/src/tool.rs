use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the tool that produced an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Wall-clock bounds of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl RunInfo {
    pub fn started_now() -> Self {
        Self {
            started_at: Utc::now(),
            ended_at: None,
        }
    }
}
