use serde::{Deserialize, Serialize};

/// Background task queued by the API for a machine (create, reinstall, command, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Job {
    pub id: i64,

    /// Job that spawned this one, or 0.
    pub parent_id: i64,

    pub machine_id: i64,

    /// Job kind as reported by the API, e.g. "create" or "restart".
    #[serde(rename = "type")]
    pub kind: String,

    pub status: String,

    pub start_time: String,
}
