//! Reference lists used when ordering a machine.

use serde::{Deserialize, Serialize};

/// OS image a machine can be installed from.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Template {
    pub id: i64,
    pub name: String,
}

/// Datacenter a machine can be placed in.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}
