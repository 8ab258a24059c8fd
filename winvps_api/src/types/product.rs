//! Products and the resource limits they grant.

use serde::{Deserialize, Serialize};

/// A purchasable machine plan.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub limits: Option<Limits>,
}

/// Resource limits of a product, also reported as a machine's current config.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Limits {
    pub cpu_percent: i64,
    pub cpu_cores: i64,
    pub ram_min: i64,
    pub ram_max: i64,
    pub disk_size: i64,
    pub bandwidth: i64,
    pub traffic: i64,
}
