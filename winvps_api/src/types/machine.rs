//! Machine records, machine request bodies, and machine commands.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Job, Limits};
use crate::validation::{is_zero, require_id, Payload, ValidationError};

/// Short machine record returned by the list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Machine {
    /// Machine name, e.g. "VPS0123". Used as the path key for every per-machine call.
    pub name: String,
    pub status: String,
    pub notes: String,
}

/// Full machine record returned by `machines/full` and `machines/{name}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MachineFull {
    #[serde(flatten)]
    pub machine: Machine,

    /// Addresses assigned to the machine.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ips: Vec<Ip>,

    #[serde(default)]
    pub os: Option<Os>,

    /// Resource limits currently applied.
    #[serde(default)]
    pub config: Option<Limits>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Ip {
    /// 4 or 6.
    pub version: i64,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Os {
    pub template_id: String,
    pub brand_id: i64,
    pub update_status: Option<UpdateStatus>,
}

/// Result of the last Windows Update run on the machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateStatus {
    pub h_result: i64,
    pub reboot_required: bool,
    pub result_code: i64,
    pub update_time: String,
}

/// Additional system user on a machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    pub username: String,
    pub role: String,
    pub password: String,
}

/// Body of `POST machines`. `product_id`, `template_id` and `location_id` are required.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CreateMachineOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub template_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub brand_id: i64,
    /// "hdd" or "ssd"; empty leaves the choice to the product.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub disk_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub location_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_disk: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_ram: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_cpu: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_band: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_start: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_ipv6: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ui_language: String,
}

impl CreateMachineOptions {
    /// Options with the three required identifiers set and everything else left to the server.
    pub fn new(product_id: i64, template_id: i64, location_id: i64) -> Self {
        Self {
            product_id,
            template_id,
            location_id,
            ..Default::default()
        }
    }
}

impl Payload for CreateMachineOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id("product_id", self.product_id)?;
        require_id("template_id", self.template_id)?;
        require_id("location_id", self.location_id)?;
        match self.disk_type.as_str() {
            "" | "hdd" | "ssd" => Ok(()),
            other => Err(ValidationError::InvalidDiskType(other.to_string())),
        }
    }
}

/// Body of `PUT machines/{name}`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateMachineOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_disk: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_ram: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_cpu: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub add_band: i64,
}

impl Payload for UpdateMachineOptions {}

/// Body of `POST machines/{name}`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ReinstallMachineOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub template_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub brand_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub auto_start: i64,
}

impl Payload for ReinstallMachineOptions {}

/// Name and queued jobs of a newly ordered machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreatedMachine {
    pub name: String,
    pub jobs: Vec<Job>,
}

/// Address and queued jobs after adding an IP.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AddedIp {
    pub address: String,
    pub jobs: Vec<Job>,
}

/// Power and maintenance actions accepted by `machines/{name}/{command}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineCommand {
    Start,
    Stop,
    Restart,
    EnableRdp,
    EnableNetwork,
    RestartMt,
    RunUpdatesInstall,
}

impl MachineCommand {
    pub const ALL: [MachineCommand; 7] = [
        MachineCommand::Start,
        MachineCommand::Stop,
        MachineCommand::Restart,
        MachineCommand::EnableRdp,
        MachineCommand::EnableNetwork,
        MachineCommand::RestartMt,
        MachineCommand::RunUpdatesInstall,
    ];

    /// Path segment used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineCommand::Start => "start",
            MachineCommand::Stop => "stop",
            MachineCommand::Restart => "restart",
            MachineCommand::EnableRdp => "enable_rdp",
            MachineCommand::EnableNetwork => "enable_network",
            MachineCommand::RestartMt => "restart_mt",
            MachineCommand::RunUpdatesInstall => "run_updates_install",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(MachineCommand::as_str).collect()
    }
}

impl std::fmt::Display for MachineCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MachineCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::UnknownCommand(s.to_string()))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
