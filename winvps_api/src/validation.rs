//! Pre-flight checks for request payloads.
//!
//! Every body sent by the client implements [`Payload`]. Types with required
//! fields override [`Payload::validate`] and list those fields in declaration
//! order; the first one that is missing is reported. A numeric field counts
//! as missing when it is `0`, a string field when it is empty. The API has
//! never handed out `0` as an identifier, so the overlap is accepted.

use serde::Serialize;

use crate::types::MachineCommand;

/// A JSON request body, checked before it is serialized.
pub trait Payload: Serialize {
    /// Structural check run by the request builder. The default accepts everything.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Reasons a payload is rejected before any request is built.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required option {0}")]
    MissingField(&'static str),
    #[error("allowed disk type 'hdd' or 'ssd' but '{0}' passed")]
    InvalidDiskType(String),
    #[error("wrong command passed '{0}', available commands: {}", MachineCommand::names().join(", "))]
    UnknownCommand(String),
}

pub(crate) fn require_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_str(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_is_missing() {
        assert_eq!(
            require_id("product_id", 0),
            Err(ValidationError::MissingField("product_id"))
        );
        assert!(require_id("product_id", 7).is_ok());
        assert!(require_id("product_id", -1).is_ok());
    }

    #[test]
    fn empty_string_is_missing() {
        assert_eq!(
            require_str("password", ""),
            Err(ValidationError::MissingField("password"))
        );
        assert!(require_str("password", " ").is_ok());
    }

    #[test]
    fn unknown_command_lists_alternatives() {
        let msg = ValidationError::UnknownCommand("reboot".to_string()).to_string();
        assert!(msg.starts_with("wrong command passed 'reboot'"));
        assert!(msg.contains("start, stop, restart"));
        assert!(msg.contains("run_updates_install"));
    }
}
