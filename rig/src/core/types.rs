//! Shared deterministic types for the assembly rule engine.
//!
//! These types define the stable contracts between the validator and its
//! callers. Reason codes and decision shapes are observable output and must
//! stay stable across releases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed enumeration of hardware categories a slot can accept.
///
/// Serialized uppercase; parsing (CLI, TOML, JSON) ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum HardwareType {
    Cpu,
    Ram,
    Ssd,
    Gpu,
    Psu,
    Cooler,
}

impl HardwareType {
    pub fn as_str(self) -> &'static str {
        match self {
            HardwareType::Cpu => "CPU",
            HardwareType::Ram => "RAM",
            HardwareType::Ssd => "SSD",
            HardwareType::Gpu => "GPU",
            HardwareType::Psu => "PSU",
            HardwareType::Cooler => "COOLER",
        }
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HardwareType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CPU" => Ok(HardwareType::Cpu),
            "RAM" => Ok(HardwareType::Ram),
            "SSD" => Ok(HardwareType::Ssd),
            "GPU" => Ok(HardwareType::Gpu),
            "PSU" => Ok(HardwareType::Psu),
            "COOLER" => Ok(HardwareType::Cooler),
            other => Err(format!("unknown hardware type '{other}'")),
        }
    }
}

impl TryFrom<String> for HardwareType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Power state of the simulated system. Removal is only allowed while `Off`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => f.write_str("ON"),
            PowerState::Off => f.write_str("OFF"),
        }
    }
}

impl FromStr for PowerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ON" => Ok(PowerState::On),
            "OFF" => Ok(PowerState::Off),
            other => Err(format!(
                "unknown power state '{other}' (expected ON or OFF)"
            )),
        }
    }
}

impl TryFrom<String> for PowerState {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Why a requested install or removal is (dis)allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    Ok,
    InvalidSlot,
    InvalidHardware,
    SlotOccupied,
    TypeMismatch,
    DependencyMissing,
    SlotEmpty,
    SystemActive,
    DependencyBlocked,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::Ok => "ok",
            ReasonCode::InvalidSlot => "invalid_slot",
            ReasonCode::InvalidHardware => "invalid_hardware",
            ReasonCode::SlotOccupied => "slot_occupied",
            ReasonCode::TypeMismatch => "type_mismatch",
            ReasonCode::DependencyMissing => "dependency_missing",
            ReasonCode::SlotEmpty => "slot_empty",
            ReasonCode::SystemActive => "system_active",
            ReasonCode::DependencyBlocked => "dependency_blocked",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured outcome of a validation check.
///
/// A rejected decision is an expected result, not a fault. `ok` is always
/// equal to `reason == ReasonCode::Ok`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub ok: bool,
    pub reason: ReasonCode,
    pub message: String,
}

impl Decision {
    pub fn allow(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            reason: ReasonCode::Ok,
            message: message.into(),
        }
    }

    pub fn deny(reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason,
            message: message.into(),
        }
    }

    /// Convert into a `Result`, turning a rejection into a [`RuleViolation`].
    pub fn into_result(self) -> Result<Decision, RuleViolation> {
        if self.ok {
            Ok(self)
        } else {
            Err(RuleViolation {
                reason: self.reason,
                message: self.message,
            })
        }
    }
}

/// Returned by the apply operations when the requested transition is not
/// allowed. Carries the same reason and message as the failing [`Decision`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleViolation {
    pub reason: ReasonCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_serialize_snake_case() {
        let json = serde_json::to_string(&ReasonCode::DependencyBlocked).expect("serialize");
        assert_eq!(json, "\"dependency_blocked\"");
        assert_eq!(ReasonCode::SlotOccupied.to_string(), "slot_occupied");
    }

    #[test]
    fn hardware_type_parses_case_insensitively() {
        assert_eq!("cooler".parse::<HardwareType>(), Ok(HardwareType::Cooler));
        assert_eq!("PSU".parse::<HardwareType>(), Ok(HardwareType::Psu));
        assert!("fan".parse::<HardwareType>().is_err());
    }

    #[test]
    fn power_state_defaults_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
        assert_eq!("on".parse::<PowerState>(), Ok(PowerState::On));
    }

    #[test]
    fn deserialize_accepts_any_case_like_from_str() {
        let kinds: Vec<HardwareType> =
            serde_json::from_str(r#"["cpu", "Cooler", "GPU"]"#).expect("parse types");
        assert_eq!(
            kinds,
            vec![HardwareType::Cpu, HardwareType::Cooler, HardwareType::Gpu]
        );
        let power: PowerState = serde_json::from_str(r#""on""#).expect("parse power");
        assert_eq!(power, PowerState::On);
        assert_eq!(serde_json::to_string(&power).expect("serialize"), r#""ON""#);

        let err = serde_json::from_str::<HardwareType>(r#""fan""#).expect_err("unknown type");
        assert!(err.to_string().contains("unknown hardware type 'FAN'"));
    }

    #[test]
    fn denied_decision_becomes_violation_with_same_message() {
        let decision = Decision::deny(ReasonCode::SlotEmpty, "nothing here");
        let err = decision.into_result().expect_err("denied");
        assert_eq!(err.reason, ReasonCode::SlotEmpty);
        assert_eq!(err.to_string(), "nothing here");
    }

    #[test]
    fn decision_serializes_ok_reason_message() {
        let value = serde_json::to_value(Decision::allow("fine")).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({ "ok": true, "reason": "ok", "message": "fine" })
        );
    }
}
