//! Error types for simulation setup.
//!
//! Stepping the simulation never fails. Everything that can go wrong happens
//! while building or loading a [`SimulationConfig`](crate::SimulationConfig).

use std::fmt;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A numeric field is out of range or not finite.
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Motion preset index outside 0..=3.
    UnknownMotionPreset(u8),
    /// Failed to parse a YAML scenario.
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => write!(f, "Invalid value {} for `{}`: {}", value, field, reason),
            ConfigError::UnknownMotionPreset(index) => write!(
                f,
                "Unknown motion preset {}. Expected 0 (static), 1 (vertical), 2 (diagonal) or 3 (anti-diagonal)",
                index
            ),
            ConfigError::Parse(e) => write!(f, "Failed to parse scenario: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}
