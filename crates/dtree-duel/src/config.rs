//! Scenario tuning: the critical-health threshold and the pickup category names.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("failed to parse duel config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid duel config: {0}")]
    Invalid(String),
}

/// What an agent does when it holds a power-up and its opponent does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Advantage {
    /// Close in: attack when in range, otherwise approach.
    #[default]
    Engage,
    /// Keep wandering. Matches the first shipped wiring of the duel tree.
    Hold,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Hit points strictly below this count as critical, for either agent.
    pub critical_health: i32,

    /// Category name of health pickups.
    pub health_kit: String,

    /// Category name of power-up pickups.
    pub power_up: String,

    pub advantage: Advantage,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            critical_health: 25,
            health_kit: "Health Kit".to_string(),
            power_up: "Power Up".to_string(),
            advantage: Advantage::default(),
        }
    }
}

impl DuelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.critical_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "critical_health must be positive, got {}",
                self.critical_health
            )));
        }
        if self.health_kit.trim().is_empty() || self.power_up.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "pickup category names must not be empty".to_string(),
            ));
        }
        if self.health_kit == self.power_up {
            return Err(ConfigError::Invalid(format!(
                "health_kit and power_up share the category `{}`",
                self.health_kit
            )));
        }
        Ok(())
    }

    /// Parses and validates YAML. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}
