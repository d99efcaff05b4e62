//! # Bot Configuration
//!
//! All tuning constants in one structure, handed to the bot at construction.
//! Nothing in the decision path reads ambient globals.
//!
//! ## Usage
//! ```rust
//! use bot_core::config::BotConfig;
//!
//! let config = BotConfig::default();
//! let legacy = BotConfig::legacy();
//! assert!(config.validate().is_ok());
//! assert_eq!(legacy.thresholds.dispute.closer_teammate_threshold, 8);
//! ```
//!
//! ## Environment Variables
//!
//! - `BOT_POLICY_PROFILE`: preset (`legacy`, `cautious`, anything else = default)
//! - `BOT_SEED`: RNG seed override

mod field_config;
mod thresholds_config;

pub use field_config::{FieldConfig, GridConfig};
pub use thresholds_config::{
    DisputeThresholds, GoalkeeperThresholds, HoldingThresholds, SupportThresholds,
    ThresholdsConfig,
};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    pub field: FieldConfig,
    pub grid: GridConfig,
    pub thresholds: ThresholdsConfig,
    /// Seed for juke direction and escape-kick targets
    pub seed: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            grid: GridConfig::default(),
            thresholds: ThresholdsConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl BotConfig {
    /// Latest policy revision (default)
    pub fn latest() -> Self {
        Self::default()
    }

    pub fn legacy() -> Self {
        Self {
            thresholds: ThresholdsConfig::legacy(),
            ..Self::default()
        }
    }

    pub fn cautious() -> Self {
        Self {
            thresholds: ThresholdsConfig::cautious(),
            ..Self::default()
        }
    }

    /// Same policy with juke moves disabled, so outputs carry only the
    /// decision commands.
    pub fn deterministic() -> Self {
        let mut cfg = Self::default();
        cfg.thresholds.holding.juke_enabled = false;
        cfg
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Preset from `BOT_POLICY_PROFILE`, seed from `BOT_SEED`.
    pub fn from_env_or_default() -> Self {
        let mut cfg = match env::var("BOT_POLICY_PROFILE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "legacy" => Self::legacy(),
            "cautious" => Self::cautious(),
            _ => Self::default(),
        };
        if let Some(seed) = env::var("BOT_SEED").ok().and_then(|s| s.parse().ok()) {
            cfg.seed = seed;
        }
        cfg
    }

    /// Load and validate a JSON configuration. Missing sections use defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one column and row, got {}x{}",
                self.grid.cols, self.grid.rows
            )));
        }
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return Err(ConfigError::Invalid("field dimensions must be positive".into()));
        }
        if self.field.goal_min_y >= self.field.goal_max_y {
            return Err(ConfigError::Invalid("goal_min_y must be below goal_max_y".into()));
        }

        let holding = &self.thresholds.holding;
        if holding.escape_kick_power >= holding.max_kick_speed {
            return Err(ConfigError::Invalid(format!(
                "escape_kick_power ({}) must stay below max_kick_speed ({})",
                holding.escape_kick_power, holding.max_kick_speed
            )));
        }
        if holding.escape_min_y > holding.escape_max_y
            || holding.escape_min_ahead > holding.escape_max_ahead
        {
            return Err(ConfigError::Invalid("escape kick bands are inverted".into()));
        }
        if holding.min_pass_power > holding.max_kick_speed {
            return Err(ConfigError::Invalid(
                "min_pass_power must not exceed max_kick_speed".into(),
            ));
        }

        let support = &self.thresholds.support;
        if support.safe_min_y > support.safe_max_y {
            return Err(ConfigError::Invalid("support safe band is inverted".into()));
        }
        if !(0.0..=1.0).contains(&support.formation_blend) {
            return Err(ConfigError::Invalid(
                "formation_blend must be within [0, 1]".into(),
            ));
        }

        let gk = &self.thresholds.goalkeeper;
        if 2.0 * gk.post_margin >= self.field.goal_max_y - self.field.goal_min_y {
            return Err(ConfigError::Invalid(
                "goalkeeper post_margin leaves no room inside the goal".into(),
            ));
        }
        Ok(())
    }
}

// ========== Tests ==========
