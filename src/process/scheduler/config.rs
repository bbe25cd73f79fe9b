/*!
 * Scheduler Configuration
 * Dispatch budget and serviced priority ceiling
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_DISPATCH_BUDGET, DEFAULT_MAX_PRIORITY_LEVELS, ENV_DISPATCH_BUDGET,
    ENV_MAX_PRIORITY_LEVELS,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// Scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Processes attempted per tick across all priorities (default: 3)
    #[serde(default = "default_dispatch_budget")]
    pub dispatch_budget_per_tick: usize,

    /// Priorities `0..max_priority_levels` are serviced (default: 5)
    ///
    /// Processes at or above this level are accepted but never dispatched.
    #[serde(default = "default_max_priority_levels")]
    pub max_priority_levels: u32,
}

fn default_dispatch_budget() -> usize {
    DEFAULT_DISPATCH_BUDGET
}

fn default_max_priority_levels() -> u32 {
    DEFAULT_MAX_PRIORITY_LEVELS
}

impl SchedulerConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            dispatch_budget_per_tick: default_dispatch_budget(),
            max_priority_levels: default_max_priority_levels(),
        }
    }

    pub fn with_dispatch_budget(mut self, budget: usize) -> Self {
        self.dispatch_budget_per_tick = budget;
        self
    }

    pub fn with_max_priority_levels(mut self, levels: u32) -> Self {
        self.max_priority_levels = levels;
        self
    }

    /// Both limits must be at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch_budget_per_tick == 0 {
            return Err(ConfigError::InvalidValue {
                key: "dispatch_budget_per_tick".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.max_priority_levels == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_priority_levels".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `KERNEL_DISPATCH_BUDGET` and `KERNEL_MAX_PRIORITY_LEVELS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the environment keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = lookup(ENV_DISPATCH_BUDGET) {
            config.dispatch_budget_per_tick = parse_var(ENV_DISPATCH_BUDGET, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_PRIORITY_LEVELS) {
            config.max_priority_levels = parse_var(ENV_MAX_PRIORITY_LEVELS, &raw)?;
        }

        config.validate()?;
        info!(
            dispatch_budget = config.dispatch_budget_per_tick,
            max_priority_levels = config.max_priority_levels,
            "Scheduler configuration loaded"
        );
        Ok(config)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: format!("'{}': {}", raw, e),
    })
}
