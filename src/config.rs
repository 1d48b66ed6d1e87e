//! Engine tuning
//!
//! Adaptive-difficulty and leveling knobs in one serde struct. Every field
//! has a default, so a RON file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::load_ron;
use crate::error::{DataError, Result};
use crate::progression::{AdaptiveConfig, LevelConfig};
use crate::progression::adaptive::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub adaptive: AdaptiveConfig,
    pub levels: LevelConfig,
}

impl EngineConfig {
    /// Load and validate a RON config
    pub fn load(path: &Path) -> Result<Self> {
        let config: EngineConfig = load_ron(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a RON config, or the defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load engine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reject settings the controller or resolver cannot run with
    pub fn validate(&self) -> Result<()> {
        let a = &self.adaptive;
        if a.window_size == 0 {
            return Err(DataError::Invalid("adaptive.window_size must be at least 1".into()));
        }
        if a.min_sample > a.window_size {
            return Err(DataError::Invalid(format!(
                "adaptive.min_sample {} exceeds window_size {}",
                a.min_sample, a.window_size
            )));
        }
        if !(0.0..=1.0).contains(&a.lower_threshold)
            || !(0.0..=1.0).contains(&a.raise_threshold)
            || a.lower_threshold >= a.raise_threshold
        {
            return Err(DataError::Invalid(format!(
                "adaptive thresholds must satisfy 0 <= lower < raise <= 1 (got {} / {})",
                a.lower_threshold, a.raise_threshold
            )));
        }
        if a.min_level > a.max_level || a.max_level > MAX_LEVEL {
            return Err(DataError::Invalid(format!(
                "adaptive levels must satisfy min <= max <= {} (got {}..{})",
                MAX_LEVEL, a.min_level, a.max_level
            )));
        }
        if self.levels.exp_per_level == 0 {
            return Err(DataError::Invalid("levels.exp_per_level must be positive".into()));
        }
        Ok(())
    }
}
