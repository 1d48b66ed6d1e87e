//! Experience, leveling and evolution
//!
//! Each level costs `level × 30` experience, so later levels take
//! proportionally longer. Every `evolve_every`-th level evolves the
//! creature (until `max_stage`); other level-ups grant bonus HP.

use serde::{Deserialize, Serialize};

/// Experience per level step: reaching level `n + 1` from `n` costs `n × 30`
pub const EXP_PER_LEVEL: u32 = 30;

/// Leveling tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub exp_per_level: u32,
    /// Last evolution stage (stages count from 0)
    pub max_stage: u32,
    /// Levels divisible by this evolve instead of granting HP
    pub evolve_every: u32,
    pub hp_bonus_per_level: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            exp_per_level: EXP_PER_LEVEL,
            max_stage: 2,
            evolve_every: 3,
            hp_bonus_per_level: 20,
        }
    }
}

impl LevelConfig {
    /// Experience needed to leave `level`
    pub fn exp_for_level(&self, level: u32) -> u32 {
        level.max(1) * self.exp_per_level
    }

    /// Build a resolver input using this tuning
    pub fn input(&self, current_exp: u32, current_level: u32, current_stage: u32, gain_exp: u32) -> LevelProgressInput {
        LevelProgressInput {
            current_exp,
            current_level,
            current_stage,
            gain_exp,
            exp_per_level: self.exp_per_level,
            max_stage: self.max_stage,
            evolve_every: self.evolve_every,
            hp_bonus_per_level: self.hp_bonus_per_level,
        }
    }
}

/// Experience needed to leave `level` with default tuning
pub fn exp_for_level(level: u32) -> u32 {
    LevelConfig::default().exp_for_level(level)
}

/// Caller-owned progress plus the experience just earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgressInput {
    pub current_exp: u32,
    pub current_level: u32,
    pub current_stage: u32,
    pub gain_exp: u32,
    pub exp_per_level: u32,
    pub max_stage: u32,
    pub evolve_every: u32,
    pub hp_bonus_per_level: u32,
}

impl LevelProgressInput {
    /// Input with default tuning
    pub fn new(current_exp: u32, current_level: u32, current_stage: u32, gain_exp: u32) -> Self {
        LevelConfig::default().input(current_exp, current_level, current_stage, gain_exp)
    }
}

/// Outcome of applying earned experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    /// Leftover experience toward the next level
    pub next_exp: u32,
    pub next_level: u32,
    pub next_stage: u32,
    /// Max HP gained from level-ups that did not evolve
    pub hp_bonus: u32,
    /// Evolutions triggered
    pub evolve_count: u32,
}

/// Apply earned experience, resolving every level-up it pays for
pub fn resolve_level_progress(input: LevelProgressInput) -> LevelProgress {
    let per_level = input.exp_per_level.max(1);
    let mut exp = input.current_exp.saturating_add(input.gain_exp);
    let mut level = input.current_level.max(1);
    let mut stage = input.current_stage;
    let mut hp_bonus = 0;
    let mut evolve_count = 0;

    while exp >= level.saturating_mul(per_level) {
        exp -= level.saturating_mul(per_level);
        level += 1;
        let evolves = stage < input.max_stage
            && input.evolve_every > 0
            && level % input.evolve_every == 0;
        if evolves {
            stage += 1;
            evolve_count += 1;
            log::debug!("Level {} reached, evolving to stage {}", level, stage);
        } else {
            hp_bonus += input.hp_bonus_per_level;
        }
    }

    LevelProgress {
        next_exp: exp,
        next_level: level,
        next_stage: stage,
        hp_bonus,
        evolve_count,
    }
}

/// Name for an evolution stage
pub fn stage_title(stage: u32) -> &'static str {
    match stage {
        0 => "Hatchling",
        1 => "Fighter",
        2 => "Champion",
        _ => "Legend",
    }
}
