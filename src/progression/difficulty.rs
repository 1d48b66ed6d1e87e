//! Difficulty tiers
//!
//! Turns a skill level into the range multiplier (`diff_mod`) the question
//! dispatcher scales a move's numbers by.

use serde::{Deserialize, Serialize};

use crate::questions::MoveConfig;
use super::ability::{get_difficulty_level_for_ops, AbilityModel};

/// Named skill tiers, one per ability level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tier {
    Novice,
    Apprentice,
    #[default]
    Adept,
    Expert,
    Master,
}

impl Tier {
    /// Levels above 4 count as Master
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Tier::Novice,
            1 => Tier::Apprentice,
            2 => Tier::Adept,
            3 => Tier::Expert,
            _ => Tier::Master,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Tier::Novice => 0,
            Tier::Apprentice => 1,
            Tier::Adept => 2,
            Tier::Expert => 3,
            Tier::Master => 4,
        }
    }

    /// Multiplier applied to a move's numeric range
    pub fn range_mult(&self) -> f64 {
        match self {
            Tier::Novice => 0.6,
            Tier::Apprentice => 0.8,
            Tier::Adept => 1.0,
            Tier::Expert => 1.25,
            Tier::Master => 1.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Novice => "Novice",
            Tier::Apprentice => "Apprentice",
            Tier::Adept => "Adept",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }
}

/// Tier for a move: the rounded mean level over the move's operation codes
pub fn tier_for_move(model: Option<&AbilityModel>, mv: &MoveConfig, fallback_level: u8) -> Tier {
    Tier::from_level(get_difficulty_level_for_ops(model, mv.ops.as_slice(), fallback_level))
}

/// Range multiplier to pass to `gen_q` for a move
pub fn diff_mod_for_move(model: Option<&AbilityModel>, mv: &MoveConfig, fallback_level: u8) -> f64 {
    tier_for_move(model, mv, fallback_level).range_mult()
}
