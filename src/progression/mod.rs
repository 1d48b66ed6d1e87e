//! Progression systems
//!
//! Per-skill adaptive difficulty and experience/evolution resolution.

pub mod adaptive;
pub mod ability;
pub mod xp;
pub mod difficulty;

pub use adaptive::{update_adaptive_difficulty, AdaptiveConfig, AdaptiveInput, AdaptiveOutcome};
pub use ability::{
    create_ability_model, get_bucket, get_difficulty_level_for_op, get_difficulty_level_for_ops,
    map_op_to_ability_group, update_ability_model, update_ability_model_with,
    AbilityBucket, AbilityGroup, AbilityModel, AbilityUpdate, AbilityUpdateOutcome,
};
pub use xp::{resolve_level_progress, exp_for_level, stage_title, LevelConfig, LevelProgress, LevelProgressInput};
pub use difficulty::{Tier, tier_for_move, diff_mod_for_move};
