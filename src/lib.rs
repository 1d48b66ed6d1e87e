//! Mathfight - adaptive arithmetic engine for a math battle game
//!
//! Generates multiple-choice math questions across many operation
//! families, tracks per-skill difficulty from recent answers, and resolves
//! experience into levels and evolutions.

pub mod dice;
pub mod questions;
pub mod progression;
pub mod config;
pub mod data;
pub mod error;

// Re-export commonly used types
pub use questions::{gen_q, GenOptions, MoveConfig, Op, Question, Translator};
pub use progression::{AbilityGroup, AbilityModel, LevelProgress};
pub use config::EngineConfig;
pub use error::DataError;
