//! Move definitions
//!
//! A move is a battle action bound to a `MoveConfig`. The built-in catalog
//! covers every operation family; a RON file can replace it.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::progression::{map_op_to_ability_group, AbilityGroup};
use crate::questions::{MoveConfig, Op};

/// A named move and the questions it asks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDef {
    /// Unique ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Inclusive numeric range before difficulty scaling
    pub range: (i64, i64),
    /// Operation codes
    pub ops: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MoveDef {
    pub fn new(id: &str, name: &str, range: (i64, i64), ops: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            range,
            ops: ops.iter().map(|s| s.to_string()).collect(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Config handed to `gen_q`
    pub fn config(&self) -> MoveConfig {
        MoveConfig { range: self.range, ops: self.ops.clone() }
    }

    /// Skill groups this move trains, in first-seen order
    pub fn groups(&self) -> Vec<AbilityGroup> {
        let mut groups = Vec::new();
        for code in &self.ops {
            let group = map_op_to_ability_group(code);
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }
}

/// Collection of move definitions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveDef>,
}

impl MoveCatalog {
    /// Find a move by ID
    pub fn find(&self, id: &str) -> Option<&MoveDef> {
        self.moves.iter().find(|m| m.id == id)
    }

    /// Moves that train a given skill group
    pub fn for_group(&self, group: AbilityGroup) -> Vec<&MoveDef> {
        self.moves.iter().filter(|m| m.groups().contains(&group)).collect()
    }

    /// Reject catalogs the engine could only partly honour: duplicate IDs,
    /// moves without ops, unknown operation codes or inverted ranges.
    pub fn validate(&self) -> Result<()> {
        for (i, mv) in self.moves.iter().enumerate() {
            if self.moves[..i].iter().any(|other| other.id == mv.id) {
                return Err(DataError::Invalid(format!("duplicate move id {:?}", mv.id)));
            }
            if mv.ops.is_empty() {
                return Err(DataError::Invalid(format!("move {:?} has no ops", mv.id)));
            }
            if let Some(code) = mv.ops.iter().find(|c| Op::from_code(c).is_none()) {
                return Err(DataError::Invalid(format!("move {:?} uses unknown op {:?}", mv.id, code)));
            }
            if mv.range.0 > mv.range.1 {
                return Err(DataError::Invalid(format!(
                    "move {:?} has range {}..{}",
                    mv.id, mv.range.0, mv.range.1
                )));
            }
        }
        Ok(())
    }
}

/// Built-in moves, one or more per operation family
pub fn default_move_catalog() -> MoveCatalog {
    MoveCatalog {
        moves: vec![
            // Basic
            MoveDef::new("tackle", "Tackle", (1, 10), &["+"])
                .with_description("A simple charge powered by addition."),
            MoveDef::new("scratch", "Scratch", (1, 10), &["-"]),
            MoveDef::new("quick_jab", "Quick Jab", (1, 20), &["+", "-"]),
            MoveDef::new("double_kick", "Double Kick", (2, 9), &["×"])
                .with_description("Strikes twice as hard when you know your tables."),
            MoveDef::new("split_slash", "Split Slash", (2, 9), &["÷"]),

            // Multi-step
            MoveDef::new("combo_chain", "Combo Chain", (1, 15), &["mixed2"]),
            MoveDef::new("power_surge", "Power Surge", (1, 12), &["mixed3", "mixed4"]),

            // Unknowns
            MoveDef::new("mystery_orb", "Mystery Orb", (1, 15), &["unknown1", "unknown2"]),
            MoveDef::new("riddle_beam", "Riddle Beam", (1, 12), &["unknown3", "unknown4"])
                .with_description("Solve for the hidden number to focus the beam."),

            // Fractions
            MoveDef::new("scale_weigh", "Scale Weigh", (1, 10), &["frac_cmp"]),
            MoveDef::new("slice_share", "Slice Share", (1, 12), &["frac_same", "frac_diff"]),
            MoveDef::new("prism_split", "Prism Split", (1, 10), &["frac_muldiv"]),
        ],
    }
}
