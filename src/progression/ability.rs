//! Per-skill ability model
//!
//! Every operation belongs to one of seven skill groups. Each group keeps
//! its own level and a short answer history, and the adaptive controller
//! moves the levels independently. Models are values: updates return a
//! fresh model and never touch the old one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::questions::Op;
use super::adaptive::{AdaptiveConfig, DEFAULT_WINDOW, MAX_LEVEL, MIN_LEVEL};

/// Skill groups tracked independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityGroup {
    Add,
    Sub,
    Mul,
    Div,
    Unknown,
    Mixed,
    Fraction,
}

impl AbilityGroup {
    pub const ALL: [AbilityGroup; 7] = [
        AbilityGroup::Add,
        AbilityGroup::Sub,
        AbilityGroup::Mul,
        AbilityGroup::Div,
        AbilityGroup::Unknown,
        AbilityGroup::Mixed,
        AbilityGroup::Fraction,
    ];

    /// Key used in persisted models
    pub fn key(&self) -> &'static str {
        match self {
            AbilityGroup::Add => "add",
            AbilityGroup::Sub => "sub",
            AbilityGroup::Mul => "mul",
            AbilityGroup::Div => "div",
            AbilityGroup::Unknown => "unknown",
            AbilityGroup::Mixed => "mixed",
            AbilityGroup::Fraction => "fraction",
        }
    }

    /// Group an operation trains
    pub fn for_op(op: Op) -> Self {
        match op {
            Op::Add => AbilityGroup::Add,
            Op::Sub => AbilityGroup::Sub,
            Op::Mul => AbilityGroup::Mul,
            Op::Div => AbilityGroup::Div,
            Op::Mixed2 | Op::Mixed3 | Op::Mixed4 => AbilityGroup::Mixed,
            Op::Unknown1 | Op::Unknown2 | Op::Unknown3 | Op::Unknown4 => AbilityGroup::Unknown,
            Op::FracCmp | Op::FracSame | Op::FracDiff | Op::FracMulDiv => AbilityGroup::Fraction,
        }
    }
}

/// Map an operation code to its skill group. Never fails: codes outside
/// every family, blank ones included, count as `mixed`.
pub fn map_op_to_ability_group(code: &str) -> AbilityGroup {
    Op::family_of(code).map(AbilityGroup::for_op).unwrap_or(AbilityGroup::Mixed)
}

/// Level and recent answers for one skill group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityBucket {
    pub level: u8,
    /// Oldest first
    pub recent: Vec<bool>,
}

impl AbilityBucket {
    pub fn new(level: u8) -> Self {
        Self { level: clamp_level(level), recent: Vec::new() }
    }

    /// Fraction of correct answers in the window, if any
    pub fn accuracy(&self) -> Option<f64> {
        if self.recent.is_empty() {
            return None;
        }
        let hits = self.recent.iter().filter(|&&c| c).count();
        Some(hits as f64 / self.recent.len() as f64)
    }
}

fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Skill levels for every group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityModel {
    buckets: BTreeMap<AbilityGroup, AbilityBucket>,
}

impl Default for AbilityModel {
    fn default() -> Self {
        create_ability_model(AdaptiveConfig::default().initial_level)
    }
}

impl AbilityModel {
    /// Bucket as stored, if present
    pub fn bucket(&self, group: AbilityGroup) -> Option<&AbilityBucket> {
        self.buckets.get(&group)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&AbilityGroup, &AbilityBucket)> {
        self.buckets.iter()
    }

    /// Build from a parsed bucket map. Groups left out stay absent; lookups
    /// fill them with the fallback level.
    pub fn from_buckets(buckets: BTreeMap<AbilityGroup, AbilityBucket>) -> Self {
        Self { buckets }
    }

    /// Read a persisted model without trusting its shape.
    ///
    /// Every group comes back present. Levels that are missing, not numbers
    /// or out of range become `fallback_level` (or are clamped); history
    /// keeps only boolean entries, newest `DEFAULT_WINDOW` of them.
    pub fn from_json_value(value: &Value, fallback_level: u8) -> Self {
        let fallback_level = clamp_level(fallback_level);
        let mut buckets = BTreeMap::new();
        for group in AbilityGroup::ALL {
            let entry = value.get(group.key());
            let level = entry
                .and_then(|b| b.get("level"))
                .and_then(Value::as_f64)
                .filter(|l| l.is_finite())
                .map(|l| l.round().clamp(MIN_LEVEL as f64, MAX_LEVEL as f64) as u8)
                .unwrap_or(fallback_level);
            let mut recent: Vec<bool> = entry
                .and_then(|b| b.get("recent"))
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Value::as_bool).collect())
                .unwrap_or_default();
            if recent.len() > DEFAULT_WINDOW {
                recent.drain(..recent.len() - DEFAULT_WINDOW);
            }
            buckets.insert(group, AbilityBucket { level, recent });
        }
        Self { buckets }
    }
}

/// A model with every group at `initial_level` (clamped to 0..=4) and no history
pub fn create_ability_model(initial_level: u8) -> AbilityModel {
    let buckets = AbilityGroup::ALL
        .iter()
        .map(|&group| (group, AbilityBucket::new(initial_level)))
        .collect();
    AbilityModel { buckets }
}

/// Owned, normalised copy of a group's bucket. A missing model or bucket
/// yields `fallback_level` with empty history.
pub fn get_bucket(model: Option<&AbilityModel>, group: AbilityGroup, fallback_level: u8) -> AbilityBucket {
    match model.and_then(|m| m.bucket(group)) {
        Some(bucket) => AbilityBucket {
            level: clamp_level(bucket.level),
            recent: bucket.recent.clone(),
        },
        None => AbilityBucket::new(fallback_level),
    }
}

/// Current level for the group an operation code trains
pub fn get_difficulty_level_for_op(model: Option<&AbilityModel>, code: &str, fallback_level: u8) -> u8 {
    get_bucket(model, map_op_to_ability_group(code), fallback_level).level
}

/// Rounded mean level across several operation codes, for moves that span
/// more than one skill group. No codes yields the fallback.
pub fn get_difficulty_level_for_ops<S: AsRef<str>>(
    model: Option<&AbilityModel>,
    codes: &[S],
    fallback_level: u8,
) -> u8 {
    if codes.is_empty() {
        return clamp_level(fallback_level);
    }
    let total: u32 = codes
        .iter()
        .map(|code| get_difficulty_level_for_op(model, code.as_ref(), fallback_level) as u32)
        .sum();
    let mean = total as f64 / codes.len() as f64;
    clamp_level(mean.round() as u8)
}

/// One answered question to fold into a model
#[derive(Debug, Clone, Copy)]
pub struct AbilityUpdate<'a> {
    pub model: Option<&'a AbilityModel>,
    pub op: &'a str,
    pub correct: bool,
    pub window_size: usize,
    pub min_level: u8,
    pub max_level: u8,
    pub fallback_level: u8,
}

impl<'a> AbilityUpdate<'a> {
    /// Update with the default window, bounds and fallback
    pub fn new(model: Option<&'a AbilityModel>, op: &'a str, correct: bool) -> Self {
        let config = AdaptiveConfig::default();
        Self::with_config(model, op, correct, &config)
    }

    pub fn with_config(model: Option<&'a AbilityModel>, op: &'a str, correct: bool, config: &AdaptiveConfig) -> Self {
        Self {
            model,
            op,
            correct,
            window_size: config.window_size,
            min_level: config.min_level,
            max_level: config.max_level,
            fallback_level: config.initial_level,
        }
    }
}

/// Result of `update_ability_model`
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityUpdateOutcome {
    pub group: AbilityGroup,
    pub next_level: u8,
    pub next_recent: Vec<bool>,
    /// Complete model: every group present and normalised
    pub next_model: AbilityModel,
}

/// Fold one answer into the model
pub fn update_ability_model(update: AbilityUpdate<'_>) -> AbilityUpdateOutcome {
    let config = AdaptiveConfig {
        window_size: update.window_size,
        min_level: update.min_level,
        max_level: update.max_level,
        initial_level: update.fallback_level,
        ..AdaptiveConfig::default()
    };
    update_ability_model_with(update.model, update.op, update.correct, &config)
}

/// Fold one answer into the model using explicit controller tuning
pub fn update_ability_model_with(
    model: Option<&AbilityModel>,
    op: &str,
    correct: bool,
    config: &AdaptiveConfig,
) -> AbilityUpdateOutcome {
    let group = map_op_to_ability_group(op);
    let window = config.window_size.max(1);

    let mut buckets = BTreeMap::new();
    for g in AbilityGroup::ALL {
        let mut bucket = get_bucket(model, g, config.initial_level);
        if bucket.recent.len() > window {
            bucket.recent.drain(..bucket.recent.len() - window);
        }
        buckets.insert(g, bucket);
    }

    let current = get_bucket(model, group, config.initial_level);
    let outcome = config.step(current.level, &current.recent, correct);
    let next_level = clamp_level(outcome.next_level);

    buckets.insert(
        group,
        AbilityBucket { level: next_level, recent: outcome.next_recent.clone() },
    );

    AbilityUpdateOutcome {
        group,
        next_level,
        next_recent: outcome.next_recent,
        next_model: AbilityModel { buckets },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_op_to_ability_group() {
        assert_eq!(map_op_to_ability_group("+"), AbilityGroup::Add);
        assert_eq!(map_op_to_ability_group("-"), AbilityGroup::Sub);
        assert_eq!(map_op_to_ability_group("×"), AbilityGroup::Mul);
        assert_eq!(map_op_to_ability_group("*"), AbilityGroup::Mul);
        assert_eq!(map_op_to_ability_group("÷"), AbilityGroup::Div);
        assert_eq!(map_op_to_ability_group("mixed4"), AbilityGroup::Mixed);
        assert_eq!(map_op_to_ability_group("unknown3"), AbilityGroup::Unknown);
        assert_eq!(map_op_to_ability_group("frac_cmp"), AbilityGroup::Fraction);
        assert_eq!(map_op_to_ability_group("dec_mul"), AbilityGroup::Fraction);
        assert_eq!(map_op_to_ability_group("unknown9"), AbilityGroup::Unknown);
        assert_eq!(map_op_to_ability_group(""), AbilityGroup::Mixed);
        assert_eq!(map_op_to_ability_group("%"), AbilityGroup::Mixed);
        assert_eq!(map_op_to_ability_group("fraction_bogus"), AbilityGroup::Mixed);
        assert_eq!(map_op_to_ability_group("frac_add"), AbilityGroup::Fraction);
    }

    #[test]
    fn test_create_model_is_complete_and_clamped() {
        let model = create_ability_model(9);
        for group in AbilityGroup::ALL {
            assert_eq!(model.bucket(group), Some(&AbilityBucket { level: 4, recent: vec![] }));
        }
        assert_eq!(create_ability_model(2), create_ability_model(2));
        assert_eq!(AbilityModel::default(), create_ability_model(2));
    }

    #[test]
    fn test_bucket_accuracy() {
        assert_eq!(AbilityBucket::new(2).accuracy(), None);
        let bucket = AbilityBucket { level: 2, recent: vec![true, false, true, true] };
        assert_eq!(bucket.accuracy(), Some(0.75));
    }

    #[test]
    fn test_get_bucket_tolerates_missing() {
        assert_eq!(get_bucket(None, AbilityGroup::Mul, 3).level, 3);
        let partial = AbilityModel::from_buckets(BTreeMap::new());
        assert_eq!(get_bucket(Some(&partial), AbilityGroup::Div, 1), AbilityBucket::new(1));
        let mut buckets = BTreeMap::new();
        buckets.insert(AbilityGroup::Add, AbilityBucket { level: 200, recent: vec![true] });
        let odd = AbilityModel::from_buckets(buckets);
        assert_eq!(get_bucket(Some(&odd), AbilityGroup::Add, 2).level, 4);
    }

    #[test]
    fn test_levels_for_ops() {
        let mut buckets = BTreeMap::new();
        buckets.insert(AbilityGroup::Add, AbilityBucket::new(4));
        buckets.insert(AbilityGroup::Sub, AbilityBucket::new(1));
        let model = AbilityModel::from_buckets(buckets);
        assert_eq!(get_difficulty_level_for_op(Some(&model), "+", 2), 4);
        // (4 + 1) / 2 = 2.5 rounds up
        assert_eq!(get_difficulty_level_for_ops(Some(&model), &["+", "-"], 2), 3);
        // Missing mul bucket counts as the fallback: (4 + 1 + 0) / 3
        assert_eq!(get_difficulty_level_for_ops(Some(&model), &["+", "-", "×"], 0), 2);
        let none: [&str; 0] = [];
        assert_eq!(get_difficulty_level_for_ops(Some(&model), &none, 2), 2);
    }

    #[test]
    fn test_update_touches_only_its_group() {
        let model = create_ability_model(2);
        let mut current = model.clone();
        for _ in 0..4 {
            current = update_ability_model(AbilityUpdate::new(Some(&current), "×", true)).next_model;
        }
        assert_eq!(current.bucket(AbilityGroup::Mul).unwrap().level, 3);
        assert_eq!(current.bucket(AbilityGroup::Add), model.bucket(AbilityGroup::Add));
        // Input model untouched
        assert_eq!(model, create_ability_model(2));
    }

    #[test]
    fn test_update_from_missing_model() {
        let out = update_ability_model(AbilityUpdate::new(None, "frac_same", false));
        assert_eq!(out.group, AbilityGroup::Fraction);
        assert_eq!(out.next_level, 2);
        assert_eq!(out.next_recent, vec![false]);
        assert_eq!(out.next_model.groups().count(), 7);
    }

    #[test]
    fn test_from_json_value_normalises() {
        let value = json!({
            "add": { "level": 3, "recent": [true, false, "x", true] },
            "sub": { "level": "high" },
            "mul": { "level": 7.6 },
            "div": "broken",
            "mixed": { "level": 1, "recent": [true, true, true, true, true, true, false, false] }
        });
        let model = AbilityModel::from_json_value(&value, 2);
        assert_eq!(model.bucket(AbilityGroup::Add).unwrap().recent, vec![true, false, true]);
        assert_eq!(model.bucket(AbilityGroup::Add).unwrap().level, 3);
        assert_eq!(model.bucket(AbilityGroup::Sub).unwrap().level, 2);
        assert_eq!(model.bucket(AbilityGroup::Mul).unwrap().level, 4);
        assert_eq!(model.bucket(AbilityGroup::Div).unwrap().level, 2);
        assert_eq!(model.bucket(AbilityGroup::Fraction).unwrap().level, 2);
        assert_eq!(model.bucket(AbilityGroup::Mixed).unwrap().recent.len(), DEFAULT_WINDOW);
    }

    #[test]
    fn test_model_serialises_as_plain_object() {
        let model = create_ability_model(1);
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["fraction"]["level"], json!(1));
        assert_eq!(value["add"]["recent"], json!([]));
        let back: AbilityModel = serde_json::from_value(value).unwrap();
        assert_eq!(back, model);
    }
}
