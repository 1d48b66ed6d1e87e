//! Question records

use serde::{Deserialize, Serialize};

use super::op::Op;

/// The numeric span and operation codes a move may draw from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveConfig {
    /// Inclusive (min, max)
    pub range: (i64, i64),
    /// Operation codes such as `"+"`, `"×"`, `"mixed3"`, `"frac_cmp"`
    pub ops: Vec<String>,
}

impl MoveConfig {
    pub fn new(range: (i64, i64), ops: &[&str]) -> Self {
        Self {
            range,
            ops: ops.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A finished multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Problem text: digits and operator symbols only
    pub display: String,
    /// Correct value, or the index into `choice_labels` when labels are present
    pub answer: i64,
    /// Shuffled options (indices `0..n` for labelled questions)
    pub choices: Vec<i64>,
    pub op: Op,
    /// Worked solution, translated
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_label: Option<String>,
}

impl Question {
    /// Whether a picked choice value is the right one
    pub fn is_correct(&self, choice: i64) -> bool {
        choice == self.answer
    }

    /// Text of the correct option
    pub fn correct_label(&self) -> String {
        match (&self.answer_label, &self.choice_labels) {
            (Some(label), _) => label.clone(),
            (None, Some(labels)) => labels
                .get(self.answer as usize)
                .cloned()
                .unwrap_or_default(),
            (None, None) => self.answer.to_string(),
        }
    }

    /// Text shown on each option, in choice order
    pub fn option_texts(&self) -> Vec<String> {
        match &self.choice_labels {
            Some(labels) => self
                .choices
                .iter()
                .map(|&i| labels.get(i as usize).cloned().unwrap_or_default())
                .collect(),
            None => self.choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A generator's output before choices are attached
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub display: String,
    pub answer: i64,
    pub op: Op,
    pub steps: Vec<String>,
    /// Preferred wrong answers, consumed before random fillers
    pub distractor_candidates: Vec<i64>,
}

impl Draft {
    pub fn new(op: Op, display: String, answer: i64) -> Self {
        Self {
            display,
            answer,
            op,
            steps: Vec::new(),
            distractor_candidates: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_distractors(mut self, candidates: Vec<i64>) -> Self {
        self.distractor_candidates = candidates;
        self
    }
}

/// Clamped, ordered bounds every generator works from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: i64,
    pub max: i64,
}

impl Span {
    pub fn new(min: i64, max: i64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn width(&self) -> i64 {
        self.max - self.min
    }
}
