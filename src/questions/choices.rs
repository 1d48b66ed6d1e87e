//! Choice building and distractor synthesis
//!
//! Turns a draft into a finished question with a fixed number of unique,
//! shuffled options. Random fillers are bounded by a guard counter; once it
//! runs out the remaining slots are padded deterministically.

use rand::Rng;

use crate::dice::{rand_int, shuffle};
use super::op::Op;
use super::question::{Draft, Question, Span};
use super::rational::{fraction_text, normalize_fraction_label, parse_fraction_label, Fraction};

/// Options on a numeric question
pub const CHOICE_COUNT: usize = 4;

/// Random filler attempts before deterministic padding kicks in
const FILL_GUARD: usize = 50;

/// Attach four shuffled numeric choices to a draft
pub fn make_choices(draft: Draft, rng: &mut impl Rng) -> Question {
    let answer = draft.answer;
    let mut choices = vec![answer];

    // Preferred distractors first (at most CHOICE_COUNT - 1 of them fit)
    for &candidate in &draft.distractor_candidates {
        if choices.len() >= CHOICE_COUNT {
            break;
        }
        if candidate >= 0 && !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }

    let spread = 5.max((answer.abs() as f64 * 0.2).ceil() as i64);
    let mut guard = 0;
    while choices.len() < CHOICE_COUNT && guard < FILL_GUARD {
        guard += 1;
        let candidate = answer + rand_int(rng, -spread, spread);
        if candidate >= 0 && !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }

    let mut pad = 1;
    while choices.len() < CHOICE_COUNT {
        let candidate = answer + pad;
        if !choices.contains(&candidate) {
            choices.push(candidate);
        }
        pad += 1;
    }

    shuffle(rng, &mut choices);

    Question {
        display: draft.display,
        answer,
        choices,
        op: draft.op,
        steps: draft.steps,
        choice_labels: None,
        answer_label: None,
    }
}

/// Wrong answers a student actually gives for `a × b`.
///
/// Neighbouring multiplication-table cells come first, in random order,
/// followed by near-answer offsets scaled to the product's magnitude.
/// Negative values, duplicates and the answer itself are dropped.
pub fn build_multiplication_distractors(a: i64, b: i64, answer: i64, rng: &mut impl Rng) -> Vec<i64> {
    let neighbours = [
        (a - 1) * b,
        (a + 1) * b,
        a * (b - 1),
        a * (b + 1),
        (a - 1) * (b - 1),
        (a + 1) * (b + 1),
        (a - 1) * (b + 1),
        (a + 1) * (b - 1),
    ];

    let mut table = Vec::with_capacity(neighbours.len());
    for value in neighbours {
        if value >= 0 && value != answer && !table.contains(&value) {
            table.push(value);
        }
    }
    shuffle(rng, &mut table);

    let step = 1.max((answer.abs() as f64 * 0.1).round() as i64);
    let mut out = table;
    for k in [1, -1, 2, -2] {
        let value = answer + k * step;
        if value >= 0 && value != answer && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Collect `count` unique fraction labels, the correct one first.
///
/// Order of preference: the correct label, the caller's common-mistake
/// candidates, random fractions drawn from `span`, then `correct + k/d`
/// which is strictly increasing and therefore always terminates.
pub fn build_fraction_choice_labels(
    correct: &str,
    candidates: &[String],
    span: Span,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let correct = normalize_fraction_label(correct);
    let mut labels = vec![correct.clone()];

    for candidate in candidates {
        if labels.len() >= count {
            break;
        }
        let label = normalize_fraction_label(candidate);
        if is_usable_label(&label) && !labels.contains(&label) {
            labels.push(label);
        }
    }

    let max_num = span.max.max(2);
    let mut guard = 0;
    while labels.len() < count && guard < FILL_GUARD {
        guard += 1;
        let d = rand_int(rng, 2, 12);
        let n = rand_int(rng, 1, max_num);
        let label = fraction_text(&Fraction::new(n, d));
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    let base = parse_fraction_label(&correct).unwrap_or(Fraction { n: 0, d: 1 });
    let mut k = 1;
    while labels.len() < count {
        let label = fraction_text(&base.add(&Fraction::new(k, base.d)));
        if !labels.contains(&label) {
            labels.push(label);
        }
        k += 1;
    }

    labels
}

/// Positive, well-formed fraction text
fn is_usable_label(label: &str) -> bool {
    parse_fraction_label(label).is_some_and(|f| f.n > 0)
}

/// Shuffle labels and report where the correct one landed
pub fn make_labeled_choices(mut labels: Vec<String>, correct: &str, rng: &mut impl Rng) -> (Vec<String>, i64) {
    shuffle(rng, &mut labels);
    let index = labels.iter().position(|l| l == correct).unwrap_or(0);
    (labels, index as i64)
}

/// Finish a labelled question. `labels` are shown in the given order.
pub fn labeled_question(
    op: Op,
    display: String,
    steps: Vec<String>,
    labels: Vec<String>,
    answer_index: i64,
) -> Question {
    let answer_label = labels.get(answer_index as usize).cloned();
    Question {
        display,
        answer: answer_index,
        choices: (0..labels.len() as i64).collect(),
        op,
        steps,
        choice_labels: Some(labels),
        answer_label,
    }
}
