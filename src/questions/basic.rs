//! Single-operator questions: `+ - × ÷`

use rand::Rng;

use crate::dice::rand_int;
use super::choices::build_multiplication_distractors;
use super::op::Op;
use super::question::{Draft, Span};

/// `a + b`
pub fn gen_add(span: Span, rng: &mut impl Rng) -> Draft {
    let a = rand_int(rng, span.min, span.max);
    let b = rand_int(rng, span.min, span.max);
    Draft::new(Op::Add, format!("{} + {} = ?", a, b), a + b)
}

/// `a - b` with `a > b`, so the result is never negative
pub fn gen_sub(span: Span, rng: &mut impl Rng) -> Draft {
    let mut a = rand_int(rng, span.min, span.max);
    let mut b = rand_int(rng, span.min, span.max);
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    // Ties bump the minuend so the answer is at least 1
    if a == b {
        a += 1;
    }
    Draft::new(Op::Sub, format!("{} - {} = ?", a, b), a - b)
}

/// `a × b`, with multiplication-table neighbours as preferred distractors
pub fn gen_mul(span: Span, rng: &mut impl Rng) -> Draft {
    let a = rand_int(rng, span.min, span.max);
    let b = rand_int(rng, span.min, span.max);
    let answer = a * b;
    let distractors = build_multiplication_distractors(a, b, answer, rng);
    Draft::new(Op::Mul, format!("{} × {} = ?", a, b), answer).with_distractors(distractors)
}

/// `dividend ÷ divisor`, where the dividend is built as `divisor × quotient`.
/// The divisor is at least 2.
pub fn gen_div(span: Span, rng: &mut impl Rng) -> Draft {
    let divisor = rand_int(rng, span.min.max(2), span.max.max(2));
    let quotient = rand_int(rng, span.min.max(1), span.max.max(1));
    let dividend = divisor * quotient;
    Draft::new(Op::Div, format!("{} ÷ {} = ?", dividend, divisor), quotient)
}
