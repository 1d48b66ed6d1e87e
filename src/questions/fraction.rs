//! Fraction questions
//!
//! Fraction answers are not plain numeric keys (`1/2` and `2/4` are the same
//! value), so these questions carry `choice_labels` and answer with an index.
//! Every label is rendered in lowest terms.

use rand::Rng;

use crate::dice::{chance, rand_int};
use super::choices::{build_fraction_choice_labels, labeled_question, make_labeled_choices, CHOICE_COUNT};
use super::mixed::Sign;
use super::op::Op;
use super::question::{Question, Span};
use super::rational::{fraction_text, lcm, simplify_fraction, Fraction};
use super::translate::Translator;

/// Redraws before a fraction generator falls back to addition
pub const FRACTION_MAX_ATTEMPTS: u32 = 20;

/// Share of `frac_cmp` trials built as scaled-equal pairs
const EQUAL_PAIR_RATE: f64 = 0.22;

/// Comparison symbols, in the order they are offered
pub const COMPARISON_LABELS: [&str; 3] = ["<", ">", "="];

/// An unsimplified `n/d` pair as shown in the problem text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Raw {
    n: i64,
    d: i64,
}

impl Raw {
    fn text(&self) -> String {
        format!("{}/{}", self.n, self.d)
    }
}

/// Denominator bounds: the move's max, clamped to [2, 12]
fn denominator_span(span: Span) -> Span {
    Span::new(2, span.max.clamp(2, 12))
}

fn random_denominator(span: Span, rng: &mut impl Rng) -> i64 {
    let ds = denominator_span(span);
    rand_int(rng, ds.min, ds.max)
}

/// A proper fraction over `d`
fn random_numerator(d: i64, rng: &mut impl Rng) -> i64 {
    rand_int(rng, 1, (d - 1).max(1))
}

fn random_raw(span: Span, rng: &mut impl Rng) -> Raw {
    raw_over(denominator_span(span), rng)
}

/// A proper fraction with its denominator drawn from `ds`
fn raw_over(ds: Span, rng: &mut impl Rng) -> Raw {
    let d = rand_int(rng, ds.min, ds.max);
    Raw { n: random_numerator(d, rng), d }
}

/// Denominators for `frac_diff`, which needs at least two to pick from
fn unlike_denominator_span(span: Span) -> Span {
    let ds = denominator_span(span);
    if ds.width() == 0 {
        Span::new(ds.min, ds.min + 1)
    } else {
        ds
    }
}

fn simplify_step(t: &dyn Translator, n: i64, d: i64, answer: &Fraction) -> String {
    t.translate(
        "question.steps.simplify",
        "Simplify: {n}/{d} = {answer}",
        &[("n", &n), ("d", &d), ("answer", answer)],
    )
}

/// Shuffle the options and wrap them as a labelled question
fn finish(
    op: Op,
    display: String,
    steps: Vec<String>,
    answer: &Fraction,
    mistakes: Vec<String>,
    span: Span,
    rng: &mut impl Rng,
) -> Question {
    let correct = fraction_text(answer);
    let labels = build_fraction_choice_labels(&correct, &mistakes, span, CHOICE_COUNT, rng);
    let (labels, index) = make_labeled_choices(labels, &correct, rng);
    labeled_question(op, display, steps, labels, index)
}

/// `a/b ○ c/d`: pick `<`, `>` or `=`
pub fn gen_frac_cmp(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Question {
    let left = random_raw(span, rng);
    let right = if chance(rng, EQUAL_PAIR_RATE) {
        let k = rand_int(rng, 2, 3);
        Raw { n: left.n * k, d: left.d * k }
    } else {
        random_raw(span, rng)
    };

    let cross_left = left.n * right.d;
    let cross_right = right.n * left.d;
    let index = match cross_left.cmp(&cross_right) {
        std::cmp::Ordering::Less => 0,
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Equal => 2,
    };

    let steps = vec![t.translate(
        "question.steps.crossMultiply",
        "Cross multiply: {a} × {d} = {l}, {c} × {b} = {r}",
        &[
            ("a", &left.n),
            ("b", &left.d),
            ("c", &right.n),
            ("d", &right.d),
            ("l", &cross_left),
            ("r", &cross_right),
        ],
    )];
    let labels = COMPARISON_LABELS.iter().map(|s| s.to_string()).collect();
    let display = format!("{} ○ {}", left.text(), right.text());
    labeled_question(Op::FracCmp, display, steps, labels, index)
}

/// Add or subtract fractions sharing a denominator
pub fn gen_frac_same(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Question {
    for _ in 0..FRACTION_MAX_ATTEMPTS {
        let d = random_denominator(span, rng);
        let (a, b) = (random_numerator(d, rng), random_numerator(d, rng));
        let sign = Sign::random(rng);
        let raw = sign.apply(a, b);
        if sign == Sign::Minus && raw <= 0 {
            continue;
        }
        return frac_same_question(span, rng, t, d, a, b, sign);
    }
    log::debug!("frac_same hit retry ceiling, using addition");
    frac_same_question(span, rng, t, 2, 1, 1, Sign::Plus)
}

fn frac_same_question(
    span: Span,
    rng: &mut impl Rng,
    t: &dyn Translator,
    d: i64,
    a: i64,
    b: i64,
    sign: Sign,
) -> Question {
    let raw = sign.apply(a, b);
    let answer = simplify_fraction(raw, d);
    let steps = vec![
        t.translate(
            "question.steps.sameDenominator",
            "Same denominator, combine numerators: {a} {sign} {b} = {raw}",
            &[("a", &a), ("sign", &sign.symbol()), ("b", &b), ("raw", &raw)],
        ),
        simplify_step(t, raw, d, &answer),
    ];
    let mistakes = vec![
        // Combined the denominators too
        format!("{}/{}", raw, d * 2),
        fraction_text(&answer.reciprocal()),
        match sign {
            Sign::Plus => format!("{}/{}", a * b, d),
            Sign::Minus => format!("{}/{}", a + b, d),
        },
    ];
    let display = format!("{}/{} {} {}/{} = ?", a, d, sign.symbol(), b, d);
    finish(Op::FracSame, display, steps, &answer, mistakes, span, rng)
}

/// Add or subtract fractions with different denominators via their LCM
pub fn gen_frac_diff(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Question {
    let ds = unlike_denominator_span(span);
    for _ in 0..FRACTION_MAX_ATTEMPTS {
        let left = raw_over(ds, rng);
        let right = raw_over(ds, rng);
        if left.d == right.d {
            continue;
        }
        let sign = Sign::random(rng);
        let common = lcm(left.d, right.d);
        let raw = sign.apply(left.n * (common / left.d), right.n * (common / right.d));
        if sign == Sign::Minus && raw <= 0 {
            continue;
        }
        return frac_diff_question(span, rng, t, left, right, sign);
    }
    log::debug!("frac_diff hit retry ceiling, using addition");
    frac_diff_question(span, rng, t, Raw { n: 1, d: ds.min }, Raw { n: 1, d: ds.max }, Sign::Plus)
}

fn frac_diff_question(
    span: Span,
    rng: &mut impl Rng,
    t: &dyn Translator,
    left: Raw,
    right: Raw,
    sign: Sign,
) -> Question {
    let common = lcm(left.d, right.d);
    let (ln, rn) = (left.n * (common / left.d), right.n * (common / right.d));
    let raw = sign.apply(ln, rn);
    let answer = simplify_fraction(raw, common);
    let steps = vec![
        t.translate(
            "question.steps.commonDenominator",
            "Common denominator: lcm({b}, {d}) = {l}",
            &[("b", &left.d), ("d", &right.d), ("l", &common)],
        ),
        t.translate(
            "question.steps.rewrite",
            "Rewrite: {ln}/{l} {sign} {rn}/{l} = {raw}/{l}",
            &[("ln", &ln), ("rn", &rn), ("l", &common), ("sign", &sign.symbol()), ("raw", &raw)],
        ),
        simplify_step(t, raw, common, &answer),
    ];
    let mistakes = vec![
        // Numerators and denominators combined straight across
        format!("{}/{}", sign.apply(left.n, right.n), left.d + right.d),
        // Common denominator found but numerators not scaled
        format!("{}/{}", sign.apply(left.n, right.n), common),
        fraction_text(&answer.reciprocal()),
    ];
    let display = format!("{} {} {} = ?", left.text(), sign.symbol(), right.text());
    finish(Op::FracDiff, display, steps, &answer, mistakes, span, rng)
}

/// Multiply, or divide by multiplying with the reciprocal
pub fn gen_frac_muldiv(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Question {
    let left = random_raw(span, rng);
    let right = random_raw(span, rng);
    let divide = chance(rng, 0.5);

    let (display, raw_n, raw_d, steps, mistakes) = if divide {
        let raw_n = left.n * right.d;
        let raw_d = left.d * right.n;
        let steps = vec![t.translate(
            "question.steps.flipAndMultiply",
            "Flip the second fraction and multiply: {a}/{b} × {d}/{c} = {n}/{m}",
            &[("a", &left.n), ("b", &left.d), ("c", &right.n), ("d", &right.d), ("n", &raw_n), ("m", &raw_d)],
        )];
        let mistakes = vec![
            // Multiplied without flipping
            format!("{}/{}", left.n * right.n, left.d * right.d),
            // Flipped the wrong fraction
            format!("{}/{}", left.d * right.n, left.n * right.d),
            format!("{}/{}", left.n + right.d, left.d + right.n),
        ];
        (format!("{} ÷ {} = ?", left.text(), right.text()), raw_n, raw_d, steps, mistakes)
    } else {
        let raw_n = left.n * right.n;
        let raw_d = left.d * right.d;
        let steps = vec![t.translate(
            "question.steps.multiplyAcross",
            "Multiply across: {a} × {c} = {n}, {b} × {d} = {m}",
            &[("a", &left.n), ("b", &left.d), ("c", &right.n), ("d", &right.d), ("n", &raw_n), ("m", &raw_d)],
        )];
        let mistakes = vec![
            // Cross-multiplied the wrong pair
            format!("{}/{}", left.n * right.d, left.d * right.n),
            format!("{}/{}", left.n + right.n, left.d + right.d),
            format!("{}/{}", raw_d, raw_n),
        ];
        (format!("{} × {} = ?", left.text(), right.text()), raw_n, raw_d, steps, mistakes)
    };

    let answer = simplify_fraction(raw_n, raw_d);
    let mut steps = steps;
    steps.push(simplify_step(t, raw_n, raw_d, &answer));
    finish(Op::FracMulDiv, display, steps, &answer, mistakes, span, rng)
}
