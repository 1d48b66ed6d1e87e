//! Solve-for-`?` questions
//!
//! The answer is drawn first and the visible constants are derived from it,
//! so every equation has exactly the solution the question claims. Draws
//! that would need a negative constant are redrawn, up to
//! `UNKNOWN_MAX_ATTEMPTS`; after that the question becomes `? + 1 = ans + 1`.

use rand::Rng;

use crate::dice::{chance, rand_int, unit};
use super::mixed::factor_span;
use super::op::Op;
use super::question::{Draft, Span};
use super::translate::Translator;

/// Redraws before falling back to `? + 1`
pub const UNKNOWN_MAX_ATTEMPTS: u32 = 20;

fn undo_add_step(t: &dyn Translator, total: i64, b: i64, answer: i64) -> String {
    t.translate(
        "question.steps.undoAdd",
        "Subtract {b} from both sides: {total} - {b} = {answer}",
        &[("total", &total), ("b", &b), ("answer", &answer)],
    )
}

fn undo_sub_step(t: &dyn Translator, result: i64, b: i64, answer: i64) -> String {
    t.translate(
        "question.steps.undoSub",
        "Add {b} to both sides: {result} + {b} = {answer}",
        &[("result", &result), ("b", &b), ("answer", &answer)],
    )
}

fn missing_subtrahend_step(t: &dyn Translator, a: i64, result: i64, answer: i64) -> String {
    t.translate(
        "question.steps.missingSubtrahend",
        "The missing number is {a} - {result} = {answer}",
        &[("a", &a), ("result", &result), ("answer", &answer)],
    )
}

fn undo_mul_step(t: &dyn Translator, total: i64, k: i64, answer: i64) -> String {
    t.translate(
        "question.steps.undoMul",
        "Divide both sides by {k}: {total} ÷ {k} = {answer}",
        &[("total", &total), ("k", &k), ("answer", &answer)],
    )
}

/// Deterministic shape used once the retry budget is spent
fn fallback(op: Op, answer: i64, t: &dyn Translator) -> Draft {
    log::debug!("{} hit retry ceiling, using ? + 1 shape", op);
    let total = answer + 1;
    Draft::new(op, format!("? + 1 = {}", total), answer)
        .with_steps(vec![undo_add_step(t, total, 1, answer)])
}

/// `? + b = c`
pub fn gen_unknown1(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    let answer = rand_int(rng, span.min, span.max);
    let b = rand_int(rng, span.min, span.max);
    let total = answer + b;
    Draft::new(Op::Unknown1, format!("? + {} = {}", b, total), answer)
        .with_steps(vec![undo_add_step(t, total, b, answer)])
}

/// `? - b = c` or `a - ? = c`
pub fn gen_unknown2(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    for _ in 0..UNKNOWN_MAX_ATTEMPTS {
        let answer = rand_int(rng, span.min, span.max);
        let other = rand_int(rng, span.min, span.max);
        if chance(rng, 0.5) {
            // ? - b = c
            let result = answer - other;
            if result < 0 {
                continue;
            }
            return Draft::new(Op::Unknown2, format!("? - {} = {}", other, result), answer)
                .with_steps(vec![undo_sub_step(t, result, other, answer)]);
        }
        // a - ? = c
        let a = answer + other;
        return Draft::new(Op::Unknown2, format!("{} - ? = {}", a, other), answer)
            .with_steps(vec![missing_subtrahend_step(t, a, other, answer)]);
    }
    fallback(Op::Unknown2, span.min, t)
}

/// Larger numbers across add, subtract and scaled-multiply equations
/// (40% / 30% / 30%)
pub fn gen_unknown3(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    let wide = Span::new(span.min, span.max * 2 + 10);
    let factors = factor_span(span);
    for _ in 0..UNKNOWN_MAX_ATTEMPTS {
        let roll = unit(rng);
        if roll < 0.4 {
            let answer = rand_int(rng, wide.min, wide.max);
            let b = rand_int(rng, wide.min, wide.max);
            let total = answer + b;
            return Draft::new(Op::Unknown3, format!("? + {} = {}", b, total), answer)
                .with_steps(vec![undo_add_step(t, total, b, answer)]);
        }
        if roll < 0.7 {
            let answer = rand_int(rng, wide.min, wide.max);
            let b = rand_int(rng, wide.min, wide.max);
            let result = answer - b;
            if result < 0 {
                continue;
            }
            return Draft::new(Op::Unknown3, format!("? - {} = {}", b, result), answer)
                .with_steps(vec![undo_sub_step(t, result, b, answer)]);
        }
        let answer = rand_int(rng, span.min, span.max);
        let k = rand_int(rng, factors.min, factors.max);
        let total = answer * k;
        return Draft::new(Op::Unknown3, format!("? × {} = {}", k, total), answer)
            .with_steps(vec![undo_mul_step(t, total, k, answer)]);
    }
    fallback(Op::Unknown3, span.min, t)
}

/// Two-step equations: `(? + a) × b = c` or `? × a + b = c`.
///
/// Both shapes stay within `2 × span.max × factor max`, so nothing is redrawn.
pub fn gen_unknown4(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    let factors = factor_span(span);
    let answer = rand_int(rng, span.min, span.max);
    if chance(rng, 0.5) {
        let a = rand_int(rng, span.min, span.max);
        let b = rand_int(rng, factors.min, factors.max);
        let inner = answer + a;
        let total = inner * b;
        return Draft::new(Op::Unknown4, format!("(? + {}) × {} = {}", a, b, total), answer)
            .with_steps(vec![
                undo_mul_step(t, total, b, inner),
                undo_add_step(t, inner, a, answer),
            ]);
    }
    let a = rand_int(rng, factors.min, factors.max);
    let b = rand_int(rng, span.min, span.max);
    let product = answer * a;
    let total = product + b;
    Draft::new(Op::Unknown4, format!("? × {} + {} = {}", a, b, total), answer)
        .with_steps(vec![
            undo_add_step(t, total, b, product),
            undo_mul_step(t, product, a, answer),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRng;
    use crate::questions::translate::FallbackTranslator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Substitute the answer for `?` and check both sides agree
    fn check_equation(draft: &Draft) {
        let (lhs, rhs) = draft.display.split_once(" = ").unwrap();
        let lhs = lhs.replace('?', &draft.answer.to_string());
        let rhs: i64 = rhs.parse().unwrap();
        assert_eq!(eval(&lhs), rhs, "{} with ? = {}", draft.display, draft.answer);
    }

    /// Evaluates the few shapes unknown questions produce
    fn eval(expr: &str) -> i64 {
        if let Some(rest) = expr.strip_prefix('(') {
            let (inner, outer) = rest.split_once(')').unwrap();
            let inner = eval(inner);
            let k: i64 = outer.trim().trim_start_matches('×').trim().parse().unwrap();
            return inner * k;
        }
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let mut acc: i64 = tokens[0].parse().unwrap();
        let mut i = 1;
        while i < tokens.len() {
            let rhs: i64 = tokens[i + 1].parse().unwrap();
            match tokens[i] {
                "+" => acc += rhs,
                "-" => acc -= rhs,
                "×" => acc *= rhs,
                other => panic!("unexpected operator {}", other),
            }
            i += 2;
        }
        acc
    }

    #[test]
    fn test_unknown_equations_hold() {
        let mut rng = StdRng::seed_from_u64(2024);
        let span = Span::new(1, 15);
        for _ in 0..200 {
            for draft in [
                gen_unknown1(span, &mut rng, &FallbackTranslator),
                gen_unknown2(span, &mut rng, &FallbackTranslator),
                gen_unknown3(span, &mut rng, &FallbackTranslator),
                gen_unknown4(span, &mut rng, &FallbackTranslator),
            ] {
                assert!(draft.answer >= 0);
                check_equation(&draft);
            }
        }
    }

    #[test]
    fn test_unknown1_steps() {
        // answer = 1, b = 10
        let mut rng = ScriptedRng::new(vec![0.0, 0.99]);
        let d = gen_unknown1(Span::new(1, 10), &mut rng, &FallbackTranslator);
        assert_eq!(d.display, "? + 10 = 11");
        assert_eq!(d.steps, vec!["Subtract 10 from both sides: 11 - 10 = 1"]);
    }

    #[test]
    fn test_unknown2_falls_back() {
        // answer = 1, other = 10, "? - b" branch: always negative
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.0]);
        let d = gen_unknown2(Span::new(1, 10), &mut rng, &FallbackTranslator);
        assert_eq!(d.display, "? + 1 = 2");
        assert_eq!(d.answer, 1);
    }

    #[test]
    fn test_unknown4_total_is_bounded() {
        let mut rng = StdRng::seed_from_u64(31);
        let span = Span::new(3, 20);
        let bound = 2 * span.max * factor_span(span).max;
        for _ in 0..300 {
            let d = gen_unknown4(span, &mut rng, &FallbackTranslator);
            let total: i64 = d.display.rsplit_once(" = ").unwrap().1.parse().unwrap();
            assert!(total <= bound, "{} exceeds {}", d.display, bound);
            check_equation(&d);
        }
    }
}
