//! Multi-step questions mixing `×` with `±`
//!
//! Answers and worked steps both follow order of operations: every product
//! is evaluated first, then the sums and differences left to right. A draw
//! that goes negative at any point is rejected and redrawn, up to
//! `MIXED_MAX_ATTEMPTS`; after that an all-addition shape is used.

use rand::Rng;

use crate::dice::{chance, rand_int, unit};
use super::op::Op;
use super::question::{Draft, Span};
use super::translate::Translator;

/// Redraws before falling back to the all-addition shape
pub const MIXED_MAX_ATTEMPTS: u32 = 15;

/// `+` or `-` between two terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn random(rng: &mut impl Rng) -> Self {
        if chance(rng, 0.5) { Sign::Plus } else { Sign::Minus }
    }

    pub fn apply(&self, left: i64, right: i64) -> i64 {
        match self {
            Sign::Plus => left + right,
            Sign::Minus => left - right,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

/// Operand range for the `×` terms
pub fn factor_span(span: Span) -> Span {
    Span::new(2, span.max.clamp(2, 12))
}

fn multiply_step(t: &dyn Translator, a: i64, b: i64, product: i64) -> String {
    t.translate(
        "question.steps.multiplyFirst",
        "Multiply first: {a} × {b} = {result}",
        &[("a", &a), ("b", &b), ("result", &product)],
    )
}

fn combine_step(t: &dyn Translator, left: i64, sign: Sign, right: i64, result: i64) -> String {
    t.translate(
        "question.steps.combine",
        "Then: {left} {sign} {right} = {result}",
        &[("left", &left), ("sign", &sign.symbol()), ("right", &right), ("result", &result)],
    )
}

fn left_to_right_step(t: &dyn Translator, left: i64, sign: Sign, right: i64, result: i64) -> String {
    t.translate(
        "question.steps.leftToRight",
        "Left to right: {left} {sign} {right} = {result}",
        &[("left", &left), ("sign", &sign.symbol()), ("right", &right), ("result", &result)],
    )
}

/// `a ± b ± c`
pub fn gen_mixed2(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    for _ in 0..MIXED_MAX_ATTEMPTS {
        let (a, b, c) = (
            rand_int(rng, span.min, span.max),
            rand_int(rng, span.min, span.max),
            rand_int(rng, span.min, span.max),
        );
        let (s1, s2) = (Sign::random(rng), Sign::random(rng));
        let r1 = s1.apply(a, b);
        if r1 < 0 {
            continue;
        }
        let r2 = s2.apply(r1, c);
        if r2 < 0 {
            continue;
        }
        return mixed2_draft(t, a, b, c, s1, s2);
    }

    log::debug!("mixed2 hit retry ceiling, using all-addition shape");
    let (a, b, c) = (span.min, span.min, span.max);
    mixed2_draft(t, a, b, c, Sign::Plus, Sign::Plus)
}

fn mixed2_draft(t: &dyn Translator, a: i64, b: i64, c: i64, s1: Sign, s2: Sign) -> Draft {
    let r1 = s1.apply(a, b);
    let r2 = s2.apply(r1, c);
    let display = format!("{} {} {} {} {} = ?", a, s1.symbol(), b, s2.symbol(), c);
    Draft::new(Op::Mixed2, display, r2).with_steps(vec![
        left_to_right_step(t, a, s1, b, r1),
        left_to_right_step(t, r1, s2, c, r2),
    ])
}

/// `a × b ± c`
pub fn gen_mixed3(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    let factors = factor_span(span);
    for _ in 0..MIXED_MAX_ATTEMPTS {
        let a = rand_int(rng, factors.min, factors.max);
        let b = rand_int(rng, factors.min, factors.max);
        let c = rand_int(rng, span.min, span.max);
        let sign = Sign::random(rng);
        if sign.apply(a * b, c) < 0 {
            continue;
        }
        return mixed3_draft(t, a, b, c, sign);
    }

    log::debug!("mixed3 hit retry ceiling, using all-addition shape");
    mixed3_draft(t, factors.min, factors.min, span.min, Sign::Plus)
}

fn mixed3_draft(t: &dyn Translator, a: i64, b: i64, c: i64, sign: Sign) -> Draft {
    let product = a * b;
    let answer = sign.apply(product, c);
    let display = format!("{} × {} {} {} = ?", a, b, sign.symbol(), c);
    Draft::new(Op::Mixed3, display, answer).with_steps(vec![
        multiply_step(t, a, b, product),
        combine_step(t, product, sign, c, answer),
    ])
}

/// The three `mixed4` expression shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mixed4Shape {
    /// `a ± b × c`
    TermPlusProduct,
    /// `a × b ± c × d`
    TwoProducts,
    /// `a ± b × c ± d`
    ProductInMiddle,
}

impl Mixed4Shape {
    /// 40% / 30% / 30%
    pub fn roll(rng: &mut impl Rng) -> Self {
        let roll = unit(rng);
        if roll < 0.4 {
            Mixed4Shape::TermPlusProduct
        } else if roll < 0.7 {
            Mixed4Shape::TwoProducts
        } else {
            Mixed4Shape::ProductInMiddle
        }
    }
}

/// One of three shapes combining products with sums and differences
pub fn gen_mixed4(span: Span, rng: &mut impl Rng, t: &dyn Translator) -> Draft {
    let factors = factor_span(span);
    for _ in 0..MIXED_MAX_ATTEMPTS {
        let shape = Mixed4Shape::roll(rng);

        let draft = match shape {
            Mixed4Shape::TermPlusProduct => {
                let a = rand_int(rng, span.min, span.max);
                let b = rand_int(rng, factors.min, factors.max);
                let c = rand_int(rng, factors.min, factors.max);
                let sign = Sign::random(rng);
                let product = b * c;
                let answer = sign.apply(a, product);
                if answer < 0 {
                    continue;
                }
                let display = format!("{} {} {} × {} = ?", a, sign.symbol(), b, c);
                Draft::new(Op::Mixed4, display, answer).with_steps(vec![
                    multiply_step(t, b, c, product),
                    combine_step(t, a, sign, product, answer),
                ])
            }
            Mixed4Shape::TwoProducts => {
                let a = rand_int(rng, factors.min, factors.max);
                let b = rand_int(rng, factors.min, factors.max);
                let c = rand_int(rng, factors.min, factors.max);
                let d = rand_int(rng, factors.min, factors.max);
                let sign = Sign::random(rng);
                let (p1, p2) = (a * b, c * d);
                let answer = sign.apply(p1, p2);
                if answer < 0 {
                    continue;
                }
                let display = format!("{} × {} {} {} × {} = ?", a, b, sign.symbol(), c, d);
                Draft::new(Op::Mixed4, display, answer).with_steps(vec![
                    multiply_step(t, a, b, p1),
                    multiply_step(t, c, d, p2),
                    combine_step(t, p1, sign, p2, answer),
                ])
            }
            Mixed4Shape::ProductInMiddle => {
                let a = rand_int(rng, span.min, span.max);
                let b = rand_int(rng, factors.min, factors.max);
                let c = rand_int(rng, factors.min, factors.max);
                let d = rand_int(rng, span.min, span.max);
                let (s1, s2) = (Sign::random(rng), Sign::random(rng));
                let product = b * c;
                let r1 = s1.apply(a, product);
                if r1 < 0 {
                    continue;
                }
                let answer = s2.apply(r1, d);
                if answer < 0 {
                    continue;
                }
                let display = format!("{} {} {} × {} {} {} = ?", a, s1.symbol(), b, c, s2.symbol(), d);
                Draft::new(Op::Mixed4, display, answer).with_steps(vec![
                    multiply_step(t, b, c, product),
                    combine_step(t, a, s1, product, r1),
                    combine_step(t, r1, s2, d, answer),
                ])
            }
        };
        return draft;
    }

    log::debug!("mixed4 hit retry ceiling, using all-addition shape");
    let (a, b, c) = (span.min, factors.min, factors.min);
    let product = b * c;
    let answer = a + product;
    Draft::new(Op::Mixed4, format!("{} + {} × {} = ?", a, b, c), answer).with_steps(vec![
        multiply_step(t, b, c, product),
        combine_step(t, a, Sign::Plus, product, answer),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRng;
    use crate::questions::translate::FallbackTranslator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mixed_answers_never_negative() {
        let mut rng = StdRng::seed_from_u64(17);
        let span = Span::new(1, 20);
        for _ in 0..300 {
            assert!(gen_mixed2(span, &mut rng, &FallbackTranslator).answer >= 0);
            assert!(gen_mixed3(span, &mut rng, &FallbackTranslator).answer >= 0);
            assert!(gen_mixed4(span, &mut rng, &FallbackTranslator).answer >= 0);
        }
    }

    #[test]
    fn test_mixed3_multiplies_first() {
        // factors 2..=10: a = 2 + floor(0.5 * 9) = 6, b = 6; c in 1..=10 -> 1; sign Plus (0.0 < 0.5)
        let mut rng = ScriptedRng::new(vec![0.5, 0.5, 0.0, 0.0]);
        let d = gen_mixed3(Span::new(1, 10), &mut rng, &FallbackTranslator);
        assert_eq!(d.display, "6 × 6 + 1 = ?");
        assert_eq!(d.answer, 37);
        assert_eq!(d.steps[0], "Multiply first: 6 × 6 = 36");
        assert_eq!(d.steps[1], "Then: 36 + 1 = 37");
    }

    #[test]
    fn test_mixed2_falls_back_after_ceiling() {
        // a = 1, b = 1, c = 1, both signs Minus: 1 - 1 - 1 < 0 on every attempt
        let mut rng = ScriptedRng::new(vec![0.0, 0.0, 0.0, 0.9, 0.9]);
        let d = gen_mixed2(Span::new(1, 10), &mut rng, &FallbackTranslator);
        assert_eq!(d.display, "1 + 1 + 10 = ?");
        assert_eq!(d.answer, 12);
    }

    #[test]
    fn test_mixed4_shape_weights() {
        assert_eq!(Mixed4Shape::roll(&mut ScriptedRng::new(vec![0.39])), Mixed4Shape::TermPlusProduct);
        assert_eq!(Mixed4Shape::roll(&mut ScriptedRng::new(vec![0.4])), Mixed4Shape::TwoProducts);
        assert_eq!(Mixed4Shape::roll(&mut ScriptedRng::new(vec![0.7])), Mixed4Shape::ProductInMiddle);
    }

    #[test]
    fn test_mixed4_steps_follow_precedence() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let d = gen_mixed4(Span::new(1, 12), &mut rng, &FallbackTranslator);
            assert!(d.steps[0].starts_with("Multiply first"));
            assert!(d.steps.last().unwrap().ends_with(&format!("= {}", d.answer)));
        }
    }
}
