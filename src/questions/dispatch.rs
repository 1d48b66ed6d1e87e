//! Question dispatcher
//!
//! Entry point for the battle loop: scales a move's range by the current
//! difficulty modifier, settles which operation to ask, and routes to the
//! matching generator.

use rand::Rng;

use crate::dice::pick;
use super::basic::{gen_add, gen_div, gen_mul, gen_sub};
use super::choices::make_choices;
use super::fraction::{gen_frac_cmp, gen_frac_diff, gen_frac_muldiv, gen_frac_same};
use super::mixed::{gen_mixed2, gen_mixed3, gen_mixed4};
use super::op::Op;
use super::question::{MoveConfig, Question, Span};
use super::translate::{FallbackTranslator, Translator};
use super::unknown::{gen_unknown1, gen_unknown2, gen_unknown3, gen_unknown4};

/// Per-call knobs for `gen_q`
#[derive(Clone, Copy)]
pub struct GenOptions<'a> {
    /// Used for the worked `steps`
    pub translator: &'a dyn Translator,
    /// Restricts which of the move's ops may be asked; empty means no limit
    pub allowed_ops: &'a [String],
}

impl Default for GenOptions<'_> {
    fn default() -> Self {
        Self {
            translator: &FallbackTranslator,
            allowed_ops: &[],
        }
    }
}

impl<'a> GenOptions<'a> {
    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_allowed_ops(mut self, allowed_ops: &'a [String]) -> Self {
        self.allowed_ops = allowed_ops;
        self
    }
}

/// Scale a move's range by `diff_mod`.
///
/// The result always satisfies `1 <= min <= max` and `max >= 2`. A
/// modifier that is not a positive finite number counts as 1.
pub fn scale_range(range: (i64, i64), diff_mod: f64) -> Span {
    let diff_mod = if diff_mod.is_finite() && diff_mod > 0.0 { diff_mod } else { 1.0 };
    let min = 1.max((range.0 as f64 * diff_mod).round() as i64);
    let max = min.max(2.max((range.1 as f64 * diff_mod).round() as i64));
    Span { min, max }
}

fn parse_ops(codes: &[String]) -> Vec<Op> {
    let mut ops = Vec::new();
    for code in codes {
        match Op::family_of(code) {
            Some(op) => {
                if Op::from_code(code).is_none() {
                    log::debug!("Operation code {:?} asked as {}", code, op);
                }
                if !ops.contains(&op) {
                    ops.push(op);
                }
            }
            None => log::debug!("Ignoring blank operation code"),
        }
    }
    ops
}

/// Settle the set of operations a question may use.
///
/// Intersects the move's ops with the allow-list when one is given. An empty
/// intersection falls back to the allow-list, then to the move's own ops,
/// and finally to `+`. Codes the engine does not generate are asked as
/// their family's representative (see `Op::family_of`).
pub fn resolve_ops(move_ops: &[String], allowed_ops: &[String]) -> Vec<Op> {
    let own = parse_ops(move_ops);
    let allowed = parse_ops(allowed_ops);

    if !allowed.is_empty() {
        let both: Vec<Op> = own.iter().copied().filter(|op| allowed.contains(op)).collect();
        if !both.is_empty() {
            return both;
        }
        return allowed;
    }
    if !own.is_empty() {
        return own;
    }

    log::debug!("No usable operation codes in {:?}, defaulting to +", move_ops);
    vec![Op::Add]
}

/// Generate one question for a move
pub fn gen_q(mv: &MoveConfig, diff_mod: f64, options: &GenOptions<'_>, rng: &mut impl Rng) -> Question {
    let span = scale_range(mv.range, diff_mod);
    let ops = resolve_ops(&mv.ops, options.allowed_ops);
    let op = pick(rng, &ops).copied().unwrap_or(Op::Add);
    gen_op(op, span, options.translator, rng)
}

/// Generate one question for a specific operation over an already-scaled span
pub fn gen_op(op: Op, span: Span, t: &dyn Translator, rng: &mut impl Rng) -> Question {
    match op {
        Op::Add => make_choices(gen_add(span, rng), rng),
        Op::Sub => make_choices(gen_sub(span, rng), rng),
        Op::Mul => make_choices(gen_mul(span, rng), rng),
        Op::Div => make_choices(gen_div(span, rng), rng),
        Op::Mixed2 => make_choices(gen_mixed2(span, rng, t), rng),
        Op::Mixed3 => make_choices(gen_mixed3(span, rng, t), rng),
        Op::Mixed4 => make_choices(gen_mixed4(span, rng, t), rng),
        Op::Unknown1 => make_choices(gen_unknown1(span, rng, t), rng),
        Op::Unknown2 => make_choices(gen_unknown2(span, rng, t), rng),
        Op::Unknown3 => make_choices(gen_unknown3(span, rng, t), rng),
        Op::Unknown4 => make_choices(gen_unknown4(span, rng, t), rng),
        Op::FracCmp => gen_frac_cmp(span, rng, t),
        Op::FracSame => gen_frac_same(span, rng, t),
        Op::FracDiff => gen_frac_diff(span, rng, t),
        Op::FracMulDiv => gen_frac_muldiv(span, rng, t),
    }
}
