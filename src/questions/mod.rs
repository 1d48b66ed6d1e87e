//! Question generation
//!
//! One generator per operation family, a choice builder that turns drafts
//! into finished multiple-choice questions, and the `gen_q` dispatcher.

pub mod rational;
pub mod op;
pub mod translate;
pub mod question;
pub mod basic;
pub mod mixed;
pub mod unknown;
pub mod fraction;
pub mod choices;
pub mod dispatch;

pub use op::Op;
pub use question::{Draft, MoveConfig, Question, Span};
pub use rational::{fraction_text, gcd, lcm, normalize_fraction_label, simplify_fraction, Fraction};
pub use translate::{FallbackTranslator, Translator};
pub use choices::{build_fraction_choice_labels, build_multiplication_distractors, make_choices, make_labeled_choices};
pub use dispatch::{gen_op, gen_q, resolve_ops, scale_range, GenOptions};
