//! Operation codes
//!
//! Moves name their operations with short string codes. Inside the engine
//! every code is resolved to an `Op` so dispatch is an exhaustive match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every operation family the generators know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "×")]
    Mul,
    #[serde(rename = "÷")]
    Div,
    #[serde(rename = "mixed2")]
    Mixed2,
    #[serde(rename = "mixed3")]
    Mixed3,
    #[serde(rename = "mixed4")]
    Mixed4,
    #[serde(rename = "unknown1")]
    Unknown1,
    #[serde(rename = "unknown2")]
    Unknown2,
    #[serde(rename = "unknown3")]
    Unknown3,
    #[serde(rename = "unknown4")]
    Unknown4,
    #[serde(rename = "frac_cmp")]
    FracCmp,
    #[serde(rename = "frac_same")]
    FracSame,
    #[serde(rename = "frac_diff")]
    FracDiff,
    #[serde(rename = "frac_muldiv")]
    FracMulDiv,
}

impl Op {
    pub const ALL: [Op; 15] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Mixed2,
        Op::Mixed3,
        Op::Mixed4,
        Op::Unknown1,
        Op::Unknown2,
        Op::Unknown3,
        Op::Unknown4,
        Op::FracCmp,
        Op::FracSame,
        Op::FracDiff,
        Op::FracMulDiv,
    ];

    /// Canonical code as written in move configs
    pub fn code(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "×",
            Op::Div => "÷",
            Op::Mixed2 => "mixed2",
            Op::Mixed3 => "mixed3",
            Op::Mixed4 => "mixed4",
            Op::Unknown1 => "unknown1",
            Op::Unknown2 => "unknown2",
            Op::Unknown3 => "unknown3",
            Op::Unknown4 => "unknown4",
            Op::FracCmp => "frac_cmp",
            Op::FracSame => "frac_same",
            Op::FracDiff => "frac_diff",
            Op::FracMulDiv => "frac_muldiv",
        }
    }

    /// Resolve a code, accepting the ASCII spellings of the four basic operators
    pub fn from_code(code: &str) -> Option<Op> {
        let op = match code.trim() {
            "+" => Op::Add,
            "-" | "−" => Op::Sub,
            "×" | "*" | "x" => Op::Mul,
            "÷" | "/" => Op::Div,
            other => return Op::ALL.iter().copied().find(|op| op.code() == other),
        };
        Some(op)
    }

    /// Resolve a code, or the representative of its family when the code
    /// itself is not one the engine generates.
    ///
    /// `mixedN` goes to `mixed2`, `unknownN` to `unknown1`, and `frac_*` or
    /// `dec_*` to `frac_same`. Any other non-blank code counts as mixed.
    /// Blank codes have no family.
    pub fn family_of(code: &str) -> Option<Op> {
        if let Some(op) = Op::from_code(code) {
            return Some(op);
        }
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let op = if numbered(code, "unknown") {
            Op::Unknown1
        } else if code.starts_with("frac_") || code.starts_with("dec_") {
            Op::FracSame
        } else {
            Op::Mixed2
        };
        Some(op)
    }

    /// Fraction questions answer with labels rather than numbers
    pub fn is_fraction(&self) -> bool {
        matches!(self, Op::FracCmp | Op::FracSame | Op::FracDiff | Op::FracMulDiv)
    }

    /// How many choices a finished question of this op carries
    pub fn choice_count(&self) -> usize {
        match self {
            Op::FracCmp => 3,
            _ => 4,
        }
    }
}

/// `prefix` followed by one or more digits
fn numbered(code: &str, prefix: &str) -> bool {
    code.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
