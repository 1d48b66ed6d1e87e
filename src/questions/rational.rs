//! Exact rational arithmetic
//!
//! Small integer fractions, always kept in lowest terms with a positive
//! denominator. Every fraction question is built on these helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Greatest common divisor. Returns 1 when both inputs are zero so callers
/// can always divide by the result.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a == 0 { 1 } else { a }
}

/// Least common multiple
pub fn lcm(a: i64, b: i64) -> i64 {
    (a * b).abs() / gcd(a, b)
}

/// A fraction in lowest terms with `d > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub n: i64,
    pub d: i64,
}

impl Fraction {
    /// Build a simplified fraction
    pub fn new(n: i64, d: i64) -> Self {
        simplify_fraction(n, d)
    }

    pub fn is_whole(&self) -> bool {
        self.d == 1
    }

    /// Numerator and denominator swapped, simplified
    pub fn reciprocal(&self) -> Self {
        simplify_fraction(self.d, self.n)
    }

    pub fn add(&self, other: &Fraction) -> Self {
        let d = lcm(self.d, other.d);
        simplify_fraction(self.n * (d / self.d) + other.n * (d / other.d), d)
    }

    pub fn sub(&self, other: &Fraction) -> Self {
        let d = lcm(self.d, other.d);
        simplify_fraction(self.n * (d / self.d) - other.n * (d / other.d), d)
    }

    pub fn mul(&self, other: &Fraction) -> Self {
        simplify_fraction(self.n * other.n, self.d * other.d)
    }

    /// Division by a zero fraction yields zero
    pub fn div(&self, other: &Fraction) -> Self {
        simplify_fraction(self.n * other.d, self.d * other.n)
    }

    /// Compare by cross multiplication
    pub fn cmp_value(&self, other: &Fraction) -> std::cmp::Ordering {
        (self.n * other.d).cmp(&(other.n * self.d))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fraction_text(self))
    }
}

/// Reduce `n/d` to lowest terms.
///
/// Zero numerators collapse to `0/1` and the sign always ends up on the
/// numerator. A zero denominator has no meaningful value and degrades to
/// `0/1` as well.
pub fn simplify_fraction(n: i64, d: i64) -> Fraction {
    if n == 0 || d == 0 {
        return Fraction { n: 0, d: 1 };
    }
    let g = gcd(n, d);
    let sign = if d < 0 { -1 } else { 1 };
    Fraction { n: sign * n / g, d: sign * d / g }
}

/// Render `"n"` for whole numbers, `"n/d"` otherwise
pub fn fraction_text(frac: &Fraction) -> String {
    if frac.is_whole() {
        frac.n.to_string()
    } else {
        format!("{}/{}", frac.n, frac.d)
    }
}

/// Parse a label like `"6/8"`, `" 3 / 4 "` or `"2"`
pub fn parse_fraction_label(label: &str) -> Option<Fraction> {
    let label = label.trim();
    match label.split_once('/') {
        Some((n, d)) => {
            let n: i64 = n.trim().parse().ok()?;
            let d: i64 = d.trim().parse().ok()?;
            if d == 0 {
                return None;
            }
            Some(simplify_fraction(n, d))
        }
        None => label.parse::<i64>().ok().map(|n| Fraction { n, d: 1 }),
    }
}

/// Canonical form of a fraction label. Labels that are not fractions come
/// back trimmed but otherwise untouched.
pub fn normalize_fraction_label(label: &str) -> String {
    match parse_fraction_label(label) {
        Some(frac) => fraction_text(&frac),
        None => label.trim().to_string(),
    }
}
