//! Dice helpers
//!
//! Every random decision in the engine goes through a single unit-interval
//! draw (`rng.gen::<f64>()`), so any `rand::Rng` works and a scripted
//! source can replay an exact sequence of decisions.

use rand::{Rng, RngCore};

/// Draw a float in [0, 1)
pub fn unit(rng: &mut impl Rng) -> f64 {
    rng.gen::<f64>()
}

/// Random integer in [lo, hi], inclusive. Bounds may arrive in either order.
pub fn rand_int(rng: &mut impl Rng, lo: i64, hi: i64) -> i64 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let span = hi - lo;
    let offset = (unit(rng) * (span + 1) as f64).floor() as i64;
    lo + offset.clamp(0, span)
}

/// Pick one element uniformly. Always consumes a draw, even for one element.
pub fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rand_int(rng, 0, items.len() as i64 - 1) as usize;
    items.get(idx)
}

/// Fisher-Yates shuffle in place
pub fn shuffle<T>(rng: &mut impl Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rand_int(rng, 0, i as i64) as usize;
        items.swap(i, j);
    }
}

/// True with probability `p`
pub fn chance(rng: &mut impl Rng, p: f64) -> bool {
    unit(rng) < p
}

/// Replays a fixed list of unit-interval values, cycling when exhausted.
///
/// Each value is what the next `unit` draw returns, so tests can say
/// "first operand 7, second operand 8" by choosing where the float lands
/// in the range. An empty script always yields 0.0.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    /// Number of draws consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    // `Standard` builds an f64 from the top 53 bits of `next_u64`
    fn next_u64(&mut self) -> u64 {
        let mantissa = (self.next_unit() * (1u64 << 53) as f64) as u64;
        mantissa << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
