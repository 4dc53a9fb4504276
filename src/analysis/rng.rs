//! Filename-seeded linear congruential generator.

/// Multiplier of the generator.
const MULTIPLIER: u64 = 9301;
/// Increment of the generator.
const INCREMENT: u64 = 49297;
/// Modulus of the generator, and the divisor mapping state into `[0, 1)`.
const MODULUS: u64 = 233280;

/// Sum of the Unicode code points of `name`.
///
/// This is the seed contract: `"a.png"` seeds to 468, the empty string to 0.
pub fn seed_from_name(name: &str) -> u64 {
    name.chars().map(|c| c as u64).sum()
}

/// Deterministic pseudo-random source for the verdict engine.
///
/// The generator is deliberately tiny; statistical quality is irrelevant
/// here. Stability is the contract: the same seed must yield the same draw
/// sequence forever, because clients re-upload the same screenshot and
/// expect the same verdict back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a raw seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from a filename via [`seed_from_name`].
    pub fn from_name(name: &str) -> Self {
        Self::new(seed_from_name(name))
    }

    /// Advance the state, then map it into `[0, 1)`.
    ///
    /// The state advances before the mapping, so the raw seed itself is
    /// never observable as a draw. The multiply cannot overflow: seeds are
    /// bounded by request size times the largest code point, orders of
    /// magnitude below `u64::MAX / MULTIPLIER`, and every later state is
    /// below [`MODULUS`].
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}
