//! Seeded pseudo-random number generation for reproducible datasets
//!
//! The generator is a 32-bit linear congruential generator with the
//! Numerical Recipes constants (multiplier 1664525, increment 1013904223,
//! modulus 2^32). The constants are part of the data contract: tests pin
//! literal generated values, so the stream must stay bit-for-bit stable.

/// A deterministic pseudo-random stream seeded with a fixed 32-bit constant.
///
/// Each draw advances the internal state once. Callers that need
/// reproducible output must consume draws in a fixed order.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a new stream from a 32-bit seed.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    ///
    /// The state is divided by `u32::MAX` (not 2^32), matching the
    /// original stream exactly; the theoretical 1.0 when the state lands
    /// on `u32::MAX` is handled by the clamping in [`Self::pick`] and
    /// [`Self::below`].
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / f64::from(u32::MAX)
    }

    /// Draw a uniform index below `bound`.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "below() requires a non-empty range");
        let index = (self.next_f64() * bound as f64) as usize;
        index.min(bound - 1)
    }

    /// Pick a uniformly random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.below(pool.len())]
    }
}
