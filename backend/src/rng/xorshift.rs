//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG used for all exogenous period draws.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact simulation run)
//! - Testing (verify branch behavior on known draws)
//! - Research (validate results across machines)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use firm_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let int_value = rng.range(0, 20); // [0, 20)
/// let real_value = rng.uniform(5.0); // [0.0, 5.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is remapped to 1: xorshift state must never be zero.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing the internal state.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random integer in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use firm_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let machines = rng.range(0, 400);
    /// assert!((0..400).contains(&machines));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate a random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random f64 in range [0.0, scale)
    ///
    /// Used for the uniform monetary draws (liquid assets, debt, credit
    /// limit), which the model specifies as `uniform · scale`.
    pub fn uniform(&mut self, scale: f64) -> f64 {
        self.next_f64() * scale
    }

    /// Get current RNG state (for replaying a run from a known point).
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
