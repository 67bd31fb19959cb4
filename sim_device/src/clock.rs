//! Simulated monotonic time and the pseudo random source.
//!
//! Time only moves when a script waits; two identical scripts observe the
//! same timestamps and the same random sequence, which keeps every test
//! deterministic.

/// Millisecond clock plus a seeded xorshift generator.
#[derive(Debug)]
pub struct DeviceClock {
    now_ms: u32,
    rng_state: u64,
}

const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

impl Default for DeviceClock {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl DeviceClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock whose random sequence starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            now_ms: 0,
            // A zero state would lock xorshift at zero forever.
            rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Milliseconds since start, wrapping like a 32-bit hardware counter.
    pub fn millis(&self) -> u32 {
        self.now_ms
    }

    /// Advances time by `ms` milliseconds.
    pub fn advance(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    /// Next pseudo random value, non-negative.
    pub fn rand(&mut self) -> i32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        ((x >> 33) as i32) & i32::MAX
    }
}
