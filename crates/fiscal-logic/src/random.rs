//! Seeded pseudo-random number generator
//!
//! Every session owns one of these, so scenario draws and opponent
//! choices are reproducible from a seed and never shared across sessions.
//! Uses xorshift64*.

use crate::error::GameError;

/// Replaces an all-zero state, which xorshift would never leave.
const NONZERO_STATE: u64 = 0x9e3779b97f4a7c15;

/// Seeded random number generator
///
/// Deterministic: same seed + session index = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and a session index
    pub fn new(seed: &[u8; 32], session_index: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (session_index as u64).wrapping_mul(0x517cc1b727220a95);
        if state == 0 {
            state = NONZERO_STATE;
        }

        // Warm up
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Seed from the operating system's entropy source, mixing in the
    /// session index like `new`
    pub fn from_entropy(session_index: u32) -> Result<Self, GameError> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).map_err(|e| GameError::Entropy(e.to_string()))?;
        Ok(Self::new(&seed, session_index))
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value 0-99 (for percentage checks)
    pub fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }

    /// True with the given percentage chance (0 never, 100 always)
    pub fn chance(&mut self, percent: u8) -> bool {
        self.next_percent() < percent
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}
