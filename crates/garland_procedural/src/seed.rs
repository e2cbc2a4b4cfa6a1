//! # Scene Seeding
//!
//! One root seed, many independent streams.
//!
//! Each entity category (foliage, ornaments, frames) generates from its own
//! derived sub-seed, so changing the foliage count never perturbs where the
//! ornaments land. Derivation is a small FNV-1a-style mix over a purpose
//! tag; the streams themselves are ChaCha8, which is deterministic across
//! platforms.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Root seed for deterministic scene generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneSeed(u64);

impl SceneSeed {
    /// Creates a new scene seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., `b"foliage"`).
    ///
    /// FNV-1a hash mixing over the purpose bytes, finished with an avalanche
    /// shift so nearby root seeds still give unrelated streams.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: &[u8]) -> Self {
        let mut hash = self.0;
        let mut i = 0;
        while i < purpose.len() {
            hash ^= purpose[i] as u64;
            hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
            i += 1;
        }
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Opens the deterministic RNG stream for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for SceneSeed {
    fn default() -> Self {
        Self(0xCAFE_F00D_5EED_1DEA)
    }
}
