//! # GARLAND Procedural Generation
//!
//! Deterministic generation of the complete scene layout.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed + same config = same scene, always
//! 2. **One-shot**: Generation runs once at startup; the layout is immutable
//! 3. **Independent streams**: each category owns a derived RNG stream, so
//!    tuning one population never reshuffles another
//!
//! ## Core Components
//!
//! - `SceneSeed`: root seed with purpose-tagged derivation
//! - `chaos`: the shared dispersed-state sphere sampling
//! - `foliage` / `ornaments` / `frames`: per-category target placement
//!
//! ## Example
//!
//! ```rust
//! use garland_core::SceneConfig;
//! use garland_procedural::{generate_layout, SceneSeed};
//!
//! let config = SceneConfig::default();
//! let layout = generate_layout(&config, SceneSeed::new(42));
//! assert_eq!(layout.foliage().len(), config.population.foliage);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod chaos;
pub mod foliage;
pub mod frames;
pub mod ornaments;
pub mod seed;

pub use seed::SceneSeed;

use garland_core::{SceneConfig, SceneLayout};

/// Generates the whole scene from a validated config and a root seed.
///
/// The config must already have passed `SceneConfig::validate`; generation
/// trusts every tunable.
#[must_use]
pub fn generate_layout(config: &SceneConfig, seed: SceneSeed) -> SceneLayout {
    let mut foliage_rng = seed.derive(b"foliage").rng();
    let mut ornament_rng = seed.derive(b"ornaments").rng();
    let mut frame_rng = seed.derive(b"frames").rng();

    SceneLayout::new(
        foliage::generate(config, &mut foliage_rng),
        ornaments::generate(config, &mut ornament_rng),
        frames::generate(config, &mut frame_rng),
    )
}
