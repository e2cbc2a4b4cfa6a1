//! # Configuration Error Types
//!
//! Everything that can go wrong while loading and validating a scene
//! configuration. The animation core itself has no failure modes; bad
//! tunables are rejected here, before a single frame runs.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::SceneConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A lag weight of zero (or below) would make the easing exponent
    /// undefined at frame time.
    #[error("lag weight for {category} must be positive, got {value}")]
    NonPositiveLagWeight {
        /// The ornament category carrying the bad weight.
        category: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A structural dimension (height, radius, ...) must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// The offending parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Spiral arms are used as a modulus during foliage generation.
    #[error("spiral_arms must be at least 1")]
    NoSpiralArms,

    /// Driver tuning that could stall or overshoot the transition.
    #[error("driver {name} must be positive, got {value}")]
    InvalidDriverTuning {
        /// The offending tuning field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The exponential-smoothing step must stay below 1.0 per frame, or the
    /// transition overshoots and oscillates instead of settling.
    #[error("driver rate * gain * max_delta is {product}, must stay below 1.0")]
    UnstableDriver {
        /// The product of the three tunables.
        product: f32,
    },

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed as TOML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
