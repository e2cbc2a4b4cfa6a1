//! Startup helpers shared by the binaries.
//!
//! Both binaries read the same environment: `GARLAND_CONFIG` optionally
//! names a TOML scene configuration, `GARLAND_SEED` optionally fixes the
//! generation seed, and `RUST_LOG` filters the log output.

use std::path::PathBuf;

use garland_core::{ConfigResult, SceneConfig};
use garland_procedural::SceneSeed;

/// Installs the log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Loads the scene configuration.
///
/// `GARLAND_CONFIG` names a TOML file to load and validate; unset means
/// the reference defaults.
///
/// # Errors
/// Propagates read, parse and validation errors from the named file so the
/// binary can exit with the message.
pub fn load_scene_config() -> ConfigResult<SceneConfig> {
    match std::env::var_os("GARLAND_CONFIG") {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let config = SceneConfig::load(&path)?;
            tracing::info!(path = %path.display(), "configuration loaded");
            Ok(config)
        }
        None => Ok(SceneConfig::default()),
    }
}

/// Reads the generation seed from `GARLAND_SEED` (a decimal u64).
///
/// Unset means the fixed default seed; an unparsable value logs a warning
/// and falls back rather than killing the scene.
#[must_use]
pub fn load_scene_seed() -> SceneSeed {
    match std::env::var("GARLAND_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(value) => SceneSeed::new(value),
            Err(_) => {
                tracing::warn!(value = %raw, "GARLAND_SEED is not a u64, using the default seed");
                SceneSeed::default()
            }
        },
        Err(_) => SceneSeed::default(),
    }
}
