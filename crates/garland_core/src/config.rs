//! # Scene Configuration
//!
//! Every tunable of the scene in one struct, loadable from TOML and
//! validated once at startup. The frame loop never re-checks any of them.
//!
//! Defaults reproduce the reference scene: an 8-unit tree of 30000 foliage
//! points and 180 ornaments, collapsing out of a 4-unit chaos cloud.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{self, Rgb};
use crate::error::{ConfigError, ConfigResult};

/// Structural shape of the formed tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeShape {
    /// Total height of the cone in world units.
    pub height: f32,
    /// Base radius of the cone in world units.
    pub radius: f32,
    /// Number of helical foliage arms, assigned round-robin by entity index.
    pub spiral_arms: u32,
    /// Full turns each arm makes from base to apex.
    pub windings: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            height: 8.0,
            radius: 3.0,
            spiral_arms: 4,
            windings: 5.0,
        }
    }
}

/// The dispersed-state cloud every entity scatters into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaosCloud {
    /// Radius of the solid sphere samples are drawn from.
    pub radius: f32,
    /// Vertical offset applied to the whole cloud.
    pub lift: f32,
    /// Extra vertical offset for photo frames, which float slightly higher.
    pub frame_lift: f32,
    /// Radial bias exponent for foliage; higher values cluster samples
    /// toward the center.
    pub foliage_bias: f32,
    /// Radial bias exponent for ornaments.
    pub ornament_bias: f32,
}

impl Default for ChaosCloud {
    fn default() -> Self {
        Self {
            radius: 4.0,
            lift: 3.5,
            frame_lift: 4.0,
            foliage_bias: 2.5,
            ornament_bias: 2.0,
        }
    }
}

/// Entity counts per category, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Population {
    /// Foliage points in the particle field.
    pub foliage: usize,
    /// Instanced ornaments (baubles, gifts, lamps together).
    pub ornaments: usize,
    /// Photo frames floating just outside the cone.
    pub frames: usize,
}

impl Default for Population {
    fn default() -> Self {
        Self {
            foliage: 30000,
            ornaments: 180,
            frames: 6,
        }
    }
}

/// Per-category lag weights.
///
/// The easing exponent for a category is `1 / weight`, so smaller weights
/// settle later and feel heavier. Zero is rejected by [`SceneConfig::validate`]
/// before it can ever reach the frame path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LagWeights {
    /// Baubles - medium response.
    pub bauble: f32,
    /// Gift boxes - the heavy laggards, landing last.
    pub gift: f32,
    /// Lamps - light, almost linear response.
    pub lamp: f32,
}

impl Default for LagWeights {
    fn default() -> Self {
        Self {
            bauble: 0.08,
            gift: 0.04,
            lamp: 0.15,
        }
    }
}

/// Tuning for the global progress driver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverTuning {
    /// Base smoothing rate per second.
    pub rate: f32,
    /// Gain multiplier on the smoothing rate.
    pub gain: f32,
    /// Distance from the target below which progress snaps exactly onto it.
    pub snap_epsilon: f32,
    /// Upper clamp on frame delta, so a stall cannot overshoot the target.
    pub max_delta: f32,
}

impl Default for DriverTuning {
    fn default() -> Self {
        Self {
            rate: 1.2,
            gain: 4.0,
            snap_epsilon: 0.001,
            max_delta: 0.1,
        }
    }
}

/// Scene color palette.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Even-indexed baubles.
    pub bauble_primary: Rgb,
    /// Odd-indexed baubles.
    pub bauble_alternate: Rgb,
    /// Even-indexed gifts.
    pub gift_primary: Rgb,
    /// Odd-indexed gifts.
    pub gift_alternate: Rgb,
    /// Lamp emissive color.
    pub lamp: Rgb,
    /// Foliage base hue.
    pub foliage_low: Rgb,
    /// Foliage shimmer hue.
    pub foliage_high: Rgb,
    /// Hue the foliage glows toward as the tree completes.
    pub foliage_glow: Rgb,
    /// Photo frame border.
    pub frame_border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bauble_primary: color::GOLD_HIGHLIGHT,
            bauble_alternate: color::BAUBLE_PURPLE,
            gift_primary: color::GIFT_RED,
            gift_alternate: color::GIFT_BLUE,
            lamp: color::GOLD_BRIGHT,
            foliage_low: color::FOLIAGE_LOW,
            foliage_high: color::FOLIAGE_HIGH,
            foliage_glow: color::FOLIAGE_GLOW,
            frame_border: color::GOLD_HIGHLIGHT,
        }
    }
}

/// The complete scene configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Formed-tree geometry.
    pub tree: TreeShape,
    /// Dispersed-cloud geometry.
    pub chaos: ChaosCloud,
    /// Entity counts.
    pub population: Population,
    /// Per-category lag weights.
    pub weights: LagWeights,
    /// Progress driver tuning.
    pub driver: DriverTuning,
    /// Colors.
    pub palette: Palette,
}

impl SceneConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// Missing keys fall back to the reference defaults, so a partial file
    /// overriding a single section is fine.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and the relevant
    /// validation error for out-of-range tunables.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Self::from_toml_str`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks every tunable the frame path depends on.
    ///
    /// This is the only place lag weights and driver tuning are checked;
    /// per-frame code trusts the values unconditionally.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> ConfigResult<()> {
        dimension("tree.height", self.tree.height)?;
        dimension("tree.radius", self.tree.radius)?;
        if self.tree.spiral_arms == 0 {
            return Err(ConfigError::NoSpiralArms);
        }
        dimension("chaos.radius", self.chaos.radius)?;
        dimension("chaos.foliage_bias", self.chaos.foliage_bias)?;
        dimension("chaos.ornament_bias", self.chaos.ornament_bias)?;

        lag_weight("bauble", self.weights.bauble)?;
        lag_weight("gift", self.weights.gift)?;
        lag_weight("lamp", self.weights.lamp)?;

        tuning("rate", self.driver.rate)?;
        tuning("gain", self.driver.gain)?;
        tuning("snap_epsilon", self.driver.snap_epsilon)?;
        tuning("max_delta", self.driver.max_delta)?;

        let product = self.driver.rate * self.driver.gain * self.driver.max_delta;
        if product >= 1.0 {
            return Err(ConfigError::UnstableDriver { product });
        }

        Ok(())
    }
}

fn dimension(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { name, value })
    }
}

fn lag_weight(category: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveLagWeight { category, value })
    }
}

fn tuning(name: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDriverTuning { name, value })
    }
}
