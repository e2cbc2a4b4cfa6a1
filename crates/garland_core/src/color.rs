//! Color types and the scene's default palette.

use serde::{Deserialize, Serialize};

/// Linear RGB color triple.
///
/// Stored as plain floats so it serializes cleanly from TOML and packs
/// straight into shader uniforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component in [0, 1]
    pub r: f32,
    /// Green component in [0, 1]
    pub g: f32,
    /// Blue component in [0, 1]
    pub b: f32,
}

impl Rgb {
    /// Creates a color from float components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit components.
    ///
    /// Plain 1/255 scaling, no gamma transfer - the shaders were tuned
    /// against these raw values.
    #[must_use]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Packs into a `[r, g, b, w]` array for uniform upload.
    #[must_use]
    pub const fn to_vec4(self, w: f32) -> [f32; 4] {
        [self.r, self.g, self.b, w]
    }
}

/// Warm gold used for baubles and frame borders (#D4AF37).
pub const GOLD_HIGHLIGHT: Rgb = Rgb::new(0.831_372_5, 0.686_274_5, 0.215_686_3);

/// Saturated gold used for lamp emissives (#FFD700).
pub const GOLD_BRIGHT: Rgb = Rgb::new(1.0, 0.843_137_3, 0.0);

/// Gift wrap red (#FF003C).
pub const GIFT_RED: Rgb = Rgb::new(1.0, 0.0, 0.235_294_1);

/// Gift wrap blue (#00D4FF).
pub const GIFT_BLUE: Rgb = Rgb::new(0.0, 0.831_372_5, 1.0);

/// Pale purple for alternating baubles (#E0AAFF).
pub const BAUBLE_PURPLE: Rgb = Rgb::new(0.878_431_4, 0.666_666_7, 1.0);

/// Deep emerald, the foliage base hue.
pub const FOLIAGE_LOW: Rgb = Rgb::new(0.0, 0.6, 0.2);

/// Neon green, the foliage shimmer hue.
pub const FOLIAGE_HIGH: Rgb = Rgb::new(0.0, 1.0, 0.4);

/// Warm glow the foliage drifts toward as the tree completes.
pub const FOLIAGE_GLOW: Rgb = Rgb::new(1.0, 0.9, 0.4);
