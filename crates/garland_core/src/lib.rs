//! # GARLAND Core
//!
//! The scene kernel: configuration, the dual-position layout store, and the
//! animation math that moves everything between its chaos cloud and its
//! formed place on the tree.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - `winit`
//! - Any GPU or window-related crate
//!
//! If you need graphics types, put them in `garland_rendering`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod control;
pub mod error;
pub mod math;
pub mod motion;
pub mod store;

pub use color::Rgb;
pub use config::{
    ChaosCloud, DriverTuning, LagWeights, Palette, Population, SceneConfig, TreeShape,
};
pub use control::{ControlSnapshot, SceneControls};
pub use error::{ConfigError, ConfigResult};
pub use math::Vec3;
pub use motion::{eased_progress, lagged_progress, ProgressDriver, ScenePhase};
pub use store::{FoliagePoint, FramePlacement, Ornament, OrnamentKind, SceneLayout};
