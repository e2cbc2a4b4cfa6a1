//! # GARLAND
//!
//! The scene shell, integrating the three layers and hosting the binaries.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                          GARLAND SCENE                             │
//! ├────────────────────────────────────────────────────────────────────┤
//! │                                                                    │
//! │  ┌──────────────────┐   ┌───────────────────┐   ┌──────────────┐  │
//! │  │ garland_core     │──>│ garland_procedural│──>│ garland_     │  │
//! │  │                  │   │                   │   │ rendering    │  │
//! │  │ • config         │   │ • seeded chaos    │   │ • WGSL       │  │
//! │  │ • layout store   │   │ • spiral foliage  │   │ • instances  │  │
//! │  │ • progress drive │   │ • ornament ring   │   │ • photos     │  │
//! │  └──────────────────┘   └───────────────────┘   └──────┬───────┘  │
//! │                                                        │          │
//! │                    ┌───────────────────────────────────┘          │
//! │                    v                                              │
//! │  ┌──────────────────────────────────────────────────────────────┐ │
//! │  │ garland (this crate)                                         │ │
//! │  │ • orbit camera    • viewer binary    • formation_drive       │ │
//! │  └──────────────────────────────────────────────────────────────┘ │
//! │                                                                    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `boot`: environment-driven startup shared by the binaries
//! - `camera`: damped orbit camera for the viewer

pub mod boot;
pub mod camera;

// Re-export the layers
pub use garland_core as core;
pub use garland_procedural as procedural;
pub use garland_rendering as rendering;

pub use camera::OrbitCamera;
