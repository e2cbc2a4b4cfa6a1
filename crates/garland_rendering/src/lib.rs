//! # GARLAND Rendering
//!
//! The GPU-facing half of the scene, minus the GPU: Pod vertex, instance
//! and uniform structs, WGSL shader sources, vertex-buffer layouts,
//! per-frame instance staging, the async photo library, and the frame
//! orchestrator that ties them together.
//!
//! This crate owns no device, queue or surface. Everything here produces
//! bytes and descriptors for a windowing shell to upload and draw, which
//! keeps the full animation path testable headless.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod foliage;
pub mod frame;
pub mod instancing;
pub mod mesh;
pub mod photos;
pub mod shaders;
pub mod uniforms;

pub use foliage::FoliageField;
pub use frame::{FrameStats, FrameUpdate, SceneAnimator};
pub use instancing::{
    InstanceBuffer, InstanceRanges, OrnamentInstance, SceneInstances, MAX_INSTANCES,
};
pub use mesh::{Mesh, MeshVertex};
pub use photos::{PhotoImage, PhotoLibrary, PhotoSlot};
pub use shaders::{ADDITIVE_BLEND, DEPTH_FORMAT};
pub use uniforms::SceneUniforms;
