//! Instanced rendering of the scene's shaped objects.
//!
//! Ornaments and photo frames share one instance buffer, grouped into
//! contiguous ranges so every category is a single instanced draw over its
//! unit mesh (or billboard quad, for frames).
//!
//! ## Key Concepts
//!
//! - **Instance Buffer**: double-buffered CPU staging, uploaded whole
//! - **Ranges**: fixed at startup from the generator's kind grouping
//! - **Full re-stage**: every transform is recomputed every frame; at the
//!   reference population that is cheaper than tracking dirtiness

mod buffer;
mod instance_data;
mod renderer;

pub use buffer::{InstanceBuffer, MAX_INSTANCES};
pub use instance_data::OrnamentInstance;
pub use renderer::{InstanceRanges, SceneInstances};
