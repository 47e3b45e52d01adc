//! cereal-box
//!
//! A declarative description of a textured cereal box scene for native and
//! WASM targets. The crate does not draw anything itself: it composes the
//! scene from the current light controls, resolves image textures through a
//! cache, and hands the finished nodes to whatever engine implements
//! [`render::SceneRenderer`].
//!
//! High-level modules
//! - `compose`: the literal scene and the light rig derived from the controls
//! - `controls`: light control values and the options a UI panel exposes
//! - `data_structures`: scene nodes, materials, transforms, textures, panels
//! - `error`: errors that end a render pass
//! - `flow`: one render pass per call (compose, resolve, submit) and logging setup
//! - `resources`: texture loaders and the texture cache
//! - `render`: resolved scenes, the renderer seam and GPU-ready lighting data
//!

pub mod compose;
pub mod controls;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::Vector3;
pub use controls::{ControlChange, ControlPanel, LightControls};
pub use error::{SceneError, SceneResult};
pub use flow::{SceneFlow, init_logging};
