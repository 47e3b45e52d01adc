//! Scene data structures: nodes, materials, transforms, textures and panels.
//!
//! - `scene_graph` holds the node variants a scene is made of
//! - `material` contains colors and surface descriptors
//! - `transform` holds position, rotation and scale of a node
//! - `texture` contains decoded images and the handles nodes share
//! - `panel` is a plane showing an external image

pub mod material;
pub mod panel;
pub mod scene_graph;
pub mod texture;
pub mod transform;
