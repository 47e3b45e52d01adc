//! Hand-off between the scene description and the rendering engine.
//!
//! Describing and drawing are separate steps. Resolution turns the nodes
//! produced by the composer into a [`ResolvedScene`] in which panels have
//! become textured plane meshes:
//!
//! - [`resolve_ready`] never waits. Panels whose texture is still loading are
//!   left out of this pass while their load continues.
//! - [`resolve_scene`] waits for every panel texture.
//!
//! [`ResolvedScene::submit`] then walks the nodes in order and hands each one
//! to a [`SceneRenderer`], the seam where an actual engine plugs in.
//!
//! # Key types
//!
//! - [`ResolvedNode`] is a drawable node: mesh, light or text
//! - [`SceneRenderer`] is implemented by the engine that draws the nodes
//! - [`LightingUniform`] packs the scene's two lights for shader upload
//!

use futures::{FutureExt, future::join_all};

use crate::{
    data_structures::scene_graph::{Light, MeshNode, SceneNode, TextBlock},
    error::SceneResult,
    resources::{TextureLoader, cache::TextureCache},
};

/// A node that can be drawn without further loading.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedNode {
    Mesh(MeshNode),
    Light(Light),
    Text(TextBlock),
}

/// Drawing backend receiving one call per node and pass.
pub trait SceneRenderer {
    fn draw_mesh(&mut self, mesh: &MeshNode);

    fn draw_light(&mut self, light: &Light);

    fn draw_text(&mut self, text: &TextBlock);
}

/// All nodes of one pass, ready to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedScene {
    pub nodes: Vec<ResolvedNode>,
    /// Identifiers of panels left out because their texture is still loading.
    pub pending: Vec<String>,
}

impl ResolvedScene {
    /// True when no panel had to be left out.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn submit<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) {
        for node in &self.nodes {
            match node {
                ResolvedNode::Mesh(mesh) => renderer.draw_mesh(mesh),
                ResolvedNode::Light(light) => renderer.draw_light(light),
                ResolvedNode::Text(text) => renderer.draw_text(text),
            }
        }
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.nodes.iter().filter_map(|node| match node {
            ResolvedNode::Light(light) => Some(light),
            _ => None,
        })
    }

    pub fn meshes(&self) -> impl Iterator<Item = &MeshNode> {
        self.nodes.iter().filter_map(|node| match node {
            ResolvedNode::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    pub fn lighting(&self) -> LightingUniform {
        LightingUniform::from_lights(self.lights())
    }
}

/// Resolve the textured panels of `nodes` whose texture is available now.
///
/// Requesting a texture starts its load, but only the panel itself waits for
/// it: a panel that is still loading is recorded in
/// [`ResolvedScene::pending`] and every other node is kept in order. A load
/// that failed aborts the whole pass.
pub fn resolve_ready<L: TextureLoader + 'static>(
    nodes: Vec<SceneNode>,
    cache: &TextureCache<L>,
) -> SceneResult<ResolvedScene> {
    let mut scene = ResolvedScene::default();
    for node in nodes {
        let resolved = match node {
            SceneNode::Mesh(mesh) => ResolvedNode::Mesh(mesh),
            SceneNode::Light(light) => ResolvedNode::Light(light),
            SceneNode::Text(text) => ResolvedNode::Text(text),
            SceneNode::TexturedPanel(panel) => {
                let ready = panel.resolve(cache).now_or_never();
                match ready {
                    Some(mesh) => ResolvedNode::Mesh(mesh?),
                    None => {
                        scene.pending.push(panel.source);
                        continue;
                    }
                }
            }
        };
        scene.nodes.push(resolved);
    }
    Ok(scene)
}

/// Resolve every textured panel in `nodes`, waiting for loads in flight.
///
/// Panels are resolved concurrently and keep their position in the list.
/// The first panel that fails aborts the whole pass.
pub async fn resolve_scene<L: TextureLoader + 'static>(
    nodes: Vec<SceneNode>,
    cache: &TextureCache<L>,
) -> SceneResult<ResolvedScene> {
    let nodes = join_all(nodes.into_iter().map(|node| async move {
        match node {
            SceneNode::Mesh(mesh) => Ok(ResolvedNode::Mesh(mesh)),
            SceneNode::Light(light) => Ok(ResolvedNode::Light(light)),
            SceneNode::Text(text) => Ok(ResolvedNode::Text(text)),
            SceneNode::TexturedPanel(panel) => panel.resolve(cache).await.map(ResolvedNode::Mesh),
        }
    }))
    .await
    .into_iter()
    .collect::<SceneResult<Vec<_>>>()?;
    Ok(ResolvedScene {
        nodes,
        pending: Vec::new(),
    })
}

/// Both scene lights as uploaded to the GPU.
///
/// A scene without a directional light leaves its intensity at zero, which
/// shades exactly like a switched-off light.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_position: [f32; 3],
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
    /// Non-zero when the directional light casts shadows.
    pub cast_shadow: u32,
}

impl LightingUniform {
    /// Accumulates ambient lights; the last directional light wins.
    pub fn from_lights<'a>(lights: impl IntoIterator<Item = &'a Light>) -> Self {
        lights
            .into_iter()
            .fold(Self::default(), |mut uniform, light| {
                match *light {
                    Light::Ambient { color, intensity } => {
                        let color = color.to_array();
                        // weight each ambient color by its share of the total intensity
                        let total = uniform.ambient_intensity + intensity;
                        if total > 0.0 {
                            for (acc, c) in uniform.ambient_color.iter_mut().zip(color) {
                                *acc = (*acc * uniform.ambient_intensity + c * intensity) / total;
                            }
                        } else {
                            uniform.ambient_color = color;
                        }
                        uniform.ambient_intensity = total;
                    }
                    Light::Directional {
                        color,
                        intensity,
                        position,
                        cast_shadow,
                    } => {
                        uniform.directional_position = position.into();
                        uniform.directional_intensity = intensity;
                        uniform.directional_color = color.to_array();
                        uniform.cast_shadow = cast_shadow as u32;
                    }
                }
                uniform
            })
    }
}
