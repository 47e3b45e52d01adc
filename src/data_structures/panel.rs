//! Rectangular panels showing an external image.

use crate::{
    data_structures::{
        material::Material,
        scene_graph::{Geometry, MeshNode, Shadows},
        transform::Transform,
    },
    error::SceneResult,
    resources::{TextureLoader, cache::TextureCache},
};

/// A plane of explicit size covered by the image at `source`.
///
/// The panel never derives its size from the image. Callers keep the aspect
/// ratio right themselves, e.g. `height = width * image_height / image_width`.
#[derive(Clone, Debug, PartialEq)]
pub struct TexturedPanel {
    pub source: String,
    pub width: f32,
    pub height: f32,
    pub transform: Transform,
    pub shadows: Shadows,
}

impl TexturedPanel {
    pub fn new(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            transform: Transform::default(),
            shadows: Shadows::NONE,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_shadows(mut self, shadows: Shadows) -> Self {
        self.shadows = shadows;
        self
    }

    /// Turns the panel into a drawable textured plane.
    ///
    /// Returns right away when `source` is already cached, otherwise only this
    /// panel waits for the load. A source that does not resolve is reported as
    /// [`crate::error::SceneError::ResourceResolution`]; there is no fallback texture.
    pub async fn resolve<L: TextureLoader + 'static>(
        &self,
        cache: &TextureCache<L>,
    ) -> SceneResult<MeshNode> {
        let texture = cache.get(&self.source).await?;
        Ok(MeshNode {
            geometry: Geometry::Plane {
                width: self.width,
                height: self.height,
            },
            material: Material::textured(texture),
            transform: self.transform,
            shadows: self.shadows,
        })
    }
}
