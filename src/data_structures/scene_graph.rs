//! Scene graph node types.
//!
//! A scene is described as an ordered list of [`SceneNode`]s. The list order
//! only influences draw order; nothing about the scene's meaning depends on it.

use crate::data_structures::{
    material::{Color, Material},
    panel::TexturedPanel,
    transform::Transform,
};

/// Whether a node casts and/or receives shadows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shadows {
    pub cast: bool,
    pub receive: bool,
}

impl Shadows {
    pub const NONE: Shadows = Shadows {
        cast: false,
        receive: false,
    };
    pub const BOTH: Shadows = Shadows {
        cast: true,
        receive: true,
    };
    pub const RECEIVE: Shadows = Shadows {
        cast: false,
        receive: true,
    };
}

/// Primitive geometry of a mesh. Sizes are in world units before scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Unit cube centered at the origin; size comes from the transform scale.
    Box,
    /// Rectangle in the local XY plane facing +Z.
    Plane { width: f32, height: f32 },
    /// Regular dodecahedron inscribed in a sphere of `radius`.
    Dodecahedron { radius: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub shadows: Shadows,
}

impl MeshNode {
    pub fn new(geometry: Geometry, material: impl Into<Material>) -> Self {
        Self {
            geometry,
            material: material.into(),
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
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Uniform light hitting every surface equally.
    Ambient { color: Color, intensity: f32 },
    /// Sun-like light shining from `position` towards the origin.
    Directional {
        color: Color,
        intensity: f32,
        position: cgmath::Vector3<f32>,
        cast_shadow: bool,
    },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. } | Light::Directional { intensity, .. } => *intensity,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color, .. } | Light::Directional { color, .. } => *color,
        }
    }
}

/// A block of text laid out in the local XY plane.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub content: String,
    pub font_size: f32,
    /// CSS-style weight, `None` for the font's regular weight.
    pub font_weight: Option<u16>,
    /// Wrap width in world units, `None` to never wrap.
    pub max_width: Option<f32>,
    pub material: Material,
    pub transform: Transform,
    pub shadows: Shadows,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            font_weight: None,
            max_width: None,
            material: Material::new(color),
            transform: Transform::default(),
            shadows: Shadows::NONE,
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_shadows(mut self, shadows: Shadows) -> Self {
        self.shadows = shadows;
        self
    }
}

/// One declared visual element of the scene.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Mesh(MeshNode),
    Light(Light),
    Text(TextBlock),
    TexturedPanel(TexturedPanel),
}

impl SceneNode {
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            SceneNode::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn transform(&self) -> Option<&Transform> {
        match self {
            SceneNode::Mesh(mesh) => Some(&mesh.transform),
            SceneNode::Text(text) => Some(&text.transform),
            SceneNode::TexturedPanel(panel) => Some(&panel.transform),
            SceneNode::Light(_) => None,
        }
    }
}

impl From<MeshNode> for SceneNode {
    fn from(mesh: MeshNode) -> Self {
        SceneNode::Mesh(mesh)
    }
}

impl From<Light> for SceneNode {
    fn from(light: Light) -> Self {
        SceneNode::Light(light)
    }
}

impl From<TextBlock> for SceneNode {
    fn from(text: TextBlock) -> Self {
        SceneNode::Text(text)
    }
}

impl From<TexturedPanel> for SceneNode {
    fn from(panel: TexturedPanel) -> Self {
        SceneNode::TexturedPanel(panel)
    }
}
