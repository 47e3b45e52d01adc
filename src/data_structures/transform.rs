//! Node transforms.
//!
//! Every scene node carries a [`Transform`] built from literal position,
//! Euler rotation and scale vectors. Unset parts default to identity.

use cgmath::{Euler, Matrix, Rad, SquareMatrix};

/// Position, rotation (Euler XYZ in radians) and scale of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Vector3<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Transform {
    /// Identity transform: no move, rotate, or scale.
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            rotation: cgmath::Vector3::new(0.0, 0.0, 0.0),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: cgmath::Vector3::new(x, y, z),
            ..Self::new()
        }
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = cgmath::Vector3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = cgmath::Vector3::new(x, y, z);
        self
    }

    pub fn quaternion(&self) -> cgmath::Quaternion<f32> {
        Euler {
            x: Rad(self.rotation.x),
            y: Rad(self.rotation.y),
            z: Rad(self.rotation.z),
        }
        .into()
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.quaternion())
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Packs the transform into the layout engines upload per draw.
    ///
    /// The normal matrix is the inverse transpose of the linear part so that
    /// non-uniform scales (the box pillars are 1x11x3) keep normals correct.
    /// Degenerate scales fall back to the pure rotation.
    pub fn to_raw(&self) -> TransformRaw {
        let rotation = cgmath::Matrix3::from(self.quaternion());
        let linear = rotation
            * cgmath::Matrix3::from_diagonal(cgmath::Vector3::new(
                self.scale.x,
                self.scale.y,
                self.scale.z,
            ));
        let normal = linear
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(rotation);
        TransformRaw {
            model: self.to_matrix().into(),
            normal: normal.into(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<cgmath::Vector3<f32>> for Transform {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/**
 * The raw transform is what a renderer copies into its per-object uniforms.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
}
