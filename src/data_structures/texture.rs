//! Decoded textures and the handles scene nodes hold on to.
//!
//! [`TextureData`] is the CPU-side RGBA8 image produced by a loader.
//! [`TextureHandle`] is the opaque, cheaply clonable reference the cache hands
//! out; two handles for the same identifier point to the same allocation.
//! With the `gpu` feature, [`TextureData::upload`] turns the image into a
//! sampled wgpu texture.

use std::{fmt, sync::Arc};

use anyhow::*;
use image::{GenericImageView, ImageFormat, load_from_memory_with_format};

/// A decoded image in RGBA8 layout.
#[derive(Clone, PartialEq)]
pub struct TextureData {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Decode raw image file contents.
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG, etc.)
    /// * `label` names the texture in logs and GPU debug labels
    /// * `format` is an optional file extension hint (e.g. "png"). If None or
    ///   unknown, the format is guessed from the data.
    pub fn from_bytes(bytes: &[u8], label: &str, format: Option<&str>) -> Result<Self> {
        let img = match format.and_then(ImageFormat::from_extension) {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => load_from_memory_with_format(bytes, fmt)?,
        };
        Ok(Self::from_image(&img, label))
    }

    pub fn from_image(img: &image::DynamicImage, label: &str) -> Self {
        let (width, height) = img.dimensions();
        Self {
            label: label.to_string(),
            width,
            height,
            pixels: img.to_rgba8().into_raw(),
        }
    }

    /// Height over width, handy when sizing a panel from its source image.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        self.height as f32 / self.width as f32
    }
}

impl fmt::Debug for TextureData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureData")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Shared reference to a loaded texture.
#[derive(Clone, Debug)]
pub struct TextureHandle(Arc<TextureData>);

impl TextureHandle {
    pub fn new(data: TextureData) -> Self {
        Self(Arc::new(data))
    }

    pub fn data(&self) -> &TextureData {
        &self.0
    }

    /// True when both handles came out of the same load.
    pub fn ptr_eq(&self, other: &TextureHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TextureHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

/// A GPU texture with its view and sampler.
#[cfg(feature = "gpu")]
#[derive(Clone, Debug)]
pub struct GpuTexture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

#[cfg(feature = "gpu")]
impl TextureData {
    /// Upload the image as an sRGB texture that panels can sample.
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> GpuTexture {
        let size = wgpu::Extent3d {
            width: self.width.max(1),
            height: self.height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&self.label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        if self.width > 0 && self.height > 0 {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                },
                &self.pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * self.width),
                    rows_per_image: Some(self.height),
                },
                size,
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Panels are single quads, clamping avoids bleeding at the borders
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&self.label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        GpuTexture {
            texture,
            view,
            sampler,
        }
    }
}
