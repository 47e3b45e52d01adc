use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    future::Future,
    io::Cursor,
};

use cereal_box::{
    data_structures::{
        scene_graph::{Light, MeshNode, TextBlock},
        texture::TextureData,
    },
    render::SceneRenderer,
    resources::TextureLoader,
};

/// Loader that hands out a tiny image per identifier and counts its calls.
///
/// Identifiers registered through `with_missing` fail like an absent asset,
/// those registered through `with_stalled` never finish loading. Every load
/// yields once before completing so that concurrent requests actually overlap.
pub(crate) struct CountingLoader {
    calls: RefCell<HashMap<String, usize>>,
    missing: HashSet<String>,
    stalled: HashSet<String>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(HashMap::new()),
            missing: HashSet::new(),
            stalled: HashSet::new(),
        }
    }

    pub fn with_stalled(mut self, source: &str) -> Self {
        self.stalled.insert(source.to_string());
        self
    }

    pub fn with_missing(mut self, source: &str) -> Self {
        self.missing.insert(source.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    pub fn calls_for(&self, source: &str) -> usize {
        self.calls.borrow().get(source).copied().unwrap_or(0)
    }
}

impl TextureLoader for CountingLoader {
    fn load(&self, source: &str) -> impl Future<Output = anyhow::Result<TextureData>> {
        *self
            .calls
            .borrow_mut()
            .entry(source.to_string())
            .or_default() += 1;
        let result = if self.missing.contains(source) {
            Err(anyhow::anyhow!("asset {source} not found"))
        } else {
            Ok(TextureData {
                label: source.to_string(),
                width: 2,
                height: 1,
                pixels: vec![255; 8],
            })
        };
        let stalled = self.stalled.contains(source);
        async move {
            if stalled {
                futures::future::pending::<()>().await;
            }
            tokio::task::yield_now().await;
            result
        }
    }
}

/// What a renderer was asked to draw, in order.
#[derive(Debug, PartialEq)]
pub(crate) enum DrawCall {
    Mesh(MeshNode),
    Light(Light),
    Text(TextBlock),
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn meshes(&self) -> Vec<&MeshNode> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Mesh(mesh) => Some(mesh),
                _ => None,
            })
            .collect()
    }

    pub fn lights(&self) -> Vec<&Light> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Light(light) => Some(light),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&TextBlock> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl SceneRenderer for RecordingRenderer {
    fn draw_mesh(&mut self, mesh: &MeshNode) {
        self.calls.push(DrawCall::Mesh(mesh.clone()));
    }

    fn draw_light(&mut self, light: &Light) {
        self.calls.push(DrawCall::Light(*light));
    }

    fn draw_text(&mut self, text: &TextBlock) {
        self.calls.push(DrawCall::Text(text.clone()));
    }
}

/// Encode a solid-colored PNG of the given size.
pub(crate) fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    bytes
}
