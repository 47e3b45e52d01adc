//! Acquiring textures from external files.
//!
//! A [`TextureLoader`] turns an identifier (path or URL) into decoded image
//! data. The [`cache`] module sits in front of a loader so every identifier is
//! loaded at most once.

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::data_structures::texture::TextureData;

pub mod cache;

/// Source of texture data keyed by identifier.
///
/// Implementations only load; deduplication and error reporting happen in
/// [`cache::TextureCache`].
pub trait TextureLoader {
    fn load(&self, source: &str) -> impl Future<Output = anyhow::Result<TextureData>>;
}

/// Loads images from the asset directory.
///
/// Natively the identifier is a path relative to `root`. On the web it is
/// resolved against `<origin>/<root>/`, unless it already is an absolute URL.
#[derive(Clone, Debug)]
pub struct AssetLoader {
    root: PathBuf,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn load_binary(&self, file_name: &str) -> anyhow::Result<Vec<u8>> {
        #[cfg(target_arch = "wasm32")]
        let data = {
            let url = self.format_url(file_name)?;
            reqwest::get(url).await?.error_for_status()?.bytes().await?.to_vec()
        };
        #[cfg(not(target_arch = "wasm32"))]
        let data = {
            let path = self.root.join(file_name);
            tokio::fs::read(&path)
                .await
                .with_context(|| format!("Could not read {}", path.display()))?
        };

        Ok(data)
    }

    #[cfg(target_arch = "wasm32")]
    fn format_url(&self, file_name: &str) -> anyhow::Result<reqwest::Url> {
        if let Ok(url) = reqwest::Url::parse(file_name) {
            return Ok(url);
        }
        let window = web_sys::window().context("No browser window available")?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| anyhow::anyhow!("Could not read page origin: {e:?}"))?;
        let root = self.root.to_string_lossy();
        let root = root.trim_start_matches("./").trim_matches('/');
        let base = reqwest::Url::parse(&format!("{}/{}/", origin, root))?;
        Ok(base.join(file_name)?)
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new(Path::new("./").join("assets"))
    }
}

impl TextureLoader for AssetLoader {
    fn load(&self, source: &str) -> impl Future<Output = anyhow::Result<TextureData>> {
        async move {
            let data = self.load_binary(source).await?;
            let extension = Path::new(source).extension().and_then(|ext| ext.to_str());
            TextureData::from_bytes(&data, source, extension)
                .with_context(|| format!("Could not decode image {source}"))
        }
    }
}
