//! Render pass orchestration.
//!
//! A [`SceneFlow`] drives one render pass per call. The engine owns the frame
//! loop and calls [`SceneFlow::render_frame`] whenever it wants a new frame,
//! passing the current [`LightControls`] snapshot.
//!
//! # Lifecycle of a pass
//!
//! 1. Compose the scene description from the controls
//! 2. Resolve textured panels through the texture cache. A panel whose
//!    texture is still loading is skipped for this pass; its load goes on and
//!    the panel shows up in a later frame
//! 3. Submit the resolved nodes to the renderer in order
//!
//! A failed texture aborts the pass before anything is submitted.
//! [`SceneFlow::prepare`] waits for every texture instead, e.g. behind a
//! loading screen.

use crate::{
    compose::compose_scene,
    controls::LightControls,
    error::SceneResult,
    render::{ResolvedScene, SceneRenderer, resolve_ready, resolve_scene},
    resources::{TextureLoader, cache::TextureCache},
};

/// Owns the texture cache across passes.
pub struct SceneFlow<L> {
    cache: TextureCache<L>,
    frames: u64,
}

impl<L: TextureLoader + 'static> SceneFlow<L> {
    pub fn new(loader: L) -> Self {
        Self {
            cache: TextureCache::new(loader),
            frames: 0,
        }
    }

    /// Compose the scene and wait until every texture is resolved, without
    /// drawing it.
    pub async fn prepare(&self, controls: &LightControls) -> SceneResult<ResolvedScene> {
        resolve_scene(compose_scene(controls), &self.cache).await
    }

    /// Run one pass and hand the scene to `renderer`.
    ///
    /// Never waits on a texture load; panels that are not ready yet are left
    /// out of this frame.
    pub async fn render_frame<R: SceneRenderer + ?Sized>(
        &mut self,
        controls: &LightControls,
        renderer: &mut R,
    ) -> SceneResult<()> {
        let scene = match resolve_ready(compose_scene(controls), &self.cache) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Unable to render frame {}: {}", self.frames, e);
                return Err(e);
            }
        };
        if !scene.is_complete() {
            log::debug!(
                "Frame {} skips panels still loading: {:?}",
                self.frames,
                scene.pending
            );
        }
        scene.submit(renderer);
        log::trace!(
            "Submitted frame {} with {} nodes",
            self.frames,
            scene.nodes.len()
        );
        self.frames += 1;
        Ok(())
    }

    pub fn cache(&self) -> &TextureCache<L> {
        &self.cache
    }

    /// Number of passes that reached the renderer.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Install the platform logger: `env_logger` natively (configured through
/// `RUST_LOG`), the browser console at info level on the web.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        // a logger is already installed when this fails, keep using it
        let _ = console_log::init_with_level(log::Level::Info);
    }
}
