//! Texture cache keyed by source identifier.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use futures::{
    FutureExt,
    future::{LocalBoxFuture, Shared},
};
use instant::Instant;

use crate::{
    data_structures::texture::TextureHandle,
    error::{SceneError, SceneResult},
    resources::TextureLoader,
};

/// A texture load that any number of panels can await.
pub type PendingTexture = Shared<LocalBoxFuture<'static, SceneResult<TextureHandle>>>;

/// Loads each identifier at most once and hands out the same handle afterwards.
///
/// Entries live as long as the cache. Concurrent requests for an identifier
/// that is still loading share the in-flight load. Failed loads stay cached
/// as failures, so a broken asset is reported again without hitting the loader.
///
/// The cache is meant for the single render thread: it is neither `Send` nor
/// `Sync`, and the loader futures need not be either.
pub struct TextureCache<L> {
    loader: Rc<L>,
    entries: RefCell<HashMap<String, PendingTexture>>,
}

impl<L: TextureLoader + 'static> TextureCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader: Rc::new(loader),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Request the texture for `source`.
    ///
    /// The loader is only invoked for identifiers that were never requested
    /// before. Awaiting an entry that already finished completes immediately.
    pub fn get(&self, source: &str) -> PendingTexture {
        if let Some(pending) = self.entries.borrow().get(source) {
            return pending.clone();
        }
        log::debug!("Requesting texture {source}");
        let pending = load(Rc::clone(&self.loader), source.to_string())
            .boxed_local()
            .shared();
        self.entries
            .borrow_mut()
            .insert(source.to_string(), pending.clone());
        pending
    }

    /// The finished result for `source`, or `None` if it was never requested
    /// or is still loading.
    pub fn peek(&self, source: &str) -> Option<SceneResult<TextureHandle>> {
        self.entries
            .borrow()
            .get(source)
            .and_then(|pending| pending.peek().cloned())
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.borrow().contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

async fn load<L: TextureLoader>(loader: Rc<L>, source: String) -> SceneResult<TextureHandle> {
    let started = Instant::now();
    match loader.load(&source).await {
        Ok(data) => {
            log::debug!(
                "Loaded texture {} ({}x{}) in {:?}",
                source,
                data.width,
                data.height,
                started.elapsed()
            );
            Ok(TextureHandle::new(data))
        }
        Err(err) => {
            log::error!("Texture {source} could not be loaded: {err:#}");
            Err(SceneError::resolution(&source, &err))
        }
    }
}
