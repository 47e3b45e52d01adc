//! Error types surfaced while composing and resolving a scene.

use thiserror::Error;

/// Errors that terminate the current render pass.
///
/// The type is `Clone` because a single failed texture load is shared by every
/// panel waiting on the same identifier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// An external image identifier did not resolve to a usable texture.
    #[error("Failed to resolve texture '{source_id}': {reason}")]
    ResourceResolution {
        /// Identifier (path or URL) the loader was asked for.
        source_id: String,
        /// Rendered error chain reported by the loader.
        reason: String,
    },

    /// A color literal was neither a hex code nor a known color name.
    #[error("Invalid color literal '{0}'")]
    InvalidColor(String),
}

impl SceneError {
    pub(crate) fn resolution(source_id: &str, err: &anyhow::Error) -> Self {
        Self::ResourceResolution {
            source_id: source_id.to_string(),
            reason: format!("{err:#}"),
        }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
