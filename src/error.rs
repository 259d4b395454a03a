//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::scene::SceneError;

/// Errors produced by the cubenav crate.
#[derive(Debug)]
pub enum NavError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// The configured scene could not be built.
    Scene(SceneError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Scene(e) => write!(f, "scene error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Scene(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for NavError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<SceneError> for NavError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
