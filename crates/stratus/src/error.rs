//! Error types for Stratus operations.
//!
//! This module provides the main error type [`StratusError`] which wraps
//! the conditions that can occur between declaring a diagram and writing
//! the rendered artifact.

use std::io;

use thiserror::Error;

use stratus_core::error::BuildError;

/// The main error type for Stratus operations.
///
/// Renderer and file-system failures are carried unmodified.
#[derive(Debug, Error)]
pub enum StratusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
}

impl StratusError {
    /// Wrap a failure reported by a rendering engine.
    pub fn render(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Render(err.into())
    }
}
