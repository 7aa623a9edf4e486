//! The contract between a [`Diagram`] and the engine that draws it.
//!
//! A [`Renderer`] turns a diagram plus layout options into the bytes of an
//! image artifact. Any engine that satisfies the trait can be plugged into
//! [`DiagramRenderer`](crate::DiagramRenderer).

#[cfg(feature = "graphviz")]
mod graphviz;

#[cfg(feature = "graphviz")]
pub use graphviz::GraphvizRenderer;

use stratus_core::semantic::Diagram;

use crate::{
    StratusError,
    config::{AppConfig, Format, GraphConfig, StyleConfig},
};

/// Options handed to a [`Renderer`] alongside the diagram.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    format: Format,
    graph: &'a GraphConfig,
    style: &'a StyleConfig,
}

impl<'a> RenderOptions<'a> {
    pub fn new(format: Format, graph: &'a GraphConfig, style: &'a StyleConfig) -> Self {
        Self {
            format,
            graph,
            style,
        }
    }

    /// Collect the render options from an application config.
    pub fn from_config(config: &'a AppConfig) -> Self {
        Self::new(config.output().format(), config.graph(), config.style())
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn graph(&self) -> &'a GraphConfig {
        self.graph
    }

    pub fn style(&self) -> &'a StyleConfig {
        self.style
    }
}

/// A layout and drawing engine.
pub trait Renderer {
    /// Render `diagram` to the bytes of an artifact in `options.format()`.
    ///
    /// # Errors
    ///
    /// Engine failures are returned as [`StratusError::Render`], unchanged.
    fn render(&self, diagram: &Diagram, options: &RenderOptions<'_>)
    -> Result<Vec<u8>, StratusError>;
}
