//! Stratus - cloud architecture diagrams declared in Rust.
//!
//! Diagrams are declared with [`builder::DiagramBuilder`], which produces an
//! immutable [`semantic::Diagram`]. A [`DiagramRenderer`] validates the
//! diagram, hands it to a [`render::Renderer`] and writes the artifact.

pub mod config;
pub mod export;
pub mod output;
pub mod render;

mod error;

pub use stratus_core::{builder, color, identifier, semantic};

pub use error::StratusError;
pub use stratus_core::error::{BuildError, EndpointRole};

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use config::AppConfig;
use render::{RenderOptions, Renderer};
use semantic::Diagram;

/// Renders diagrams according to an [`AppConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use stratus::{DiagramRenderer, builder::DiagramBuilder, config::AppConfig, semantic::Category};
///
/// let mut builder = DiagramBuilder::new("Hello Cloud");
/// let user = builder.node("User", Category::Actor);
/// let web = builder.node("Web", Category::Compute);
/// builder.connect(user, web).expect("both nodes exist");
/// let diagram = builder.build();
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
/// let path = renderer.render_to_file(&diagram, ".").expect("Failed to render");
/// assert!(path.ends_with("hello_cloud.png"));
/// ```
pub struct DiagramRenderer {
    config: AppConfig,
    renderer: Box<dyn Renderer>,
}

impl DiagramRenderer {
    /// Create a renderer backed by Graphviz.
    #[cfg(feature = "graphviz")]
    pub fn new(config: AppConfig) -> Self {
        Self::with_renderer(config, render::GraphvizRenderer::new())
    }

    /// Create a renderer backed by any [`Renderer`] implementation.
    pub fn with_renderer(config: AppConfig, renderer: impl Renderer + 'static) -> Self {
        Self {
            config,
            renderer: Box::new(renderer),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate `diagram` and render it to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StratusError::Build`] for a dangling edge or duplicate node
    /// before the renderer is called, and [`StratusError::Render`] for
    /// engine failures.
    pub fn render(&self, diagram: &Diagram) -> Result<Vec<u8>, StratusError> {
        info!(title = diagram.title(); "Validating diagram");
        diagram.validate()?;
        trace!(diagram:?; "Validated diagram");

        let options = RenderOptions::from_config(&self.config);
        info!(format:% = options.format(); "Rendering diagram");
        let bytes = self.renderer.render(diagram, &options)?;
        debug!(bytes = bytes.len(); "Diagram rendered");

        Ok(bytes)
    }

    /// Render `diagram` and write it into `dir`.
    ///
    /// The file name is derived from the diagram title unless the output
    /// configuration names the file. Returns the path written.
    ///
    /// # Errors
    ///
    /// As [`DiagramRenderer::render`], plus [`StratusError::Io`] when the
    /// file cannot be written.
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, StratusError> {
        let bytes = self.render(diagram)?;

        let output_config = self.config.output();
        let path = output::artifact_path(dir.as_ref(), diagram.title(), output_config);
        output::write_artifact(&path, &bytes)?;

        if output_config.show() {
            output::show(&path);
        }

        Ok(path)
    }
}

#[cfg(feature = "graphviz")]
impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
