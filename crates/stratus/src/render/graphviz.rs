//! Rendering through Graphviz.

use graphviz_rust::{
    cmd::{CommandArg, Format as GraphvizFormat},
    exec,
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};

use stratus_core::semantic::Diagram;

use crate::{
    StratusError,
    config::Format,
    export::dot,
    render::{RenderOptions, Renderer},
};

/// [`Renderer`] backed by the Graphviz `dot` layout engine.
///
/// [`Format::Dot`] is produced in-process. Every other format runs the
/// `dot` executable, which must be on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphvizRenderer;

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Print the DOT source for `diagram` without invoking Graphviz.
    pub fn dot_source(&self, diagram: &Diagram, options: &RenderOptions<'_>) -> String {
        dot::to_graph(diagram, options).print(&mut PrinterContext::default())
    }
}

impl Renderer for GraphvizRenderer {
    fn render(
        &self,
        diagram: &Diagram,
        options: &RenderOptions<'_>,
    ) -> Result<Vec<u8>, StratusError> {
        let format = match options.format() {
            Format::Dot => {
                debug!("Printing DOT source");
                return Ok(self.dot_source(diagram, options).into_bytes());
            }
            Format::Png => GraphvizFormat::Png,
            Format::Svg => GraphvizFormat::Svg,
            Format::Pdf => GraphvizFormat::Pdf,
            Format::Jpg => GraphvizFormat::Jpg,
        };

        info!(format:% = options.format(); "Running Graphviz");
        let graph = dot::to_graph(diagram, options);
        let bytes = exec(
            graph,
            &mut PrinterContext::default(),
            vec![CommandArg::Format(format)],
        )
        .map_err(StratusError::render)?;

        debug!(bytes = bytes.len(); "Graphviz finished");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use stratus_core::{
        builder::DiagramBuilder,
        semantic::{Category, EdgeOptions},
    };

    use super::*;
    use crate::config::{AppConfig, Format, OutputConfig};

    #[test]
    fn test_dot_format_needs_no_engine() {
        let mut builder = DiagramBuilder::new("Tiny");
        let a = builder.named_node("a", "Alpha", Category::Compute).unwrap();
        let b = builder
            .group("Zone", |zone| zone.named_node("b", "Beta", Category::Storage))
            .unwrap();
        builder
            .connect_with(a, b, EdgeOptions::labeled("Private Link"))
            .unwrap();
        let diagram = builder.build();

        let config = AppConfig::new(
            Default::default(),
            OutputConfig::new(Format::Dot, false, None),
            Default::default(),
        );
        let bytes = GraphvizRenderer::new()
            .render(&diagram, &RenderOptions::from_config(&config))
            .unwrap();
        let source = String::from_utf8(bytes).unwrap();

        assert!(source.starts_with("digraph"));
        assert!(source.contains("cluster_1"));
        assert!(source.contains("Private Link"));
        assert!(source.contains("Alpha"));
    }
}
