//! Configuration types for Stratus diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out, styled and written. All types implement
//! [`serde::Deserialize`] for loading from external sources such as TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`GraphConfig`] - Layout options handed to the renderer.
//! - [`OutputConfig`] - Artifact format, file name and viewer behavior.
//! - [`StyleConfig`] - Background and per-category node colors.
//!
//! The types also implement [`serde::Serialize`], so a configuration can be
//! written back out or used as the base that a partial file is layered on.
//!
//! Values are passed through to the renderer as they are. Only colors are
//! checked, because they are parsed when the configuration is loaded.
//!
//! # Example
//!
//! ```
//! # use stratus::config::{AppConfig, Direction, Format};
//! let config = AppConfig::default();
//! assert_eq!(config.graph().direction(), Direction::LeftRight);
//! assert_eq!(config.output().format(), Format::Png);
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stratus_core::{color::Color, semantic::Category};

/// Top-level configuration combining graph, output and style settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    pub fn new(graph: GraphConfig, output: OutputConfig, style: StyleConfig) -> Self {
        Self {
            graph,
            output,
            style,
        }
    }

    /// Returns the graph layout configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn graph_mut(&mut self) -> &mut GraphConfig {
        &mut self.graph
    }

    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }
}

/// Flow direction of the layout (Graphviz `rankdir`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Direction {
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TB" => Ok(Self::TopBottom),
            "BT" => Ok(Self::BottomTop),
            "LR" => Ok(Self::LeftRight),
            "RL" => Ok(Self::RightLeft),
            _ => Err("Unsupported direction, expected one of TB, BT, LR, RL"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Vertical placement of the diagram title (Graphviz `labelloc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LabelLocation {
    #[serde(rename = "t")]
    Top,
    #[serde(rename = "c")]
    Center,
    #[serde(rename = "b")]
    Bottom,
}

impl From<LabelLocation> for &'static str {
    fn from(val: LabelLocation) -> Self {
        match val {
            LabelLocation::Top => "t",
            LabelLocation::Center => "c",
            LabelLocation::Bottom => "b",
        }
    }
}

impl fmt::Display for LabelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Layout options consumed by the renderer.
///
/// Spacing values are in inches, as Graphviz expects them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphConfig {
    direction: Direction,
    node_spacing: f64,
    rank_spacing: f64,
    font_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_location: Option<LabelLocation>,
    /// Extra graph attributes, applied last and never interpreted.
    attributes: IndexMap<String, String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            node_spacing: 0.60,
            rank_spacing: 0.75,
            font_size: 15.0,
            label_location: None,
            attributes: IndexMap::new(),
        }
    }
}

impl GraphConfig {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    pub fn with_rank_spacing(mut self, spacing: f64) -> Self {
        self.rank_spacing = spacing;
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        self.label_location = Some(location);
        self
    }

    /// Add a raw Graphviz graph attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node_spacing(&self) -> f64 {
        self.node_spacing
    }

    pub fn rank_spacing(&self) -> f64 {
        self.rank_spacing
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn label_location(&self) -> Option<LabelLocation> {
        self.label_location
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }
}

/// Kind of artifact produced by a renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpg,
    /// Graphviz source text.
    Dot,
}

impl Format {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        self.into()
    }
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<Format> for &'static str {
    fn from(val: Format) -> Self {
        match val {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Pdf => "pdf",
            Format::Jpg => "jpg",
            Format::Dot => "dot",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Where and how the rendered artifact is written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    format: Format,
    /// Open the artifact in the system viewer once written.
    show: bool,
    /// File stem; derived from the diagram title when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
}

impl OutputConfig {
    pub fn new(format: Format, show: bool, file_name: Option<String>) -> Self {
        Self {
            format,
            show,
            file_name,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Color>,
    /// Node fill color overrides, keyed by category.
    categories: IndexMap<Category, Color>,
}

impl StyleConfig {
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Returns the configured fill color for nodes of `category`, if any.
    pub fn category_color(&self, category: Category) -> Option<Color> {
        self.categories.get(&category).copied()
    }
}
