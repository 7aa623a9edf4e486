//! Diagram element types for the semantic model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::Color, identifier::Id};

/// Kind of infrastructure resource or actor a node stands for.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A person or external system initiating traffic.
    Actor,
    /// Virtual machines, containers, functions.
    Compute,
    /// Gateways, load balancers, endpoints.
    Network,
    /// Managed databases.
    Database,
    /// Object and block storage.
    Storage,
    #[default]
    General,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Self::Actor,
        Self::Compute,
        Self::Network,
        Self::Database,
        Self::Storage,
        Self::General,
    ];
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(Self::Actor),
            "compute" => Ok(Self::Compute),
            "network" => Ok(Self::Network),
            "database" => Ok(Self::Database),
            "storage" => Ok(Self::Storage),
            "general" => Ok(Self::General),
            _ => Err("Unsupported node category"),
        }
    }
}

impl From<Category> for &'static str {
    fn from(val: Category) -> Self {
        match val {
            Category::Actor => "actor",
            Category::Compute => "compute",
            Category::Network => "network",
            Category::Database => "database",
            Category::Storage => "storage",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A single labeled diagram element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    label: String,
    category: Category,
}

impl Node {
    /// Create a new Node.
    pub fn new(id: Id, label: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            label: label.into(),
            category,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The text shown under the node. May span several lines.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Where arrow heads are drawn on an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Head at the target (`a >> b`).
    #[default]
    Forward,
    /// Head at the source (`a << b`).
    Backward,
    /// Heads at both ends.
    Both,
    /// Plain line (`a - b`).
    None,
}

/// Stroke pattern of an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Bold,
}

impl From<LineStyle> for &'static str {
    fn from(val: LineStyle) -> Self {
        match val {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Bold => "bold",
        }
    }
}

/// Presentation attributes shared by every edge of one declaration.
///
/// A fan-out or chain declared with one `EdgeOptions` produces edges that
/// all carry the same label and style.
///
/// # Examples
///
/// ```
/// use stratus_core::semantic::{EdgeOptions, LineStyle};
///
/// let options = EdgeOptions::labeled("OS Updates").with_style(LineStyle::Dashed);
/// assert_eq!(options.label(), Some("OS Updates"));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeOptions {
    label: Option<String>,
    direction: EdgeDirection,
    style: LineStyle,
    color: Option<Color>,
}

impl EdgeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only a label set.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::default().with_label(label)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// A directed connection between two nodes.
///
/// Edges refer to nodes by [`Id`] and may cross group boundaries freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: Id,
    target: Id,
    options: EdgeOptions,
}

impl Edge {
    /// Create a new Edge between two node Ids.
    pub fn new(source: Id, target: Id, options: EdgeOptions) -> Self {
        Self {
            source,
            target,
            options,
        }
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.options.label()
    }

    pub fn options(&self) -> &EdgeOptions {
        &self.options
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)?;
        if let Some(label) = self.label() {
            write!(f, " [{label}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            let name = category.to_string();
            assert_eq!(name.parse::<Category>(), Ok(category));
        }
        assert!("router".parse::<Category>().is_err());
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::new(Id::new("s3"), "S3 Bucket\nCourse Data", Category::Storage);
        assert_eq!(node.id(), "s3");
        assert_eq!(node.label(), "S3 Bucket\nCourse Data");
        assert_eq!(node.category(), Category::Storage);
    }

    #[test]
    fn test_edge_options_defaults() {
        let options = EdgeOptions::new();
        assert_eq!(options.label(), None);
        assert_eq!(options.direction(), EdgeDirection::Forward);
        assert_eq!(options.style(), LineStyle::Solid);
        assert_eq!(options.color(), None);
    }

    #[test]
    fn test_edge_display() {
        let plain = Edge::new(Id::new("igw"), Id::new("alb"), EdgeOptions::new());
        assert_eq!(plain.to_string(), "igw -> alb");

        let labeled = Edge::new(
            Id::new("rds_master"),
            Id::new("rds_standby"),
            EdgeOptions::labeled("Sync Replication"),
        );
        assert_eq!(
            labeled.to_string(),
            "rds_master -> rds_standby [Sync Replication]"
        );
    }
}
