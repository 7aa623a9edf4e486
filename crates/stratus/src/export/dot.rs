//! DOT export of a [`Diagram`].
//!
//! The diagram title becomes the graph label, every nested group becomes a
//! `cluster_N` subgraph and every edge becomes a DOT edge statement. The
//! default attributes give rounded boxes on tinted cluster backgrounds, with
//! orthogonal edge routing.

use std::fmt::Display;

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use log::debug;

use stratus_core::{
    color::Color,
    identifier::Id,
    semantic::{Category, Child, Diagram, Edge, EdgeDirection, Group, LineStyle, Node},
};

use crate::{config::StyleConfig, render::RenderOptions};

const FONT_NAME: &str = "Sans-Serif";
const FONT_COLOR: &str = "#2D3436";
const EDGE_COLOR: &str = "#7B8794";
const CLUSTER_PEN_COLOR: &str = "#AEB6BE";

/// Cluster backgrounds, cycled by nesting depth.
const CLUSTER_BACKGROUNDS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Build the DOT graph for `diagram`.
pub fn to_graph(diagram: &Diagram, options: &RenderOptions<'_>) -> Graph {
    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(graph_attributes(diagram, options))),
        Stmt::GAttribute(GraphAttributes::Node(node_defaults())),
        Stmt::GAttribute(GraphAttributes::Edge(edge_defaults())),
    ];

    stmts.extend(children_stmts(diagram.root(), 0, options.style()));
    stmts.extend(diagram.edges().iter().map(edge_stmt));

    debug!(
        nodes = diagram.nodes().count(),
        clusters = diagram.groups().count(),
        edges = diagram.edges().len();
        "DOT graph assembled"
    );

    Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    }
}

/// Quote and escape `value` as a DOT string.
pub fn quoted(value: &str) -> DotId {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped.push('"');
    DotId::Escaped(escaped)
}

fn attr(key: &str, value: impl Display) -> Attribute {
    Attribute(DotId::Plain(key.to_string()), quoted(&value.to_string()))
}

fn node_id(id: Id) -> NodeId {
    NodeId(quoted(&id.to_string()), None)
}

fn graph_attributes(diagram: &Diagram, options: &RenderOptions<'_>) -> Vec<Attribute> {
    let graph = options.graph();
    let mut attributes = vec![
        attr("label", diagram.title()),
        attr("fontname", FONT_NAME),
        attr("fontsize", graph.font_size()),
        attr("fontcolor", FONT_COLOR),
        attr("pad", "2.0"),
        attr("splines", "ortho"),
        attr("nodesep", graph.node_spacing()),
        attr("ranksep", graph.rank_spacing()),
        attr("rankdir", graph.direction()),
    ];

    if let Some(location) = graph.label_location() {
        attributes.push(attr("labelloc", location));
    }
    if let Some(color) = options.style().background_color() {
        attributes.push(attr("bgcolor", color));
    }

    // Pass-through attributes go last so Graphviz lets them win.
    attributes.extend(
        graph
            .attributes()
            .iter()
            .map(|(key, value)| attr(key, value)),
    );
    attributes
}

fn node_defaults() -> Vec<Attribute> {
    vec![
        attr("shape", "box"),
        attr("style", "rounded,filled"),
        attr("width", "1.4"),
        attr("height", "1.0"),
        attr("margin", "0.2"),
        attr("fontname", FONT_NAME),
        attr("fontsize", "13"),
        attr("fontcolor", FONT_COLOR),
        attr("color", CLUSTER_PEN_COLOR),
    ]
}

fn edge_defaults() -> Vec<Attribute> {
    vec![
        attr("color", EDGE_COLOR),
        attr("fontname", FONT_NAME),
        attr("fontsize", "13"),
        attr("fontcolor", FONT_COLOR),
    ]
}

fn category_shape(category: Category) -> &'static str {
    match category {
        Category::Actor => "ellipse",
        Category::Database => "cylinder",
        Category::Storage => "folder",
        Category::Compute | Category::Network | Category::General => "box",
    }
}

fn category_fill(category: Category) -> &'static str {
    match category {
        Category::Actor => "#FFFFFF",
        Category::Compute => "#FDEBD0",
        Category::Network => "#E8DAEF",
        Category::Database => "#D6EAF8",
        Category::Storage => "#D5F5E3",
        Category::General => "#F2F3F4",
    }
}

fn node_stmt(node: &Node, style: &StyleConfig) -> Stmt {
    let category = node.category();
    let fill = style
        .category_color(category)
        .map(Color::to_hex)
        .unwrap_or_else(|| category_fill(category).to_string());

    Stmt::Node(DotNode {
        id: node_id(node.id()),
        attributes: vec![
            attr("label", node.label()),
            attr("shape", category_shape(category)),
            attr("fillcolor", fill),
        ],
    })
}

/// Invisible node that keeps an empty cluster visible.
fn placeholder_stmt(group: &Group) -> Stmt {
    Stmt::Node(DotNode {
        id: NodeId(quoted(&format!("{}_placeholder", group.id())), None),
        attributes: vec![
            attr("label", ""),
            attr("shape", "point"),
            attr("style", "invis"),
            attr("width", "0"),
        ],
    })
}

fn cluster_stmt(group: &Group, depth: usize, style: &StyleConfig) -> Stmt {
    let background = CLUSTER_BACKGROUNDS[depth % CLUSTER_BACKGROUNDS.len()];
    let mut stmts = vec![
        Stmt::Attribute(attr("label", group.label())),
        Stmt::Attribute(attr("labeljust", "l")),
        Stmt::Attribute(attr("pencolor", CLUSTER_PEN_COLOR)),
        Stmt::Attribute(attr("fontname", FONT_NAME)),
        Stmt::Attribute(attr("fontsize", "12")),
        Stmt::Attribute(attr("style", "rounded,filled")),
        Stmt::Attribute(attr("fillcolor", background)),
    ];

    if group.is_empty() {
        stmts.push(placeholder_stmt(group));
    } else {
        stmts.extend(children_stmts(group, depth + 1, style));
    }

    Stmt::Subgraph(Subgraph {
        id: quoted(&group.id().to_string()),
        stmts,
    })
}

fn children_stmts(group: &Group, depth: usize, style: &StyleConfig) -> Vec<Stmt> {
    group
        .children()
        .iter()
        .map(|child| match child {
            Child::Node(node) => node_stmt(node, style),
            Child::Group(nested) => cluster_stmt(nested, depth, style),
        })
        .collect()
}

fn edge_stmt(edge: &Edge) -> Stmt {
    let options = edge.options();
    let mut attributes = Vec::new();

    if let Some(label) = options.label() {
        attributes.push(attr("label", label));
    }
    if options.style() != LineStyle::Solid {
        attributes.push(attr("style", <&'static str>::from(options.style())));
    }
    if let Some(color) = options.color() {
        attributes.push(attr("color", color));
    }
    match options.direction() {
        EdgeDirection::Forward => {}
        EdgeDirection::Backward => attributes.push(attr("dir", "back")),
        EdgeDirection::Both => attributes.push(attr("dir", "both")),
        EdgeDirection::None => attributes.push(attr("dir", "none")),
    }

    Stmt::Edge(DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(edge.source())),
            Vertex::N(node_id(edge.target())),
        ),
        attributes,
    })
}
