//! Core diagram structure types.
//!
//! This module contains the containers of the semantic diagram model:
//! - [`Diagram`] - The root value: title, group tree and edge list
//! - [`Group`] - A named cluster holding an ordered list of children
//! - [`Child`] - Either a [`Node`] or a nested [`Group`]

use std::collections::HashSet;

use crate::{
    error::{BuildError, EndpointRole},
    identifier::Id,
    semantic::element::{Edge, Node},
};

/// One entry in a group's ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Group(Group),
}

/// A named container of nodes and nested groups.
///
/// Children keep their declaration order. Groups own their children, so the
/// group structure of a diagram is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: Id,
    label: String,
    children: Vec<Child>,
}

impl Group {
    /// Create a new Group from its children.
    pub fn new(id: Id, label: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            id,
            label: label.into(),
            children,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the children of this group, in declaration order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over every node in this group and its descendants, depth first.
    pub fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.children.iter().flat_map(child_nodes))
    }

    /// Iterate over every group nested below this one, depth first.
    pub fn groups(&self) -> Box<dyn Iterator<Item = &Group> + '_> {
        Box::new(self.children.iter().flat_map(child_groups))
    }
}

fn child_nodes(child: &Child) -> Box<dyn Iterator<Item = &Node> + '_> {
    match child {
        Child::Node(node) => Box::new(std::iter::once(node)),
        Child::Group(group) => group.nodes(),
    }
}

fn child_groups(child: &Child) -> Box<dyn Iterator<Item = &Group> + '_> {
    match child {
        Child::Node(_) => Box::new(std::iter::empty()),
        Child::Group(group) => Box::new(std::iter::once(group).chain(group.groups())),
    }
}

/// A complete architecture diagram.
///
/// The root group carries the diagram title as its label. Edges are kept in
/// declaration order; that order is a layout hint only.
///
/// # Examples
///
/// ```
/// use stratus_core::{
///     identifier::Id,
///     semantic::{Category, Child, Diagram, Edge, EdgeOptions, Group, Node},
/// };
///
/// let user = Node::new(Id::new("user"), "User", Category::Actor);
/// let web = Node::new(Id::new("web"), "Web", Category::Compute);
/// let root = Group::new(
///     Id::cluster(0),
///     "Demo",
///     vec![Child::Node(user), Child::Node(web)],
/// );
/// let edge = Edge::new(Id::new("user"), Id::new("web"), EdgeOptions::new());
/// let diagram = Diagram::new("Demo", root, vec![edge]);
///
/// assert!(diagram.validate().is_ok());
/// assert_eq!(diagram.nodes().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    title: String,
    root: Group,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create a new Diagram. Use [`Diagram::validate`] to check a diagram
    /// assembled by hand; the builder only produces valid ones.
    pub fn new(title: impl Into<String>, root: Group, edges: Vec<Edge>) -> Self {
        Self {
            title: title.into(),
            root,
            edges,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the diagram's top-level group.
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Borrow the edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every node in the diagram, depth first in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.root.nodes()
    }

    /// Every group below the root, depth first in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.root.groups()
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes().find(|node| node.id() == id)
    }

    pub fn contains_node(&self, id: Id) -> bool {
        self.node(id).is_some()
    }

    /// Check that node identifiers are unique, stay out of the `cluster_`
    /// namespace, and that every edge endpoint refers to a node in the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found, scanning nodes before edges.
    pub fn validate(&self) -> Result<(), BuildError> {
        let mut declared = HashSet::new();
        for node in self.nodes() {
            if node.id().is_cluster() {
                return Err(BuildError::ReservedName(node.id()));
            }
            if !declared.insert(node.id()) {
                return Err(BuildError::DuplicateNode(node.id()));
            }
        }

        for edge in &self.edges {
            for (id, role) in [
                (edge.source(), EndpointRole::Source),
                (edge.target(), EndpointRole::Target),
            ] {
                if !declared.contains(&id) {
                    return Err(BuildError::UnknownNode { id, role });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{Category, EdgeOptions};

    fn node(name: &str) -> Child {
        Child::Node(Node::new(Id::new(name), name, Category::General))
    }

    fn sample() -> Diagram {
        let inner = Group::new(Id::cluster(2), "inner", vec![node("c")]);
        let outer = Group::new(Id::cluster(1), "outer", vec![node("b"), Child::Group(inner)]);
        let empty = Group::new(Id::cluster(3), "empty", vec![]);
        let root = Group::new(
            Id::cluster(0),
            "root",
            vec![node("a"), Child::Group(outer), Child::Group(empty), node("d")],
        );
        let edges = vec![Edge::new(Id::new("a"), Id::new("c"), EdgeOptions::new())];
        Diagram::new("root", root, edges)
    }

    #[test]
    fn test_nodes_depth_first() {
        let diagram = sample();
        let ids: Vec<String> = diagram.nodes().map(|n| n.id().to_string()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_groups_depth_first() {
        let diagram = sample();
        let labels: Vec<&str> = diagram.groups().map(Group::label).collect();
        assert_eq!(labels, ["outer", "inner", "empty"]);
    }

    #[test]
    fn test_node_lookup() {
        let diagram = sample();
        assert_eq!(diagram.node(Id::new("c")).map(Node::label), Some("c"));
        assert!(!diagram.contains_node(Id::new("zz")));
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_dangling_target() {
        let root = Group::new(Id::cluster(0), "root", vec![node("a")]);
        let edges = vec![Edge::new(Id::new("a"), Id::new("ghost"), EdgeOptions::new())];
        let diagram = Diagram::new("root", root, edges);

        assert_eq!(
            diagram.validate(),
            Err(BuildError::UnknownNode {
                id: Id::new("ghost"),
                role: EndpointRole::Target,
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let group = Group::new(Id::cluster(1), "g", vec![node("a")]);
        let root = Group::new(Id::cluster(0), "root", vec![node("a"), Child::Group(group)]);
        let diagram = Diagram::new("root", root, vec![]);

        assert_eq!(
            diagram.validate(),
            Err(BuildError::DuplicateNode(Id::new("a")))
        );
    }

    #[test]
    fn test_validate_rejects_cluster_node_ids() {
        let empty = Group::new(Id::cluster(1), "empty", vec![]);
        let root = Group::new(
            Id::cluster(0),
            "root",
            vec![node("cluster_1_placeholder"), Child::Group(empty)],
        );
        let diagram = Diagram::new("root", root, vec![]);

        assert_eq!(
            diagram.validate(),
            Err(BuildError::ReservedName(Id::new("cluster_1_placeholder")))
        );
    }

    #[test]
    fn test_empty_group() {
        let diagram = sample();
        let empty = diagram.groups().find(|g| g.label() == "empty").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.nodes().count(), 0);
    }
}
