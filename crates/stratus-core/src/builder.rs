//! Scoped construction of [`Diagram`] values.
//!
//! [`DiagramBuilder`] accumulates nodes into a tree of groups and records
//! edges between nodes that already exist. Groups are opened with
//! [`DiagramBuilder::group`], which runs a closure inside the new scope and
//! closes it afterwards, so scopes always nest like a stack.
//!
//! # Example
//!
//! ```
//! use stratus_core::{
//!     builder::DiagramBuilder,
//!     error::BuildError,
//!     semantic::{Category, EdgeOptions},
//! };
//!
//! # fn main() -> Result<(), BuildError> {
//! let mut builder = DiagramBuilder::new("Web Service");
//! let user = builder.node("User", Category::Actor);
//!
//! let (lb, web) = builder.group("VPC", |vpc| {
//!     let lb = vpc.node("Load Balancer", Category::Network);
//!     let web = vpc.group("Private Subnet", |subnet| {
//!         Ok([
//!             subnet.node("Web A", Category::Compute),
//!             subnet.node("Web B", Category::Compute),
//!         ])
//!     })?;
//!     Ok((lb, web))
//! })?;
//!
//! builder.chain(&[user, lb], EdgeOptions::new())?;
//! builder.fan_out(lb, &web, EdgeOptions::labeled("HTTP"))?;
//!
//! let diagram = builder.build();
//! assert_eq!(diagram.edges().len(), 3);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    error::{BuildError, EndpointRole},
    identifier::Id,
    semantic::{Category, Child, Diagram, Edge, EdgeOptions, Group, Node},
};

/// A group that is still accepting children.
#[derive(Debug)]
struct GroupFrame {
    id: Id,
    label: String,
    children: Vec<Child>,
}

impl GroupFrame {
    fn new(id: Id, label: String) -> Self {
        Self {
            id,
            label,
            children: Vec::new(),
        }
    }

    fn finish(self) -> Group {
        Group::new(self.id, self.label, self.children)
    }
}

/// Builder for an immutable [`Diagram`].
///
/// Nodes are appended to the innermost open group. Edges may be declared at
/// any point, between any two nodes created earlier, regardless of which
/// groups they live in.
#[derive(Debug)]
pub struct DiagramBuilder {
    title: String,
    root: GroupFrame,
    open: Vec<GroupFrame>,
    declared: HashSet<Id>,
    edges: Vec<Edge>,
    next_node: usize,
    next_group: usize,
}

impl DiagramBuilder {
    /// Start a diagram. The root group is labeled with the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            root: GroupFrame::new(Id::cluster(0), title.clone()),
            title,
            open: Vec::new(),
            declared: HashSet::new(),
            edges: Vec::new(),
            next_node: 0,
            next_group: 1,
        }
    }

    /// Number of groups currently open below the root.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Create a node under the current group and return its generated id.
    pub fn node(&mut self, label: impl Into<String>, category: Category) -> Id {
        let id = Id::from_anonymous(self.next_node);
        self.next_node += 1;

        self.insert_node(Node::new(id, label, category));
        id
    }

    /// Create a node with a caller-chosen id under the current group.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ReservedName`] if `name` starts with `__` or
    /// `cluster_`, and [`BuildError::DuplicateNode`] if it is already in use.
    pub fn named_node(
        &mut self,
        name: &str,
        label: impl Into<String>,
        category: Category,
    ) -> Result<Id, BuildError> {
        let id = Id::new(name);
        if id.is_reserved() {
            return Err(BuildError::ReservedName(id));
        }
        if self.declared.contains(&id) {
            return Err(BuildError::DuplicateNode(id));
        }

        self.insert_node(Node::new(id, label, category));
        Ok(id)
    }

    /// Open a nested group, run `build` inside it, then close it.
    ///
    /// The group is closed whether or not `build` succeeds, and it stays in
    /// the tree even when empty.
    pub fn group<T, F>(&mut self, label: impl Into<String>, build: F) -> Result<T, BuildError>
    where
        F: FnOnce(&mut Self) -> Result<T, BuildError>,
    {
        self.open_group(label.into());
        let result = build(self);
        self.close_group();
        result
    }

    /// Declare an unlabeled edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownNode`] if either endpoint was not created.
    pub fn connect(&mut self, source: Id, target: Id) -> Result<(), BuildError> {
        self.connect_with(source, target, EdgeOptions::new())
    }

    /// Declare an edge from `source` to `target` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownNode`] if either endpoint was not created.
    pub fn connect_with(
        &mut self,
        source: Id,
        target: Id,
        options: EdgeOptions,
    ) -> Result<(), BuildError> {
        self.check_endpoint(source, EndpointRole::Source)?;
        self.check_endpoint(target, EndpointRole::Target)?;
        self.push_edge(source, target, options);
        Ok(())
    }

    /// Declare one edge from `source` to each of `targets`.
    ///
    /// Every endpoint is checked before any edge is recorded, so a failing
    /// call leaves the builder unchanged.
    pub fn fan_out(
        &mut self,
        source: Id,
        targets: &[Id],
        options: EdgeOptions,
    ) -> Result<(), BuildError> {
        self.check_endpoint(source, EndpointRole::Source)?;
        for &target in targets {
            self.check_endpoint(target, EndpointRole::Target)?;
        }

        for &target in targets {
            self.push_edge(source, target, options.clone());
        }
        Ok(())
    }

    /// Declare one edge from each of `sources` to `target`.
    ///
    /// Every endpoint is checked before any edge is recorded.
    pub fn fan_in(
        &mut self,
        sources: &[Id],
        target: Id,
        options: EdgeOptions,
    ) -> Result<(), BuildError> {
        for &source in sources {
            self.check_endpoint(source, EndpointRole::Source)?;
        }
        self.check_endpoint(target, EndpointRole::Target)?;

        for &source in sources {
            self.push_edge(source, target, options.clone());
        }
        Ok(())
    }

    /// Declare edges along a path: `path[0] -> path[1] -> ...`.
    ///
    /// Every endpoint is checked before any edge is recorded.
    pub fn chain(&mut self, path: &[Id], options: EdgeOptions) -> Result<(), BuildError> {
        for pair in path.windows(2) {
            self.check_endpoint(pair[0], EndpointRole::Source)?;
            self.check_endpoint(pair[1], EndpointRole::Target)?;
        }

        for pair in path.windows(2) {
            self.push_edge(pair[0], pair[1], options.clone());
        }
        Ok(())
    }

    /// Finish the diagram.
    pub fn build(self) -> Diagram {
        debug!(
            title = self.title,
            nodes = self.declared.len(),
            edges = self.edges.len();
            "Diagram built"
        );
        Diagram::new(self.title, self.root.finish(), self.edges)
    }

    fn current(&mut self) -> &mut GroupFrame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn insert_node(&mut self, node: Node) {
        trace!(id:% = node.id(), category:% = node.category(); "Node created");
        self.declared.insert(node.id());
        self.current().children.push(Child::Node(node));
    }

    fn open_group(&mut self, label: String) {
        let id = Id::cluster(self.next_group);
        self.next_group += 1;
        debug!(id:% = id, label, depth = self.open.len() + 1; "Opening group");
        self.open.push(GroupFrame::new(id, label));
    }

    fn close_group(&mut self) {
        if let Some(frame) = self.open.pop() {
            debug!(id:% = frame.id, children = frame.children.len(); "Closing group");
            let group = frame.finish();
            self.current().children.push(Child::Group(group));
        }
    }

    fn check_endpoint(&self, id: Id, role: EndpointRole) -> Result<(), BuildError> {
        if self.declared.contains(&id) {
            Ok(())
        } else {
            Err(BuildError::UnknownNode { id, role })
        }
    }

    fn push_edge(&mut self, source: Id, target: Id, options: EdgeOptions) {
        let edge = Edge::new(source, target, options);
        trace!(edge:% = edge; "Edge declared");
        self.edges.push(edge);
    }
}
