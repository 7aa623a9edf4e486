//! Errors raised while building a diagram.

use std::fmt;

use thiserror::Error;

use crate::identifier::Id;

/// Which end of an edge an identifier was used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Source,
    Target,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// A structural error in a diagram declaration.
///
/// Both variants are detected at declaration time, before anything is
/// handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An edge names a node that has not been created.
    #[error("edge {role} `{id}` does not refer to a declared node")]
    UnknownNode { id: Id, role: EndpointRole },

    /// A named node was declared twice.
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(Id),

    /// A node name falls in a namespace the builder or the DOT export
    /// generates identifiers from.
    #[error("node name `{0}` uses a reserved prefix")]
    ReservedName(Id),
}

impl BuildError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => "stratus::reference",
            Self::DuplicateNode(_) => "stratus::duplicate",
            Self::ReservedName(_) => "stratus::reserved",
        }
    }

    /// Suggested fix, for diagnostic output.
    pub fn help(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => "create the node before declaring edges that use it",
            Self::DuplicateNode(_) => "give each named node a unique name",
            Self::ReservedName(_) => "names starting with `__` or `cluster_` are generated internally",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_message() {
        let err = BuildError::UnknownNode {
            id: Id::new("nat_b"),
            role: EndpointRole::Target,
        };
        assert_eq!(
            err.to_string(),
            "edge target `nat_b` does not refer to a declared node"
        );
        assert_eq!(err.code(), "stratus::reference");
    }

    #[test]
    fn test_duplicate_node_message() {
        let err = BuildError::DuplicateNode(Id::new("alb"));
        assert_eq!(err.to_string(), "node `alb` is declared more than once");
        assert_eq!(err.code(), "stratus::duplicate");
    }

    #[test]
    fn test_reserved_name_message() {
        let err = BuildError::ReservedName(Id::new("cluster_1_placeholder"));
        assert_eq!(
            err.to_string(),
            "node name `cluster_1_placeholder` uses a reserved prefix"
        );
        assert_eq!(err.code(), "stratus::reserved");
    }
}
