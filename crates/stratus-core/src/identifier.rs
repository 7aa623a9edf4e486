//! Interned identifiers for diagram nodes and groups.
//!
//! Every node and group in a [`Diagram`](crate::semantic::Diagram) is keyed
//! by an [`Id`]. Identifiers are small `Copy` handles into a process-wide
//! string interner, so they can be passed around freely and compared in
//! constant time.

use std::{
    fmt,
    str::FromStr,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Process-wide interner backing every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Runs `f` with exclusive access to the interner.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        // A poisoned interner still holds valid symbols.
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut interner)
}

/// Identifier of a node or group.
///
/// # Examples
///
/// ```
/// use stratus_core::identifier::Id;
///
/// let igw = Id::new("igw");
/// assert_eq!(igw, "igw");
///
/// // Builder-generated identifiers for unnamed nodes
/// let anon = Id::from_anonymous(3);
/// assert_eq!(anon, "__3");
///
/// // Graphviz cluster identifiers
/// let cluster = Id::cluster(0);
/// assert_eq!(cluster, "cluster_0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its textual name.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Creates the identifier used for the `idx`-th unnamed node of a builder.
    pub fn from_anonymous(idx: usize) -> Self {
        Self::new(&format!("__{idx}"))
    }

    /// Creates the identifier used for the `idx`-th group of a builder.
    ///
    /// The `cluster_` prefix is what makes Graphviz draw a subgraph as a box.
    pub fn cluster(idx: usize) -> Self {
        Self::new(&format!("cluster_{idx}"))
    }

    /// Returns `true` for names in the namespaces the builder and the DOT
    /// export mint identifiers from (`__N`, `cluster_N` and derivatives).
    ///
    /// ```
    /// use stratus_core::identifier::Id;
    ///
    /// assert!(Id::from_anonymous(4).is_reserved());
    /// assert!(Id::new("cluster_1_placeholder").is_reserved());
    /// assert!(!Id::new("nat_a").is_reserved());
    /// ```
    pub fn is_reserved(&self) -> bool {
        self.is_cluster() || self.with_str(|s| s.starts_with("__"))
    }

    /// Returns `true` for names in the `cluster_` namespace, which DOT
    /// export uses for groups and their placeholder nodes.
    pub fn is_cluster(&self) -> bool {
        self.with_str(|s| s.starts_with("cluster_"))
    }

    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        with_interner(|interner| f(interner.resolve(self.0).unwrap_or_default()))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.with_str(str::to_owned);
        f.write_str(&name)
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.with_str(|s| s == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_new_interns_equal_names() {
        let a = Id::new("alb");
        let b = Id::new("alb");
        let c = Id::new("igw");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "alb");
    }

    #[test]
    fn test_from_anonymous() {
        assert_eq!(Id::from_anonymous(0), Id::from_anonymous(0));
        assert_ne!(Id::from_anonymous(0), Id::from_anonymous(1));
        assert_eq!(Id::from_anonymous(7), "__7");
    }

    #[test]
    fn test_cluster() {
        assert_eq!(Id::cluster(2), "cluster_2");
        assert!(Id::cluster(2).is_reserved());
    }

    #[test]
    fn test_is_reserved() {
        assert!(Id::from_anonymous(12).is_reserved());
        assert!(Id::new("__").is_reserved());
        assert!(Id::new("cluster_3_placeholder").is_reserved());
        assert!(!Id::new("nat_a").is_reserved());
        assert!(!Id::new("my_cluster_1").is_reserved());
        assert!(!Id::new("_private").is_reserved());
    }

    #[test]
    fn test_is_cluster() {
        assert!(Id::cluster(0).is_cluster());
        assert!(Id::new("cluster_0_placeholder").is_cluster());
        assert!(!Id::from_anonymous(0).is_cluster());
    }

    #[test]
    fn test_display() {
        let id = Id::new("rds_master");
        assert_eq!(format!("{id}"), "rds_master");
        assert_eq!(id.to_string(), "rds_master");
    }

    #[test]
    fn test_from_str_and_from() {
        let parsed: Id = "s3".parse().unwrap();
        let converted: Id = "s3".into();
        assert_eq!(parsed, converted);
    }

    #[test]
    fn test_partial_eq_str_ref() {
        let id = Id::new("vpc_endpoint");
        let name = String::from("vpc_endpoint");
        assert!(id == name.as_str());
        assert!(id != "vpc");
    }

    #[test]
    fn test_hash_map_key() {
        let mut map = HashMap::new();
        map.insert(Id::new("ec2_lms_a"), 1);
        map.insert(Id::new("ec2_lms_b"), 2);

        assert_eq!(map.get(&Id::new("ec2_lms_a")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
