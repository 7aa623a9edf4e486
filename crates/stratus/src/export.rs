//! Conversion of diagrams into renderer input formats.

#[cfg(feature = "graphviz")]
pub mod dot;
