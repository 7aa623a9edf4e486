//! Semantic diagram model types.
//!
//! This module contains the description of an architecture diagram as it is
//! handed to a renderer: what exists, how it is grouped, and how it is
//! connected. Positions, sizes and colors are left to the renderer.
//!
//! # Pipeline Position
//!
//! ```text
//! DiagramBuilder (declarations)
//!     ↓ build
//! Semantic Model (these types) - tree of groups, validated edges
//!     ↓ export
//! DOT graph
//!     ↓ render
//! Image artifact
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - Containers: [`Diagram`], [`Group`], [`Child`]
//! - [`element`] - Leaves and connections: [`Node`], [`Category`], [`Edge`], [`EdgeOptions`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
