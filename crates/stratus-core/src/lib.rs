//! Stratus Core Types and Definitions
//!
//! This crate provides the foundational types for Stratus architecture
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: The diagram model: nodes, groups and edges ([`semantic`] module)
//! - **Builder**: Scoped construction of diagrams ([`builder::DiagramBuilder`])
//! - **Errors**: Conditions raised while building ([`error::BuildError`])

pub mod builder;
pub mod color;
pub mod error;
pub mod identifier;
pub mod semantic;
