//! Capleaf Core Types and Leaf Computation
//!
//! This crate provides the foundational types for capleaf. It includes:
//!
//! - **Nodes**: Business Capability diagram objects ([`node::CapabilityNode`])
//! - **Graph**: The insertion-ordered id -> node store and leaf computation
//!   ([`graph::CapabilityGraph`])
//! - **Labels**: Deduplication and case-insensitive ordering of leaf labels
//!   ([`labels`] module)

pub mod graph;
pub mod labels;
pub mod node;

pub use graph::CapabilityGraph;
pub use node::CapabilityNode;
