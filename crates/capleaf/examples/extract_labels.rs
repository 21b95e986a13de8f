//! Example: Building a capability graph by hand
//!
//! This example shows the leaf computation on a graph built directly from
//! `CapabilityNode` values, then renders the resulting labels as a module
//! without touching the filesystem.

use capleaf::{CapabilityGraph, CapabilityNode, Emitter, config::EmitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building capability graph...\n");

    let graph: CapabilityGraph = [
        CapabilityNode::new("clinical", "Clinical", Some("1")),
        CapabilityNode::new("research", "Research", Some("clinical")),
        CapabilityNode::new("trials", "Trial Management", Some("research")),
        CapabilityNode::new("safety", "Drug Safety", Some("clinical")),
        CapabilityNode::new("finance", "finance operations", None::<String>),
    ]
    .into_iter()
    .collect();

    println!("Capabilities: {}", graph.len());
    for node in graph.nodes() {
        println!("  {node}");
    }

    let labels = graph.leaf_labels(true);
    println!("\nLeaf labels:");
    for label in &labels {
        println!("  {label}");
    }

    let emitter = Emitter::new(EmitConfig::new(
        "BUSINESS_CAPABILITIES",
        Some("Leaf Business Capabilities.".to_string()),
    ))?;
    println!("\nGenerated module:\n\n{}", emitter.render(&labels));

    Ok(())
}
