//! Scanner from diagrams.net XML to a [`CapabilityGraph`].
//!
//! The document is parsed into an element tree once, then every `object`
//! element at any depth is inspected. Only Business Capability fact sheets
//! survive; all other objects are invisible, including as parents.

use log::{debug, trace, warn};
use roxmltree::{Document, Node, ParsingOptions};

use capleaf_core::{CapabilityGraph, CapabilityNode};

use crate::{ScanConfig, error::ParseError};

const OBJECT_TAG: &str = "object";
const CELL_TAG: &str = "mxCell";
const DIAGRAM_TAG: &str = "diagram";

const TYPE_ATTR: &str = "type";
const FACT_SHEET_TYPE_ATTR: &str = "factSheetType";
const ID_ATTR: &str = "id";
const LABEL_ATTR: &str = "label";
const PARENT_ATTR: &str = "parent";

/// Parse diagram source and collect its Business Capabilities.
pub(crate) fn build_graph(source: &str, config: &ScanConfig) -> Result<CapabilityGraph, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)
        .map_err(|err| ParseError::from_xml(&err, source))?;
    trace!(root:? = document.root_element().tag_name(); "Document parsed");

    warn_compressed_pages(&document);

    let mut graph = CapabilityGraph::new();
    let mut objects = 0usize;
    for element in document.descendants().filter(|n| n.has_tag_name(OBJECT_TAG)) {
        objects += 1;
        if !is_capability(&element, config) {
            continue;
        }
        if let Some(node) = capability_node(&element) {
            graph.insert(node);
        }
    }

    debug!(objects = objects, capabilities = graph.len(); "Diagram scanned");
    Ok(graph)
}

fn is_capability(element: &Node<'_, '_>, config: &ScanConfig) -> bool {
    element.attribute(TYPE_ATTR) == Some(config.object_type())
        && element.attribute(FACT_SHEET_TYPE_ATTR) == Some(config.fact_sheet_type())
}

/// Build a node from a capability element; `None` when it has no usable id.
fn capability_node(element: &Node<'_, '_>) -> Option<CapabilityNode> {
    let Some(id) = element.attribute(ID_ATTR).filter(|id| !id.is_empty()) else {
        debug!(offset = element.range().start; "Skipping capability object without an id");
        return None;
    };

    let label = element.attribute(LABEL_ATTR).unwrap_or_default();
    let parent = element
        .children()
        .find(|child| child.has_tag_name(CELL_TAG))
        .and_then(|cell| cell.attribute(PARENT_ATTR));

    Some(CapabilityNode::new(id, label, parent))
}

/// Compressed pages hold their cells as encoded text, so they contribute no
/// objects to the scan.
fn warn_compressed_pages(document: &Document<'_>) {
    for page in document.descendants().filter(|n| n.has_tag_name(DIAGRAM_TAG)) {
        let has_elements = page.children().any(|child| child.is_element());
        let has_payload = page.text().is_some_and(|text| !text.trim().is_empty());
        if !has_elements && has_payload {
            warn!(
                page = page.attribute("name").unwrap_or_default();
                "Diagram page is compressed and will be ignored; export uncompressed XML"
            );
        }
    }
}
