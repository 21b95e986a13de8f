//! Capleaf Parser
//!
//! Turns a diagrams.net (draw.io) XML export into a
//! [`CapabilityGraph`](capleaf_core::CapabilityGraph).
//!
//! # Overview
//!
//! Parsing happens in two steps:
//!
//! 1. **Document** - the XML text is read into an element tree. Any
//!    well-formedness problem stops here with a [`ParseError`](error::ParseError).
//! 2. **Scan** - every `object` element whose `type` and `factSheetType`
//!    attributes match the [`ScanConfig`] becomes a
//!    [`CapabilityNode`](capleaf_core::CapabilityNode). Objects without an id
//!    are skipped; duplicate ids keep the last definition.
//!
//! # Example
//!
//! ```
//! use capleaf_parser::{ScanConfig, parse};
//!
//! let source = r#"<mxfile><diagram><mxGraphModel><root>
//!     <object type="factSheet" factSheetType="BusinessCapability" id="c" label="Clinical">
//!         <mxCell parent="1"/>
//!     </object>
//!     <object type="factSheet" factSheetType="BusinessCapability" id="s" label="Scientific">
//!         <mxCell parent="c"/>
//!     </object>
//! </root></mxGraphModel></diagram></mxfile>"#;
//!
//! let graph = parse(source, &ScanConfig::default()).expect("valid diagram");
//! assert_eq!(graph.leaf_labels(true), vec!["Scientific"]);
//! ```

pub mod error;

mod parser;
mod span;


pub use span::Span;

use capleaf_core::CapabilityGraph;

/// Default value of the `type` attribute marking fact sheets.
pub const DEFAULT_OBJECT_TYPE: &str = "factSheet";

/// Default value of the `factSheetType` attribute marking Business Capabilities.
pub const DEFAULT_FACT_SHEET_TYPE: &str = "BusinessCapability";

/// Selects which diagram objects count as capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    object_type: String,
    fact_sheet_type: String,
}

impl ScanConfig {
    /// Creates a scan configuration.
    ///
    /// # Arguments
    ///
    /// * `object_type` - Required value of the `type` attribute
    /// * `fact_sheet_type` - Required value of the `factSheetType` attribute
    pub fn new(object_type: impl Into<String>, fact_sheet_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            fact_sheet_type: fact_sheet_type.into(),
        }
    }

    /// Returns the required `type` attribute value.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Returns the required `factSheetType` attribute value.
    pub fn fact_sheet_type(&self) -> &str {
        &self.fact_sheet_type
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECT_TYPE, DEFAULT_FACT_SHEET_TYPE)
    }
}

/// Parse diagram source into a capability graph.
///
/// # Errors
///
/// Returns [`error::ParseError`] if the source is not well-formed XML. Data
/// problems in individual objects are never errors.
pub fn parse(source: &str, config: &ScanConfig) -> Result<CapabilityGraph, error::ParseError> {
    parser::build_graph(source, config)
}
