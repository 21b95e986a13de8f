//! Leaf capability extraction.

use std::{fs, path::Path};

use log::{debug, info, trace};

use capleaf_core::CapabilityGraph;

use crate::{CapleafError, config::ExtractConfig};

/// Origin name used for sources that did not come from a file.
const INLINE_ORIGIN: &str = "<input>";

/// Extracts leaf Business Capability labels from diagram exports.
///
/// # Examples
///
/// ```
/// use capleaf::{Extractor, config::ExtractConfig};
///
/// let source = r#"<mxfile><diagram><mxGraphModel><root>
///     <object type="factSheet" factSheetType="BusinessCapability" id="a" label="beta"/>
///     <object type="factSheet" factSheetType="BusinessCapability" id="b" label="Alpha"/>
/// </root></mxGraphModel></diagram></mxfile>"#;
///
/// let sorted = Extractor::default().extract_str(source).expect("valid diagram");
/// assert_eq!(sorted, vec!["Alpha", "beta"]);
///
/// let unsorted = Extractor::new(ExtractConfig::new(false))
///     .extract_str(source)
///     .expect("valid diagram");
/// assert_eq!(unsorted, vec!["beta", "Alpha"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Read the diagram at `path` and return its leaf labels.
    ///
    /// # Errors
    ///
    /// Returns [`CapleafError::Read`] if the file cannot be read as UTF-8 and
    /// [`CapleafError::Parse`] if it is not well-formed XML.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<Vec<String>, CapleafError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading diagram");

        let source = fs::read_to_string(path).map_err(|source| CapleafError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.extract_from(&source, &path.display().to_string())
    }

    /// Return the leaf labels of diagram `source` text.
    ///
    /// # Errors
    ///
    /// Returns [`CapleafError::Parse`] if the source is not well-formed XML.
    pub fn extract_str(&self, source: &str) -> Result<Vec<String>, CapleafError> {
        self.extract_from(source, INLINE_ORIGIN)
    }

    /// Parse `source` into a capability graph without computing labels.
    ///
    /// # Errors
    ///
    /// Returns [`CapleafError::Parse`] if the source is not well-formed XML.
    pub fn graph(&self, source: &str) -> Result<CapabilityGraph, CapleafError> {
        self.graph_from(source, INLINE_ORIGIN)
    }

    fn graph_from(&self, source: &str, origin: &str) -> Result<CapabilityGraph, CapleafError> {
        let graph = capleaf_parser::parse(source, &self.config.scan_config())
            .map_err(|err| CapleafError::new_parse_error(err, source, origin))?;
        trace!(graph:? = graph; "Capability graph");
        Ok(graph)
    }

    fn extract_from(&self, source: &str, origin: &str) -> Result<Vec<String>, CapleafError> {
        let graph = self.graph_from(source, origin)?;
        let labels = graph.leaf_labels(self.config.sort());
        debug!(origin = origin, capabilities = graph.len(), leaves = labels.len(); "Extraction finished");
        Ok(labels)
    }
}
