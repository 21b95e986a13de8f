//! Configuration types for capability extraction and emission.
//!
//! All types implement [`serde::Deserialize`] for flexible loading from
//! external sources. Every field has a default, so an empty document is a
//! valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining extraction and emission settings.
//! - [`ExtractConfig`] - Which diagram objects count as capabilities and how labels are ordered.
//! - [`EmitConfig`] - Shape of the generated module.
//!
//! # Example
//!
//! ```
//! # use capleaf::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.extract().sort());
//! assert_eq!(config.emit().const_name(), "CAPABILITIES");
//! ```

use serde::Deserialize;

use capleaf_parser::{DEFAULT_FACT_SHEET_TYPE, DEFAULT_OBJECT_TYPE, ScanConfig};

/// Default name of the emitted array constant.
pub const DEFAULT_CONST_NAME: &str = "CAPABILITIES";

/// Top-level application configuration.
///
/// Groups [`ExtractConfig`] and [`EmitConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction configuration section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Emission configuration section.
    #[serde(default)]
    emit: EmitConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(extract: ExtractConfig, emit: EmitConfig) -> Self {
        Self { extract, emit }
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the emission configuration.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }

    /// Overrides the sort toggle, keeping every other setting.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.extract.sort = sort;
        self
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Sort labels case-insensitively instead of keeping document order.
    sort: bool,

    /// Required `type` attribute of capability objects.
    object_type: String,

    /// Required `factSheetType` attribute of capability objects.
    fact_sheet_type: String,
}

impl ExtractConfig {
    /// Creates an extraction configuration with default object selectors.
    pub fn new(sort: bool) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Whether labels are sorted.
    pub fn sort(&self) -> bool {
        self.sort
    }

    /// Selector for capability objects.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new(&self.object_type, &self.fact_sheet_type)
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            sort: true,
            object_type: DEFAULT_OBJECT_TYPE.to_string(),
            fact_sheet_type: DEFAULT_FACT_SHEET_TYPE.to_string(),
        }
    }
}

/// Emission settings for the generated module.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Name of the exported array constant.
    const_name: String,

    /// Optional doc comment placed above the constant, one line per line.
    header: Option<String>,
}

impl EmitConfig {
    /// Creates an emission configuration.
    ///
    /// # Arguments
    ///
    /// * `const_name` - Identifier of the array constant
    /// * `header` - Optional comment text rendered above the constant
    pub fn new(const_name: impl Into<String>, header: Option<String>) -> Self {
        Self {
            const_name: const_name.into(),
            header,
        }
    }

    /// Returns the constant name.
    pub fn const_name(&self) -> &str {
        &self.const_name
    }

    /// Returns the header comment text, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Checks that the constant name is a valid identifier.
    ///
    /// # Errors
    ///
    /// Returns a message describing the invalid name.
    pub fn validate(&self) -> Result<(), String> {
        let mut chars = self.const_name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

        if valid {
            Ok(())
        } else {
            Err(format!(
                "Invalid constant name in config: {:?} is not an identifier",
                self.const_name
            ))
        }
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONST_NAME, None)
    }
}
