//! Capleaf - Leaf Business Capability extraction for draw.io diagrams.
//!
//! Reads a diagrams.net XML export, finds the capability objects that have no
//! capability children, and turns their labels into an ordered, de-duplicated
//! list. The list can be written out as a JavaScript/TypeScript data module or
//! spliced into a Markdown document.
//!
//! # Examples
//!
//! ```rust,no_run
//! use capleaf::{Emitter, Extractor, config::AppConfig};
//!
//! let config = AppConfig::default();
//! let labels = Extractor::new(config.extract().clone())
//!     .extract("capabilities.xml")
//!     .expect("Failed to extract");
//!
//! Emitter::new(config.emit().clone())
//!     .expect("Invalid emit configuration")
//!     .emit(&labels, "src/capabilities.ts")
//!     .expect("Failed to write module");
//! ```

pub mod config;
pub mod markdown;

mod emit;
mod error;
mod extract;
mod fs;

pub use capleaf_core::{CapabilityGraph, CapabilityNode};
pub use capleaf_parser::{ScanConfig, error::ParseError};

pub use emit::Emitter;
pub use error::CapleafError;
pub use extract::Extractor;
pub use fs::{WriteError, atomic_write};
