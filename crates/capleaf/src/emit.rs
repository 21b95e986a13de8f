//! Rendering of label lists into a JavaScript/TypeScript data module.
//!
//! The generated module declares one array constant and exports it as the
//! default export:
//!
//! ```text
//! const CAPABILITIES = [
//!   "Label One",
//!   "Label Two"
//! ];
//!
//! export default CAPABILITIES;
//! ```
//!
//! Labels are written as JSON string literals, which are valid JavaScript
//! string literals, so quotes, backslashes and non-ASCII text round-trip
//! exactly.

use std::path::Path;

use log::{debug, info};

use crate::{
    CapleafError,
    config::EmitConfig,
    fs::{WriteError, atomic_write},
};

/// Renders and writes capability modules.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: EmitConfig,
}

impl Emitter {
    /// Create an emitter for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CapleafError::Config`] if the constant name is not a valid
    /// identifier.
    pub fn new(config: EmitConfig) -> Result<Self, CapleafError> {
        config.validate().map_err(CapleafError::Config)?;
        Ok(Self { config })
    }

    /// Render the module text for `labels`.
    pub fn render<S: AsRef<str>>(&self, labels: &[S]) -> String {
        let name = self.config.const_name();
        let entries = labels
            .iter()
            .map(|label| format!("  {}", string_literal(label.as_ref())))
            .collect::<Vec<_>>()
            .join(",\n");

        let mut module = String::new();
        if let Some(header) = self.config.header() {
            module.push_str(&doc_comment(header));
        }
        module.push_str(&format!(
            "const {name} = [\n{entries}\n];\n\nexport default {name};\n"
        ));
        module
    }

    /// Render `labels` and atomically write the module to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] if the destination directory cannot be created
    /// or the file cannot be written or replaced. The destination keeps its
    /// previous contents on failure.
    pub fn emit<S: AsRef<str>>(
        &self,
        labels: &[S],
        destination: impl AsRef<Path>,
    ) -> Result<(), WriteError> {
        let destination = destination.as_ref();
        let module = self.render(labels);
        debug!(bytes = module.len(); "Module rendered");

        atomic_write(destination, module.as_bytes())?;

        info!(
            path = destination.display().to_string(),
            count = labels.len();
            "Capability module written"
        );
        Ok(())
    }
}

/// Encode a label as a double-quoted string literal.
fn string_literal(label: &str) -> String {
    serde_json::to_string(label).expect("Serializing a str is infallible")
}

fn doc_comment(header: &str) -> String {
    let mut comment = String::from("/**\n");
    for line in header.lines() {
        let line = line.replace("*/", "*\\/");
        if line.trim().is_empty() {
            comment.push_str(" *\n");
        } else {
            comment.push_str(&format!(" * {}\n", line.trim_end()));
        }
    }
    comment.push_str(" */\n");
    comment
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Pull the string literals back out of a rendered module.
    fn parse_entries(module: &str) -> Vec<String> {
        module
            .lines()
            .filter(|line| line.starts_with("  "))
            .map(|line| line.trim().trim_end_matches(','))
            .map(|literal| serde_json::from_str(literal).expect("entry is a string literal"))
            .collect()
    }

    #[test]
    fn test_render_exact_shape() {
        let module = Emitter::default().render(&["Label One", "Label Two"]);
        assert_eq!(
            module,
            "const CAPABILITIES = [\n  \"Label One\",\n  \"Label Two\"\n];\n\nexport default CAPABILITIES;\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        let module = Emitter::default().render::<&str>(&[]);
        assert_eq!(module, "const CAPABILITIES = [\n\n];\n\nexport default CAPABILITIES;\n");
    }

    #[test]
    fn test_render_escapes_round_trip() {
        let labels = [
            r#"Say "hello""#.to_string(),
            r"C:\path\to".to_string(),
            "Gestion des données – Übersicht 数据".to_string(),
            "tab\there".to_string(),
            "bell\u{7} and line\u{2028}separator".to_string(),
        ];
        let module = Emitter::default().render(&labels);
        assert_eq!(parse_entries(&module), labels);
    }

    #[test]
    fn test_render_with_header_and_name() {
        let header = "Generated file.\n\nDo not edit */".to_string();
        let config = EmitConfig::new("BUSINESS_CAPABILITIES", Some(header));
        let module = Emitter::new(config).expect("valid config").render(&["A"]);
        assert_eq!(
            module,
            "/**\n * Generated file.\n *\n * Do not edit *\\/\n */\nconst BUSINESS_CAPABILITIES = [\n  \"A\"\n];\n\nexport default BUSINESS_CAPABILITIES;\n"
        );
    }

    #[test]
    fn test_invalid_const_name_is_config_error() {
        let err = Emitter::new(EmitConfig::new("not valid", None)).expect_err("invalid name");
        assert!(matches!(err, CapleafError::Config(_)));
    }

    #[test]
    fn test_emit_writes_module() {
        let dir = tempdir().expect("Failed to create temp directory");
        let out = dir.path().join("generated").join("capabilities.ts");

        Emitter::default().emit(&["Alpha", "beta"], &out).expect("emit succeeds");

        let written = fs::read_to_string(&out).expect("module written");
        assert_eq!(parse_entries(&written), vec!["Alpha", "beta"]);
        assert!(written.ends_with("export default CAPABILITIES;\n"));
    }

    #[test]
    fn test_emit_failure_leaves_previous_module() {
        let dir = tempdir().expect("Failed to create temp directory");
        let out = dir.path().join("capabilities.ts");
        Emitter::default().emit(&["Old"], &out).expect("first emit succeeds");

        let blocked = dir.path().join("capabilities.ts").join("nested.ts");
        let err = Emitter::default().emit(&["New"], &blocked).expect_err("parent is a file");

        assert!(matches!(err, WriteError::CreateDir { .. }));
        assert_eq!(parse_entries(&fs::read_to_string(&out).expect("readable")), vec!["Old"]);
    }
}
