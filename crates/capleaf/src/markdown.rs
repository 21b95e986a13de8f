//! Updating the capability list inside a Markdown document.
//!
//! Two layouts are recognised, tried in order:
//!
//! 1. An explicit marker block, `<!--capabilities:start-->` ...
//!    `<!--capabilities:end-->`, which is replaced wholesale.
//! 2. A `## Valid Capabilities` section, whose bullet list is replaced. An
//!    `Examples may include ...` line inside the section is kept and the list
//!    goes after it.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use crate::fs::{WriteError, atomic_write};

const START_MARKER: &str = "<!--capabilities:start-->";
const END_MARKER: &str = "<!--capabilities:end-->";
const GENERATED_NOTICE: &str = "<!-- This section is autogenerated. Do not edit directly. -->";
const EXAMPLES_PHRASE: &str = "Examples may include";

/// Errors raised while updating a Markdown document.
#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("Error reading Markdown {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not find \"## Valid Capabilities\" heading in {}", path.display())]
    SectionNotFound { path: PathBuf },

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Which layout an update used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownUpdate {
    /// Content between the capability markers was replaced.
    Markers,
    /// The bullet list under `## Valid Capabilities` was replaced.
    Section,
}

impl fmt::Display for MarkdownUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markers => write!(f, "Updated Markdown between capability markers"),
            Self::Section => write!(f, "Updated Markdown \"Valid Capabilities\" bullet list"),
        }
    }
}

/// Rewrite the capability list of the Markdown file at `path` in place.
///
/// # Errors
///
/// Returns [`MarkdownError`] if the file cannot be read, has neither markers
/// nor a `## Valid Capabilities` heading, or cannot be written back.
pub fn update_file<S: AsRef<str>>(
    path: impl AsRef<Path>,
    labels: &[S],
) -> Result<MarkdownUpdate, MarkdownError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MarkdownError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (updated, kind) = splice(&text, labels).ok_or_else(|| MarkdownError::SectionNotFound {
        path: path.to_path_buf(),
    })?;
    atomic_write(path, updated.as_bytes())?;

    info!(path = path.display().to_string(), kind:? = kind; "Markdown updated");
    Ok(kind)
}

/// Replace the capability list in `text`.
///
/// Returns `None` when the document has neither markers nor a
/// `## Valid Capabilities` heading.
///
/// # Examples
///
/// ```
/// use capleaf::markdown::{MarkdownUpdate, splice};
///
/// let doc = "# Rules\n\n## Valid Capabilities\n\n- Old\n\n## Next\n";
/// let (updated, kind) = splice(doc, &["Alpha", "Beta"]).expect("section present");
/// assert_eq!(kind, MarkdownUpdate::Section);
/// assert_eq!(updated, "# Rules\n\n## Valid Capabilities\n- Alpha\n- Beta\n\n## Next\n");
/// ```
pub fn splice<S: AsRef<str>>(text: &str, labels: &[S]) -> Option<(String, MarkdownUpdate)> {
    let list = bullet_list(labels);

    if let Some(updated) = splice_markers(text, &list) {
        debug!("Replacing capability marker block");
        return Some((updated, MarkdownUpdate::Markers));
    }

    splice_section(text, &list).map(|updated| (updated, MarkdownUpdate::Section))
}

fn bullet_list<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| format!("- {}", label.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn splice_markers(text: &str, list: &str) -> Option<String> {
    let start = text.find(START_MARKER)?;
    let end = start + text[start..].find(END_MARKER)? + END_MARKER.len();
    let block = [START_MARKER, GENERATED_NOTICE, list, END_MARKER].join("\n");
    Some(format!("{}{block}{}", &text[..start], &text[end..]))
}

/// A line of the document with its byte offsets.
struct Line<'a> {
    /// Offset of the first byte of the line.
    start: usize,
    /// Offset just past the line terminator.
    next: usize,
    text: &'a str,
}

fn lines_with_offsets(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0;
    text.split_inclusive('\n').map(move |raw| {
        let line = Line {
            start,
            next: start + raw.len(),
            text: raw.trim_end_matches(['\n', '\r']),
        };
        start = line.next;
        line
    })
}

fn is_valid_capabilities_heading(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("##") else {
        return false;
    };
    rest.starts_with(char::is_whitespace)
        && rest.split_whitespace().eq(["Valid", "Capabilities"])
}

fn is_h2(line: &str) -> bool {
    line.trim_start()
        .strip_prefix("##")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn splice_section(text: &str, list: &str) -> Option<String> {
    let mut lines = lines_with_offsets(text);
    let heading = lines.find(|line| is_valid_capabilities_heading(line.text))?;
    let heading_end = heading.start + heading.text.len();

    let body: Vec<Line<'_>> = lines.take_while(|line| !is_h2(line.text)).collect();
    let body_end = body.last().map_or(heading.next, |line| line.next);

    let list_start = body
        .iter()
        .find(|line| line.text.contains(EXAMPLES_PHRASE))
        .map_or(heading_end, |line| line.next);

    let preface = text[heading_end..list_start].trim_end();
    Some(format!(
        "{}{preface}\n{list}\n\n{}",
        &text[..heading_end],
        &text[body_end..]
    ))
}
