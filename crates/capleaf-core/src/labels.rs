//! Label list utilities: deduplication and case-insensitive ordering.

use std::{cmp::Ordering, collections::HashSet};

/// Collects labels in order, dropping empty strings and exact repeats.
///
/// Comparison is case-sensitive: `"Data"` and `"data"` are both kept.
///
/// # Examples
///
/// ```
/// use capleaf_core::labels::unique_non_empty;
///
/// let labels = unique_non_empty(["B", "", "A", "B", "a"]);
/// assert_eq!(labels, vec!["B", "A", "a"]);
/// ```
pub fn unique_non_empty<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter(|label| !label.is_empty())
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}

/// Compares two labels ignoring case, using Unicode lowercase mapping.
pub fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sorts labels case-insensitively.
///
/// The sort is stable: labels that compare equal ignoring case keep their
/// relative order.
///
/// # Examples
///
/// ```
/// use capleaf_core::labels::sort_case_insensitive;
///
/// let mut labels = vec!["beta".to_string(), "Alpha".to_string()];
/// sort_case_insensitive(&mut labels);
/// assert_eq!(labels, vec!["Alpha", "beta"]);
/// ```
pub fn sort_case_insensitive(labels: &mut [String]) {
    labels.sort_by(|a, b| cmp_case_insensitive(a, b));
}
