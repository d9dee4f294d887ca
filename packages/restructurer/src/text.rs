//! Text normalization helpers shared by the splitter.

/// Collapse every run of whitespace (including line breaks) to a single
/// space and trim both ends.
///
/// # Examples
/// ```
/// use yogakb_restructurer::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Sit\n\ttall.  "), "Sit tall.");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check whether `text` contains any of `needles`, ignoring case.
pub fn contains_any_ignore_case(text: &str, needles: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}
