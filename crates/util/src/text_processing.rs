//! # Text Processing Utilities
//!
//! Cleanup of free-text form fields plus the string encodings the exports
//! need: quoted CSV cells and `encodeURIComponent`-compatible URI components
//! for `mailto:` links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Literal written for absent values in CSV cells.
pub const CSV_NULL: &str = "null";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trims a free-text field. Internal whitespace is kept as typed.
///
/// Returns `None` when nothing but whitespace was typed, which is how
/// optional fields are recorded as absent.
///
/// # Example
/// ```rust
/// use roster_util::text_processing::clean_text_field;
///
/// assert_eq!(clean_text_field("  Ana   Silva "), Some("Ana   Silva".to_string()));
/// assert_eq!(clean_text_field(" \t "), None);
/// ```
pub fn clean_text_field(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Wraps a value in double quotes, doubling any embedded quote.
pub fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quoted cell for an optional value; absent values become `"null"`.
pub fn csv_optional_cell(value: Option<&str>) -> String {
    csv_cell(value.unwrap_or(CSV_NULL))
}

/// Joins already-rendered cells with commas.
pub fn csv_line<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells.into_iter().map(|cell| cell.as_ref().to_string()).collect::<Vec<_>>().join(",")
}

/// Percent-encodes text the way `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds a `mailto:` link with an encoded subject and body.
pub fn mailto_uri(recipient: Option<&str>, subject: &str, body: &str) -> String {
    let recipient = recipient.map(str::trim).unwrap_or_default();
    format!(
        "mailto:{}?subject={}&body={}",
        encode_uri_component(recipient).replace("%40", "@"),
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}
