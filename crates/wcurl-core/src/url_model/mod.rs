//! URL normalization and output filename derivation.
//!
//! URLs are kept as opaque text: the only transformation applied on ingestion
//! is encoding literal spaces. Default output names come from the last path
//! segment, percent-decoded unless the user asked to keep the encoded form.

mod path;
mod percent;

pub use path::get_url_filename;
pub use percent::percent_decode;

/// Output name used when a URL has no path segment to derive one from.
pub const DEFAULT_FILENAME: &str = "index.html";

/// Percent-encodes every literal space so curl receives a well-formed URL.
pub fn normalize_url(url: &str) -> String {
    url.replace(' ', "%20")
}

/// Derives the local filename for `url`, falling back to [`DEFAULT_FILENAME`].
///
/// # Examples
///
/// - `derive_output_name("https://example.com/a/report%20v2.pdf", true)` → `"report v2.pdf"`
/// - `derive_output_name("https://example.com/a/report%20v2.pdf", false)` → `"report%20v2.pdf"`
/// - `derive_output_name("https://example.com", true)` → `"index.html"`
pub fn derive_output_name(url: &str, decode: bool) -> String {
    let name = get_url_filename(url, decode);
    if name.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}
