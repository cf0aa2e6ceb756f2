//! Filename extraction from the URL path.

use super::percent::percent_decode;

/// Extracts the last path segment of `url` for use as a local filename.
///
/// A leading `scheme://` and anything from the first `?` onwards are removed
/// first. If no `/` remains there is no path and the result is empty; callers
/// substitute a fallback name in that case.
pub fn get_url_filename(url: &str, decode: bool) -> String {
    let rest = strip_scheme(url);
    let host_and_path = match rest.find('?') {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    match host_and_path.rfind('/') {
        Some(idx) => percent_decode(&host_and_path[idx + 1..], decode),
        None => String::new(),
    }
}

/// Drops everything up to and including the first `//` when no `/` precedes it.
fn strip_scheme(url: &str) -> &str {
    match url.find('/') {
        Some(idx) if url[idx + 1..].starts_with('/') => &url[idx + 2..],
        _ => url,
    }
}
