//! Dry-run rendering helpers.

use std::borrow::Cow;

/// Bytes that never need quoting in a POSIX shell word.
fn is_shell_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"_@%+=:,./-".contains(&b)
}

/// Quotes `arg` for a POSIX shell if it contains anything unsafe.
pub(super) fn shell_quote(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && arg.bytes().all(is_shell_safe) {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
    }
}
