//! Provider path namespacing and query escaping.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Name of this application's storage sandbox on the provider.
pub const APP_NAME: &str = "Neat Reader";

/// Characters left bare when escaping a query value, matching the
/// unreserved set (alphanumerics plus `-`, `_`, `.`, `~`).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Maps a user-relative path to the provider-absolute, app-scoped path.
///
/// At most one leading `/` is stripped. The empty path maps to the
/// sandbox root `/apps/Neat Reader`.
pub fn namespace(relative_path: &str) -> String {
    let clean = relative_path.strip_prefix('/').unwrap_or(relative_path);
    if clean.is_empty() {
        format!("/apps/{APP_NAME}")
    } else {
        format!("/apps/{APP_NAME}/{clean}")
    }
}

/// Percent-encodes a query parameter value.
pub fn query_escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
