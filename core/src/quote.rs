//! Decoding of git's quoted path encoding.
//!
//! The git commands are always run with `core.quotepath=false`, so non-ASCII
//! bytes come through literally, but git still wraps paths containing quote or
//! backslash characters in double quotes with C-style escaping.

/// Decode a possibly-quoted path field into the literal filename.
///
/// If the field is wrapped in a matching pair of double quotes they are
/// stripped; then `\"` becomes a literal quote and `\\` a literal backslash.
/// Malformed input passes through best-effort — this never fails.
pub fn unquote(field: &str) -> String {
    let inner = if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    };
    inner.replace("\\\"", "\"").replace("\\\\", "\\")
}
