//! Keeps decoded names to a single path component.

/// Replaces characters that would escape or corrupt a single filename.
///
/// - `/`, `\`, NUL and control characters become `_` (they can only appear
///   here through percent-decoding, e.g. `%2F`)
/// - `.` and `..` become the empty string
///
/// Everything else, spaces included, is left as the URL spelled it.
pub fn sanitize_file_name(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if out == "." || out == ".." {
        String::new()
    } else {
        out
    }
}
