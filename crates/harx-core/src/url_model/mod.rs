//! URL modeling and filename derivation.
//!
//! Turns a HAR request URL into the name its payload is written under: last
//! path segment, query dropped, percent-decoded, kept to one path component.

mod path;
mod percent;
mod sanitize;

pub use path::last_path_segment;
pub use percent::percent_decode;
pub use sanitize::sanitize_file_name;

/// Derives the output filename for a request URL.
///
/// Returns an empty string when the URL has no usable final segment; callers
/// synthesize a name in that case.
///
/// # Examples
///
/// - `resolve_name("https://cdn.example.com/assets/model.glb?t=1699999999")` → `"model.glb"`
/// - `resolve_name("https://example.com/texture%20atlas.png")` → `"texture atlas.png"`
pub fn resolve_name(url: &str) -> String {
    let raw = last_path_segment(url);
    if raw.is_empty() {
        return String::new();
    }
    sanitize_file_name(&percent_decode(raw))
}

/// Fallback name for a payload whose URL yields nothing: `0x` + uppercase hex length.
pub fn synthesized_name(len: usize) -> String {
    format!("0x{len:X}")
}
