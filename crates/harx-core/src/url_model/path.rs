//! Raw filename extraction from a request URL.

/// Scheme prefixes removed before splitting. Other schemes are left in place.
const PROTOCOL_PREFIXES: [&str; 3] = ["https://", "http://", "ftp://"];

/// Returns the last `/`-separated segment of `url` with any query string
/// removed, still percent-encoded.
///
/// Plain string manipulation, so it accepts anything. The result is empty when
/// the URL ends in `/` or has no path at all.
pub fn last_path_segment(url: &str) -> &str {
    let rest = PROTOCOL_PREFIXES
        .iter()
        .find_map(|prefix| url.strip_prefix(prefix))
        .unwrap_or(url);

    let segment = match rest.rsplit_once('/') {
        Some((_, last)) => last,
        // A bare host ("example.com") is not a filename.
        None if rest.len() != url.len() => "",
        None => rest,
    };

    segment.split('?').next().unwrap_or_default()
}
