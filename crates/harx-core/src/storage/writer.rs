//! Single-file payload writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::payload::Payload;

/// Creates (or truncates) `path` and writes the payload bytes. The handle is
/// closed on return.
pub(super) fn write_payload(path: &Path, payload: &Payload) -> std::io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    match payload {
        Payload::Binary(bytes) => file.write_all(bytes)?,
        Payload::Text(text) => file.write_all(text.as_bytes())?,
        Payload::Absent => {}
    }
    file.flush()
}
