//! HAR (HTTP Archive) loading.
//!
//! Reads a HAR file and exposes its `log.entries` as typed records, in archive
//! order. Nothing beyond the consumed fields is validated.

mod parse;

use std::path::Path;

pub use parse::{HarContent, HarEntry, HarRequest, HarResponse};

use crate::error::LoadError;
use parse::HarFile;

/// A loaded HAR document. Read-only; entries keep the order they were recorded in.
#[derive(Debug, Clone)]
pub struct Archive {
    entries: Vec<HarEntry>,
}

impl Archive {
    /// Reads and parses the HAR file at `path`.
    ///
    /// Fails if the file cannot be read, is not JSON, or lacks `log.entries`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = Self::parse(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            entries = archive.entries.len(),
            "loaded HAR archive"
        );
        Ok(archive)
    }

    /// Parses HAR JSON that is already in memory.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Self::parse(text).map_err(|source| LoadError::Parse {
            path: "<memory>".into(),
            source,
        })
    }

    fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let har: HarFile = serde_json::from_str(text)?;
        Ok(Self {
            entries: har.log.entries,
        })
    }

    pub fn entries(&self) -> &[HarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_entries_in_order() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "_resourceType": "xhr",
                        "request": { "method": "GET", "url": "https://cdn.example.com/a.glb" },
                        "response": {
                            "status": 200,
                            "content": {
                                "size": 3,
                                "mimeType": "application/octet-stream",
                                "text": "AAEC",
                                "encoding": "base64"
                            }
                        }
                    },
                    {
                        "_resourceType": "script",
                        "request": { "url": "https://cdn.example.com/app.js" },
                        "response": { "content": { "size": -1, "mimeType": "text/javascript" } }
                    }
                ]
            }
        }"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(har.as_bytes()).unwrap();
        f.flush().unwrap();

        let archive = Archive::load(f.path()).unwrap();
        assert_eq!(archive.len(), 2);
        let first = &archive.entries()[0];
        assert_eq!(first.resource_type, "xhr");
        assert_eq!(first.request.url, "https://cdn.example.com/a.glb");
        assert_eq!(first.response.content.size, 3);
        assert_eq!(first.response.content.text.as_deref(), Some("AAEC"));
        assert_eq!(first.response.content.encoding.as_deref(), Some("base64"));
        let second = &archive.entries()[1];
        assert_eq!(second.response.content.size, -1);
        assert!(second.response.content.text.is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let har = r#"{"log":{"entries":[
            {"request":{"url":"u"},"response":{"content":{}}}
        ]}}"#;
        let archive = Archive::from_json_str(har).unwrap();
        let entry = &archive.entries()[0];
        assert_eq!(entry.resource_type, "");
        assert_eq!(entry.response.content.mime_type, "");
        assert_eq!(entry.response.content.size, 0);
    }

    #[test]
    fn empty_entries_ok() {
        let archive = Archive::from_json_str(r#"{"log":{"version":"1.2","entries":[]}}"#).unwrap();
        assert!(archive.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Archive::load(&dir.path().join("absent.har")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn not_json_is_parse_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"<html>not a har</html>").unwrap();
        f.flush().unwrap();
        let err = Archive::load(f.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn missing_log_or_entries_is_parse_error() {
        assert!(matches!(
            Archive::from_json_str(r#"{"entries":[]}"#),
            Err(LoadError::Parse { .. })
        ));
        assert!(matches!(
            Archive::from_json_str(r#"{"log":{"version":"1.2"}}"#),
            Err(LoadError::Parse { .. })
        ));
    }
}
