//! Builds HAR documents for integration tests.
//!
//! Only the fields extraction reads are emitted, plus a few the browser would
//! normally include so the fixtures look like real captures.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One recorded request/response pair.
pub struct FixtureEntry {
    pub resource_type: String,
    pub url: String,
    pub mime_type: String,
    pub text: Option<String>,
    pub encoding: Option<String>,
}

impl FixtureEntry {
    /// Base64-encoded inline body.
    pub fn base64(resource_type: &str, mime_type: &str, url: &str, text: &str) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            url: url.to_string(),
            mime_type: mime_type.to_string(),
            text: Some(text.to_string()),
            encoding: Some("base64".to_string()),
        }
    }

    /// Unencoded inline body.
    pub fn text(resource_type: &str, mime_type: &str, url: &str, text: &str) -> Self {
        Self {
            encoding: None,
            ..Self::base64(resource_type, mime_type, url, text)
        }
    }

    /// Body not embedded in the archive.
    pub fn external(resource_type: &str, mime_type: &str, url: &str) -> Self {
        Self {
            text: None,
            encoding: None,
            ..Self::base64(resource_type, mime_type, url, "")
        }
    }

    fn to_json(&self) -> Value {
        let mut content = json!({
            "size": self.text.as_ref().map_or(-1, |t| t.len() as i64),
            "mimeType": self.mime_type,
        });
        if let Some(text) = &self.text {
            content["text"] = json!(text);
        }
        if let Some(encoding) = &self.encoding {
            content["encoding"] = json!(encoding);
        }
        json!({
            "_resourceType": self.resource_type,
            "startedDateTime": "2024-01-01T00:00:00.000Z",
            "request": { "method": "GET", "url": self.url, "headers": [] },
            "response": { "status": 200, "headers": [], "content": content },
        })
    }
}

pub fn har_json(entries: &[FixtureEntry]) -> String {
    let entries: Vec<Value> = entries.iter().map(FixtureEntry::to_json).collect();
    json!({
        "log": {
            "version": "1.2",
            "creator": { "name": "fixture", "version": "1" },
            "entries": entries,
        }
    })
    .to_string()
}

/// Writes a HAR document to `dir/capture.har` and returns its path.
pub fn write_har(dir: &Path, entries: &[FixtureEntry]) -> PathBuf {
    let path = dir.join("capture.har");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(har_json(entries).as_bytes()).unwrap();
    path
}
