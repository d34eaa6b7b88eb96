//! Minimal HAR 1.2 structures: only the fields extraction reads.

use serde::Deserialize;

/// Root HAR document (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarFile {
    pub log: HarLog,
}

#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarEntry {
    /// Chromium's `_resourceType` extension ("xhr", "image", ...).
    #[serde(default, rename = "_resourceType")]
    pub resource_type: String,
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarRequest {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarResponse {
    pub content: HarContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarContent {
    #[serde(default)]
    pub mime_type: String,
    /// Declared body size; browsers write -1 when unknown.
    #[serde(default)]
    pub size: i64,
    /// Inline body. Missing when the browser did not embed it.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}
