//! Entry classification: which HAR entries carry a payload worth extracting.
//!
//! Matching is exact and case-sensitive on every set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_RESOURCE_TYPES: &[&str] = &["xhr", "image"];

const DEFAULT_MIME_TYPES: &[&str] = &[
    "application/octet-stream",
    "binary/octet-stream",
    "image/png",
];

const DEFAULT_EXTENSIONS: &[&str] = &[
    ".glb", ".gltf", ".bin", ".drc", ".dds", ".png", ".jpg", ".jpeg", ".webp", ".env",
];

/// Allowed resource types, MIME types and extensions (`[policy]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationPolicy {
    /// HAR `_resourceType` values to capture (e.g. "xhr").
    pub resource_types: BTreeSet<String>,
    /// `response.content.mimeType` values to capture.
    pub mime_types: BTreeSet<String>,
    /// Filename suffixes, including the dot. Only consulted when
    /// `include_by_extension` is set.
    pub extensions: BTreeSet<String>,
    /// Also capture entries whose derived name ends in an allowed extension,
    /// regardless of resource type and MIME type.
    pub include_by_extension: bool,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        fn set(items: &[&str]) -> BTreeSet<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            resource_types: set(DEFAULT_RESOURCE_TYPES),
            mime_types: set(DEFAULT_MIME_TYPES),
            extensions: set(DEFAULT_EXTENSIONS),
            include_by_extension: false,
        }
    }
}

/// Why an entry was not captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ResourceType,
    MimeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Capture,
    Skip(SkipReason),
}

impl Classification {
    pub fn is_capture(self) -> bool {
        matches!(self, Classification::Capture)
    }
}

impl ClassificationPolicy {
    /// Classifies an entry by its resource type, MIME type and derived name.
    pub fn classify(&self, resource_type: &str, mime_type: &str, name: &str) -> Classification {
        if self.include_by_extension && self.has_allowed_extension(name) {
            return Classification::Capture;
        }
        if self.should_capture(resource_type, mime_type) {
            Classification::Capture
        } else if !self.resource_types.contains(resource_type) {
            Classification::Skip(SkipReason::ResourceType)
        } else {
            Classification::Skip(SkipReason::MimeType)
        }
    }

    /// Resource type AND MIME type are both allowed.
    pub fn should_capture(&self, resource_type: &str, mime_type: &str) -> bool {
        self.resource_types.contains(resource_type) && self.mime_types.contains(mime_type)
    }

    pub fn has_allowed_extension(&self, name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
    }
}
