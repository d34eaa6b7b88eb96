//! Builds the name → payload collection from a HAR entry list.
//!
//! One pass in archive order. The first entry to claim a name keeps it; later
//! entries with the same name are dropped, so the outcome depends on order.

use std::collections::HashMap;

use crate::error::DecodeError;
use crate::har::HarEntry;
use crate::payload::{decode_content, Payload};
use crate::policy::{Classification, ClassificationPolicy};
use crate::url_model::{resolve_name, synthesized_name};

/// A named payload ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub name: String,
    pub payload: Payload,
}

/// Payloads keyed by name, iterated in first-insertion order.
#[derive(Debug, Default)]
pub struct FileCollection {
    files: Vec<ExtractedFile>,
    index: HashMap<String, usize>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `payload` under `name` unless the name is taken. Returns whether it was inserted.
    pub fn insert(&mut self, name: String, payload: Payload) -> bool {
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.files.len());
        self.files.push(ExtractedFile { name, payload });
        true
    }

    pub fn get(&self, name: &str) -> Option<&Payload> {
        self.index.get(name).map(|&i| &self.files[i].payload)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries that would actually be written (non-empty payloads).
    pub fn writable_count(&self) -> usize {
        self.files.iter().filter(|f| !f.payload.is_empty()).count()
    }
}

/// Non-fatal per-entry event.
#[derive(Debug)]
pub enum Diagnostic {
    /// Qualifying entry whose body is not embedded in the archive.
    ExternalResource { name: String, url: String },
    DecodeFailed { url: String, error: DecodeError },
    /// Name already claimed by an earlier entry; this payload was dropped.
    Duplicate { name: String, url: String, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Skipped,
    Captured,
    External,
    DecodeFailed,
    Duplicate,
}

/// What happened to one entry, for reporting.
#[derive(Debug, Clone)]
pub struct EntryReport {
    pub url: String,
    /// Final name (synthesized if the URL yielded none; empty when skipped unnamed).
    pub name: String,
    pub classification: Classification,
    pub outcome: EntryOutcome,
    /// Decoded payload length in bytes.
    pub len: usize,
    /// `response.content.size` as recorded by the browser.
    pub declared_size: i64,
}

/// Output of [`build_collection`].
#[derive(Debug, Default)]
pub struct Collected {
    pub files: FileCollection,
    pub diagnostics: Vec<Diagnostic>,
    pub entries: Vec<EntryReport>,
}

/// Classifies, names and decodes every entry, deduplicating by name.
pub fn build_collection(entries: &[HarEntry], policy: &ClassificationPolicy) -> Collected {
    let mut out = Collected::default();

    for entry in entries {
        let content = &entry.response.content;
        let url = &entry.request.url;
        let resolved = resolve_name(url);
        let classification = policy.classify(&entry.resource_type, &content.mime_type, &resolved);

        let mut report = EntryReport {
            url: url.clone(),
            name: resolved,
            classification,
            outcome: EntryOutcome::Skipped,
            len: 0,
            declared_size: content.size,
        };

        if !classification.is_capture() {
            tracing::debug!(
                url = %url,
                resource_type = %entry.resource_type,
                mime_type = %content.mime_type,
                ?classification,
                "entry skipped"
            );
            out.files.insert(String::new(), Payload::Absent);
            report.name.clear();
            out.entries.push(report);
            continue;
        }

        let tag = if report.name.is_empty() { url } else { &report.name };
        let payload = match decode_content(content, tag) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(
                    url = %url,
                    %error,
                    reason = %error.source,
                    "payload decode failed; entry skipped"
                );
                report.outcome = EntryOutcome::DecodeFailed;
                out.diagnostics.push(Diagnostic::DecodeFailed {
                    url: url.clone(),
                    error,
                });
                out.entries.push(report);
                continue;
            }
        };

        if report.name.is_empty() {
            report.name = synthesized_name(payload.len());
        }
        report.len = payload.len();

        if matches!(payload, Payload::Absent) {
            tracing::warn!(
                name = %report.name,
                url = %url,
                "external resource not embedded in archive"
            );
            out.diagnostics.push(Diagnostic::ExternalResource {
                name: report.name.clone(),
                url: url.clone(),
            });
            report.outcome = EntryOutcome::External;
        } else {
            report.outcome = EntryOutcome::Captured;
        }

        if !out.files.insert(report.name.clone(), payload) && report.len > 0 {
            tracing::debug!(name = %report.name, url = %url, "duplicate name; keeping first entry");
            out.diagnostics.push(Diagnostic::Duplicate {
                name: report.name.clone(),
                url: url.clone(),
                len: report.len,
            });
            report.outcome = EntryOutcome::Duplicate;
        }

        out.entries.push(report);
    }

    out
}
