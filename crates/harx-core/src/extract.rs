//! One extraction run: load → classify/decode → write.

use std::path::{Path, PathBuf};

use crate::collect::{build_collection, Diagnostic, EntryReport};
use crate::config::HarxConfig;
use crate::error::HarxError;
use crate::har::Archive;
use crate::storage::{OutputDir, WriteSummary};

/// Everything a run produced, for reporting.
#[derive(Debug)]
pub struct Extraction {
    pub output_dir: PathBuf,
    pub entries: Vec<EntryReport>,
    pub diagnostics: Vec<Diagnostic>,
    pub write: WriteSummary,
}

impl Extraction {
    /// True when every payload that should have been written was.
    pub fn is_complete(&self) -> bool {
        self.write.failed.is_empty()
    }
}

/// Extracts every qualifying payload of the HAR at `har_path` into
/// `output_parent/<config.output_dir_name>`.
///
/// The archive is fully loaded before the output directory is touched, so a
/// load failure leaves the filesystem unchanged.
pub fn extract_file(
    har_path: &Path,
    output_parent: &Path,
    config: &HarxConfig,
) -> Result<Extraction, HarxError> {
    let archive = Archive::load(har_path)?;
    extract_archive(&archive, output_parent, config)
}

/// Same as [`extract_file`] for an already loaded archive.
pub fn extract_archive(
    archive: &Archive,
    output_parent: &Path,
    config: &HarxConfig,
) -> Result<Extraction, HarxError> {
    let collected = build_collection(archive.entries(), &config.policy);
    tracing::debug!(
        entries = archive.len(),
        names = collected.files.len(),
        writable = collected.files.writable_count(),
        diagnostics = collected.diagnostics.len(),
        "collection built"
    );

    let out = OutputDir::create(output_parent, &config.output_dir_name)?;
    let write = out.write_collection(&collected.files);

    tracing::info!(
        output = %out.path().display(),
        written = write.written.len(),
        bytes = write.total_bytes(),
        failed = write.failed.len(),
        "extraction finished"
    );

    Ok(Extraction {
        output_dir: out.path().to_path_buf(),
        entries: collected.entries,
        diagnostics: collected.diagnostics,
        write,
    })
}
