//! Output directory and file persistence.
//!
//! Creates the output directory (idempotent) and writes each non-empty payload
//! under its collection name, overwriting existing files.

mod writer;

use std::path::{Path, PathBuf};

use crate::collect::FileCollection;
use crate::error::WriteError;
use crate::payload::Payload;

/// Name of the output subdirectory when the config does not override it.
pub const DEFAULT_DIR_NAME: &str = "Unpacked";

/// One file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub name: String,
    pub path: PathBuf,
    pub len: usize,
    pub kind: &'static str,
}

/// Per-file outcomes of [`OutputDir::write_collection`].
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub written: Vec<WrittenFile>,
    /// Zero-length payloads (empty bodies, absent bodies, placeholders).
    pub skipped_empty: usize,
    pub failed: Vec<WriteError>,
}

impl WriteSummary {
    pub fn total_bytes(&self) -> u64 {
        self.written.iter().map(|f| f.len as u64).sum()
    }
}

/// Directory that extracted files are written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Creates `parent/name` if needed. An existing directory is reused.
    pub fn create(parent: &Path, name: &str) -> Result<Self, WriteError> {
        let path = parent.join(name);
        std::fs::create_dir_all(&path).map_err(|source| WriteError::CreateDir {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "output directory ready");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one payload as `name`. Returns `None` for zero-length payloads.
    pub fn write_file(
        &self,
        name: &str,
        payload: &Payload,
    ) -> Result<Option<WrittenFile>, WriteError> {
        if payload.is_empty() {
            return Ok(None);
        }
        let path = self.path.join(name);
        writer::write_payload(&path, payload).map_err(|source| WriteError::File {
            path: path.clone(),
            source,
        })?;
        Ok(Some(WrittenFile {
            name: name.to_string(),
            path,
            len: payload.len(),
            kind: payload.kind(),
        }))
    }

    /// Writes every non-empty payload. A failed file is recorded and the rest
    /// are still written.
    pub fn write_collection(&self, files: &FileCollection) -> WriteSummary {
        let mut summary = WriteSummary::default();
        for file in files.iter() {
            match self.write_file(&file.name, &file.payload) {
                Ok(Some(written)) => {
                    tracing::info!(
                        name = %written.name,
                        bytes = written.len,
                        kind = written.kind,
                        "wrote file"
                    );
                    summary.written.push(written);
                }
                Ok(None) => summary.skipped_empty += 1,
                Err(err) => {
                    tracing::error!(error = ?err, "failed to write file");
                    summary.failed.push(err);
                }
            }
        }
        summary
    }
}

/// Directory containing the running executable; the default output parent.
pub fn program_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        )
    })
}
