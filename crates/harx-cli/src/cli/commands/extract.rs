//! `harx <file.har>` – extract embedded payloads into the output directory.

use anyhow::Result;
use harx_core::collect::Diagnostic;
use harx_core::config::HarxConfig;
use harx_core::extract_file;
use harx_core::storage::WrittenFile;
use std::error::Error;
use std::path::Path;

/// Runs one extraction and prints the per-file report. Returns the exit code:
/// 0 when everything was written, 1 when some files failed.
pub fn run_extract(har: &Path, output_parent: &Path, cfg: &HarxConfig) -> Result<i32> {
    let run = extract_file(har, output_parent, cfg)?;

    for diag in &run.diagnostics {
        if let Some(line) = diagnostic_line(diag) {
            println!("{line}");
        }
    }
    for file in &run.write.written {
        println!("{}", written_line(file));
    }
    for err in &run.write.failed {
        eprintln!("Failed: {}", error_chain(err));
    }

    println!(
        "Finished. {} file(s) written to {}",
        run.write.written.len(),
        run.output_dir.display()
    );

    Ok(if run.is_complete() { 0 } else { 1 })
}

pub(crate) fn written_line(file: &WrittenFile) -> String {
    format!("{} ({} bytes)", file.name, file.len)
}

/// `outer: inner: root` rendering of an error and its sources.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

/// Console line for a diagnostic; duplicates only go to the log.
pub(crate) fn diagnostic_line(diag: &Diagnostic) -> Option<String> {
    match diag {
        Diagnostic::ExternalResource { name, url } => {
            Some(format!("Skipped {name}: not embedded in archive ({url})"))
        }
        Diagnostic::DecodeFailed { url, error } => {
            Some(format!("Skipped {url}: {}", error_chain(error)))
        }
        Diagnostic::Duplicate { .. } => None,
    }
}
