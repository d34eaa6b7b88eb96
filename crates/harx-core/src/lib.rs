pub mod config;
pub mod error;
pub mod logging;

// Extraction pipeline, leaf-first.
pub mod collect;
pub mod extract;
pub mod har;
pub mod payload;
pub mod policy;
pub mod storage;
pub mod url_model;

pub use error::{DecodeError, HarxError, LoadError, WriteError};
pub use extract::{extract_archive, extract_file, Extraction};
