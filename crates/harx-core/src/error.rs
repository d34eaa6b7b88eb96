//! Error taxonomy for loading, decoding and writing.
//!
//! Load and directory errors abort a run. Decode and per-file write errors are
//! recovered by the caller and surfaced as diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The HAR document could not be turned into an entry list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read HAR file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Not JSON, `log.entries` missing, or a consumed field has the wrong type.
    #[error("parse HAR JSON {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry's inline body is not valid base64.
#[derive(Debug, Error)]
#[error("decode payload for {name:?}")]
pub struct DecodeError {
    /// Derived name of the offending entry, or its URL when no name resolves.
    pub name: String,
    #[source]
    pub source: base64::DecodeError,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fatal errors of a whole extraction run.
#[derive(Debug, Error)]
pub enum HarxError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn decode_error_names_entry() {
        let source = base64::engine::general_purpose::STANDARD
            .decode("!!!")
            .unwrap_err();
        let err = DecodeError {
            name: "model.glb".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "decode payload for \"model.glb\"");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_error_mentions_path() {
        let err = LoadError::Read {
            path: PathBuf::from("/nope/capture.har"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "read HAR file /nope/capture.har");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "not found");
    }
}
