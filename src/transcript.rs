//! Append-only conversation transcript

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

/// Line that opens every block
pub const SEPARATOR: &str = "---";

/// Errors raised while creating or appending to the transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The file could not be created or truncated
    #[error("cannot create transcript {path}: {source}")]
    Create {
        /// Transcript path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A block could not be written
    #[error("cannot write to transcript {path}: {source}")]
    Write {
        /// Transcript path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Render one block: separator, blank line, text, blank line
pub fn format_block(text: &str) -> String {
    format!("{SEPARATOR}\n\n{text}\n\n")
}

/// The transcript file for one session
///
/// Created (truncating) when the session starts and closed on drop.
#[derive(Debug)]
pub struct Transcript<W = File> {
    path: PathBuf,
    sink: W,
}

impl Transcript<File> {
    /// Create or truncate the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let path = path.as_ref().to_path_buf();
        let sink = File::create(&path).map_err(|source| TranscriptError::Create {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, sink })
    }
}

impl<W: Write> Transcript<W> {
    /// Wrap an arbitrary writer; `path` is only used in error messages
    pub fn from_writer(path: impl Into<PathBuf>, sink: W) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }

    /// Path the transcript writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one block with a single write, then flush
    pub fn append(&mut self, text: &str) -> Result<(), TranscriptError> {
        let block = format_block(text);
        self.sink
            .write_all(block.as_bytes())
            .and_then(|()| self.sink.flush())
            .map_err(|source| TranscriptError::Write {
                path: self.path.clone(),
                source,
            })?;
        trace!(bytes = block.len(), "transcript block appended");
        Ok(())
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.sink
    }
}
