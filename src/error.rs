//! Error types for reading a message out of an archive.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("member '{member}' not found in archive {}", .archive.display())]
    MemberNotFound { archive: PathBuf, member: String },

    #[error("member '{member}' is not valid UTF-8: {source}")]
    Decode {
        member: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("archive name '{name}' does not end with '{extension}'")]
    InvalidArchiveName { name: String, extension: String },

    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    #[error("unsupported compression method: {0} (only STORED and DEFLATE are supported)")]
    UnsupportedCompression(u16),

    #[error("download failed: {0}")]
    Download(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptArchive(reason.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Download(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
