//! # bottle
//!
//! Read the message out of a zipped bottle.
//!
//! An archive such as `message_in_a_bottle.txt.zip` is expected to contain a
//! member named after it, `message_in_a_bottle.txt`. This crate opens the
//! archive, finds that member and returns its first line as text. The
//! accompanying binary prints a few environment diagnostics, optionally
//! downloads the archive first, and frames the message between
//! `=== BEGIN MESSAGE ===` and `=== END MESSAGE ===`.
//!
//! ## Features
//!
//! - Member name derived by validating and removing the archive extension
//! - Only the end of central directory, the central directory and the one
//!   member are read
//! - Support for ZIP64 format (archives larger than 4GB)
//! - Support for STORED (uncompressed) and DEFLATE compression methods
//!
//! ## Example
//!
//! ```no_run
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let line = bottle::extract_first_line("message_in_a_bottle.txt.zip").await?;
//!     print!("{}", line);
//!     Ok(())
//! }
//! ```

pub mod bottle;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod io;
pub mod report;
pub mod zip;

pub use crate::bottle::{
    ArchiveName, DEFAULT_EXTENSION, extract_first_line, extract_first_line_with,
};
pub use crate::cli::Cli;
pub use crate::error::{Error, Result};
pub use crate::io::{LocalFileReader, ReadAt};
pub use crate::zip::{ZipExtractor, ZipFileEntry};
