//! ZIP archive parsing.
//!
//! Just enough of the format to find one member by name and read the
//! start of it:
//!
//! - [`structures`]: Data structures representing ZIP format elements (EOCD, file headers, etc.)
//! - [`parser`]: Low-level parsing of ZIP structures from raw bytes
//! - [`extractor`]: Member lookup and first-line reading
//!
//! The End of Central Directory record is read first (from the end of the
//! file), then the Central Directory, then only the Local File Header and
//! data of the requested member.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions for files > 4GB
//! - STORED and DEFLATE compression methods
//!
//! No encryption, no multi-disk archives, no other compression methods.

mod extractor;
mod parser;
mod structures;

#[cfg(test)]
pub(crate) mod testing;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
