//! The one task: read the first line of the member an archive is named after.
//!
//! `message_in_a_bottle.txt.zip` is expected to hold a member called
//! `message_in_a_bottle.txt`; its first line is the message.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::LocalFileReader;
use crate::zip::ZipExtractor;

/// Extension the archive name carries on top of its member's name.
pub const DEFAULT_EXTENSION: &str = ".zip";

/// An archive path paired with the member name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    pub archive_path: PathBuf,
    pub member: String,
}

impl ArchiveName {
    /// Derive the member name by removing `extension` from the archive's
    /// file name.
    ///
    /// The file name must really end with `extension` and something must be
    /// left once it is removed. Leading directories of `path` are not part
    /// of the member name.
    pub fn parse(path: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let invalid = || Error::InvalidArchiveName {
            name: path.display().to_string(),
            extension: extension.to_string(),
        };

        let member = file_name.strip_suffix(extension).ok_or_else(invalid)?;
        if member.is_empty() || extension.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            archive_path: path.to_path_buf(),
            member: member.to_string(),
        })
    }

    /// Join a base name and an extension into an archive file name.
    pub fn file_name(base: &str, extension: &str) -> String {
        format!("{}{}", base, extension)
    }
}

/// Read the first line of the `.zip` archive's namesake member.
pub async fn extract_first_line(archive_path: impl AsRef<Path>) -> Result<String> {
    extract_first_line_with(archive_path, DEFAULT_EXTENSION).await
}

/// Read the first line of the archive's namesake member, with the member
/// name derived by removing `extension`.
///
/// The line keeps its trailing `\n` if it had one.
pub async fn extract_first_line_with(
    archive_path: impl AsRef<Path>,
    extension: &str,
) -> Result<String> {
    let name = ArchiveName::parse(archive_path, extension)?;
    debug!(archive = %name.archive_path.display(), member = %name.member, "opening archive");

    let reader = Arc::new(LocalFileReader::open(&name.archive_path)?);
    let extractor = ZipExtractor::new(reader);

    let entry = extractor
        .find_entry(&name.member)
        .await?
        .ok_or_else(|| Error::MemberNotFound {
            archive: name.archive_path.clone(),
            member: name.member.clone(),
        })?;

    let line = extractor.read_first_line(&entry).await?;
    let line = String::from_utf8(line).map_err(|source| Error::Decode {
        member: name.member.clone(),
        source,
    })?;

    info!(member = %name.member, bytes = line.len(), "message extracted");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_name_drops_the_extension() {
        let name = ArchiveName::parse("message_in_a_bottle.txt.zip", ".zip").unwrap();
        assert_eq!(name.member, "message_in_a_bottle.txt");
        assert_eq!(name.archive_path, PathBuf::from("message_in_a_bottle.txt.zip"));
    }

    #[test]
    fn member_name_ignores_leading_directories() {
        let name = ArchiveName::parse("downloads/data.csv.zip", ".zip").unwrap();
        assert_eq!(name.member, "data.csv");
    }

    #[test]
    fn extension_is_validated_not_counted() {
        // Removing four characters would have produced "message.t"
        let err = ArchiveName::parse("message.txt.gz", ".zip").unwrap_err();
        assert!(matches!(err, Error::InvalidArchiveName { .. }));

        let name = ArchiveName::parse("message.txt.tar.gz", ".tar.gz").unwrap();
        assert_eq!(name.member, "message.txt");
    }

    #[test]
    fn bare_extension_is_rejected() {
        assert!(matches!(
            ArchiveName::parse(".zip", ".zip"),
            Err(Error::InvalidArchiveName { .. })
        ));
        assert!(matches!(
            ArchiveName::parse("a.zip", ""),
            Err(Error::InvalidArchiveName { .. })
        ));
    }

    #[test]
    fn file_name_concatenates() {
        assert_eq!(
            ArchiveName::file_name("message_in_a_bottle.txt", DEFAULT_EXTENSION),
            "message_in_a_bottle.txt.zip"
        );
    }
}
