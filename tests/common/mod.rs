#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::CompressionMethod;
use zip::write::FileOptions;

/// Write a zip archive at `path` holding `entries` as (name, contents).
pub fn write_zip(
    path: &Path,
    entries: &[(&str, &[u8])],
    method: CompressionMethod,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut zip = zip::ZipWriter::new(File::create(path)?);
    let options = FileOptions::default().compression_method(method);
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options)?;
        } else {
            zip.start_file(*name, options)?;
            zip.write_all(data)?;
        }
    }
    zip.finish()?;
    Ok(())
}

/// Same as [`write_zip`] with an archive comment appended.
pub fn write_zip_with_comment(
    path: &Path,
    entries: &[(&str, &[u8])],
    comment: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut zip = zip::ZipWriter::new(File::create(path)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, data) in entries {
        zip.start_file(*name, options)?;
        zip.write_all(data)?;
    }
    zip.set_comment(comment);
    zip.finish()?;
    Ok(())
}

/// Overwrite the compression method of the first central directory record.
pub fn patch_central_method(path: &Path, method: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = std::fs::read(path)?;
    let cd = bytes
        .windows(4)
        .position(|w| w == b"PK\x01\x02")
        .ok_or("no central directory record")?;
    bytes[cd + 10..cd + 12].copy_from_slice(&method.to_le_bytes());
    std::fs::write(path, bytes)?;
    Ok(())
}
