//! Human-readable output: environment diagnostics and the framed message.

use std::io::Write;
use std::path::Path;

use crate::error::Result;

pub const BEGIN_BANNER: &str = "=== BEGIN MESSAGE ===";
pub const END_BANNER: &str = "=== END MESSAGE ===";

/// Name, version and platform of this program.
pub fn runtime_version() -> String {
    format!(
        "{} {} ({}/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// File names in `dir`, sorted.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

pub fn list_current_dir() -> Result<Vec<String>> {
    list_dir(Path::new("."))
}

pub fn write_diagnostics<W: Write>(out: &mut W, version: &str, entries: &[String]) -> Result<()> {
    writeln!(out, "{}", version)?;
    writeln!(out)?;
    writeln!(out, "=== Files in the current directory ===")?;
    writeln!(out, "{:?}", entries)?;
    Ok(())
}

pub fn write_filename<W: Write>(out: &mut W, filename: &str) -> Result<()> {
    writeln!(out, "`filename`: '{}'", filename)?;
    Ok(())
}

/// Print the message between the banners.
///
/// The END banner always starts its own line, even when the message has
/// no trailing newline.
pub fn write_message<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BEGIN_BANNER)?;
    write!(out, "{}", message)?;
    if !message.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out, "{}", END_BANNER)?;
    Ok(())
}
