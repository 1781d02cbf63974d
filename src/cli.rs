use clap::Parser;

use crate::bottle::{ArchiveName, DEFAULT_EXTENSION};

#[derive(Parser, Debug)]
#[command(name = "bottle")]
#[command(version)]
#[command(about = "Print the message stored in a zipped bottle", long_about = None)]
#[command(after_help = "Examples:\n  \
  bottle                                  read message_in_a_bottle.txt.zip\n  \
  bottle --name notes.md                  read the first line of notes.md from notes.md.zip\n  \
  bottle -q --url https://example.com/message_in_a_bottle.txt.zip   download, then read")]
pub struct Cli {
    /// Base name of the archive; also the name of the member inside it
    #[arg(long, value_name = "NAME", default_value = "message_in_a_bottle.txt")]
    pub name: String,

    /// Extension appended to the base name to form the archive name
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Download the archive from this URL into the current directory first
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Quiet mode, skip the environment diagnostics (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// Archive file name: base name followed by the extension.
    pub fn filename(&self) -> String {
        ArchiveName::file_name(&self.name, &self.extension)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}
