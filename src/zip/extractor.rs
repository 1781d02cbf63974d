use flate2::{Decompress, FlushDecompress, Status};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// Bytes of member data fetched per read; also the inflate output window.
pub(crate) const CHUNK_SIZE: usize = 8 * 1024;

/// ZIP member reader
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Find the file entry whose name is exactly `name`.
    ///
    /// Directory entries never match. When the central directory lists the
    /// name more than once the last record wins, as it would for an archive
    /// appended to in place. Returns `Ok(None)` when the archive is readable
    /// but has no such member.
    pub async fn find_entry(&self, name: &str) -> Result<Option<ZipFileEntry>> {
        let entries = self.list_files().await?;
        Ok(entries
            .into_iter()
            .rev()
            .find(|e| !e.is_directory && e.file_name == name))
    }

    /// Read the first line of an entry as raw bytes.
    ///
    /// The line runs up to and including the first `\n`, or to the end of
    /// the entry when it has none. Member data is pulled in `CHUNK_SIZE`
    /// pieces and reading stops at the newline, so only the start of a
    /// large member is touched. No decoding happens here.
    pub async fn read_first_line(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let method = entry.compression_method;
        if let CompressionMethod::Unknown(code) = method {
            return Err(Error::UnsupportedCompression(code));
        }
        let mut chunks = self.member_chunks(entry).await?;

        let mut line = Vec::new();
        match method {
            CompressionMethod::Stored => {
                while let Some(chunk) = chunks.next_chunk().await? {
                    if take_line(&mut line, &chunk) {
                        break;
                    }
                }
            }
            CompressionMethod::Deflate => {
                inflate_first_line(&mut chunks, &mut line)
                    .await
                    .map_err(|e| match e {
                        Error::CorruptArchive(reason) => Error::CorruptArchive(format!(
                            "cannot inflate '{}': {}",
                            entry.file_name, reason
                        )),
                        other => other,
                    })?;
            }
            CompressionMethod::Unknown(code) => return Err(Error::UnsupportedCompression(code)),
        }

        debug!(
            member = %entry.file_name,
            method = method.as_u16(),
            bytes = line.len(),
            fetched = chunks.pos - chunks.start,
            "read first line"
        );
        Ok(line)
    }

    /// Bounds-check an entry's data and set up chunked reads over it.
    async fn member_chunks(&self, entry: &ZipFileEntry) -> Result<MemberChunks<'_, R>> {
        if entry.is_encrypted() {
            return Err(Error::corrupt(format!(
                "entry '{}' is encrypted",
                entry.file_name
            )));
        }
        let data_offset = self.parser.get_data_offset(entry).await?;
        let end = data_offset.checked_add(entry.compressed_size);
        match end {
            Some(end) if end <= self.parser.reader().size() => Ok(MemberChunks {
                reader: self.parser.reader().as_ref(),
                start: data_offset,
                pos: data_offset,
                end,
            }),
            _ => Err(Error::corrupt(format!(
                "data of '{}' runs past the end of the archive",
                entry.file_name
            ))),
        }
    }
}

/// Sequential reads over `[start, end)` of the archive.
struct MemberChunks<'a, R: ReadAt> {
    reader: &'a R,
    start: u64,
    pos: u64,
    end: u64,
}

impl<R: ReadAt> MemberChunks<'_, R> {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        if self.pos >= self.end {
            return Ok(None);
        }
        let len = (self.end - self.pos).min(CHUNK_SIZE as u64) as usize;
        let mut buf = vec![0u8; len];
        self.reader.read_exact_at(self.pos, &mut buf).await?;
        self.pos += len as u64;
        Ok(Some(buf))
    }
}

/// Append `bytes` to `line` up to and including the first `\n`.
/// Returns true once the line is complete.
fn take_line(line: &mut Vec<u8>, bytes: &[u8]) -> bool {
    match bytes.iter().position(|&b| b == b'\n') {
        Some(i) => {
            line.extend_from_slice(&bytes[..=i]);
            true
        }
        None => {
            line.extend_from_slice(bytes);
            false
        }
    }
}

/// Feed compressed chunks through a raw DEFLATE decoder until the first
/// line is complete or the stream ends.
async fn inflate_first_line<R: ReadAt>(
    chunks: &mut MemberChunks<'_, R>,
    line: &mut Vec<u8>,
) -> Result<()> {
    let mut inflater = Decompress::new(false);
    let mut out = vec![0u8; CHUNK_SIZE];

    while let Some(chunk) = chunks.next_chunk().await? {
        let mut input = chunk.as_slice();
        loop {
            let in_before = inflater.total_in();
            let out_before = inflater.total_out();
            let status = inflater
                .decompress(input, &mut out, FlushDecompress::None)
                .map_err(|e| Error::corrupt(e.to_string()))?;
            let consumed = (inflater.total_in() - in_before) as usize;
            let produced = (inflater.total_out() - out_before) as usize;
            input = &input[consumed..];

            if take_line(line, &out[..produced]) || status == Status::StreamEnd {
                return Ok(());
            }
            if consumed == 0 && produced == 0 {
                // needs the next chunk
                break;
            }
        }
    }

    // An empty member may be stored with no compressed bytes at all
    if chunks.end == chunks.start {
        return Ok(());
    }
    Err(Error::corrupt("compressed data ends before the stream does"))
}
