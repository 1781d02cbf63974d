//! Hand-built archives for unit tests.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

use super::structures::*;

#[derive(Default)]
pub struct ArchiveOptions<'a> {
    pub comment: &'a [u8],
    /// Saturate the EOCD and central directory fields and write the ZIP64
    /// records that carry the real values.
    pub zip64: bool,
    /// General purpose flags written on every entry.
    pub flags: u16,
    pub disk_number: u16,
}

/// Build an archive from (name, contents, method) triples. CRCs are left
/// zero; nothing in the reader checks them.
pub fn build_archive(
    entries: &[(&[u8], &[u8], CompressionMethod)],
    opts: &ArchiveOptions,
) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for (name, data, method) in entries {
        let payload = match method {
            CompressionMethod::Deflate => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data).unwrap();
                encoder.finish().unwrap()
            }
            _ => data.to_vec(),
        };
        let lfh_offset = out.len() as u32;

        out.extend_from_slice(LFH_SIGNATURE);
        out.write_u16::<LittleEndian>(20).unwrap();
        out.write_u16::<LittleEndian>(opts.flags).unwrap();
        out.write_u16::<LittleEndian>(method.as_u16()).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap(); // time, date
        out.write_u32::<LittleEndian>(0).unwrap(); // crc
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.extend_from_slice(name);
        out.extend_from_slice(&payload);

        let mut extra = Vec::new();
        let (compressed, uncompressed) = if opts.zip64 {
            extra.write_u16::<LittleEndian>(0x0001).unwrap();
            extra.write_u16::<LittleEndian>(16).unwrap();
            extra.write_u64::<LittleEndian>(data.len() as u64).unwrap();
            extra.write_u64::<LittleEndian>(payload.len() as u64).unwrap();
            (0xFFFF_FFFF, 0xFFFF_FFFF)
        } else {
            (payload.len() as u32, data.len() as u32)
        };

        central.extend_from_slice(CDFH_SIGNATURE);
        central.write_u16::<LittleEndian>(45).unwrap(); // made by
        central.write_u16::<LittleEndian>(45).unwrap(); // needed
        central.write_u16::<LittleEndian>(opts.flags).unwrap();
        central.write_u16::<LittleEndian>(method.as_u16()).unwrap();
        central.write_u32::<LittleEndian>(0).unwrap(); // time, date
        central.write_u32::<LittleEndian>(0).unwrap(); // crc
        central.write_u32::<LittleEndian>(compressed).unwrap();
        central.write_u32::<LittleEndian>(uncompressed).unwrap();
        central.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(extra.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap(); // comment len
        central.write_u16::<LittleEndian>(0).unwrap(); // disk start
        central.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        central.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        central.write_u32::<LittleEndian>(lfh_offset).unwrap();
        central.extend_from_slice(name);
        central.extend_from_slice(&extra);
    }

    let cd_offset = out.len() as u64;
    let cd_size = central.len() as u64;
    let count = entries.len() as u64;
    out.extend_from_slice(&central);

    if opts.zip64 {
        let eocd64_offset = out.len() as u64;
        out.extend_from_slice(Zip64EOCD::SIGNATURE);
        out.write_u64::<LittleEndian>(44).unwrap(); // remaining record size
        out.write_u16::<LittleEndian>(45).unwrap();
        out.write_u16::<LittleEndian>(45).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(count).unwrap();
        out.write_u64::<LittleEndian>(count).unwrap();
        out.write_u64::<LittleEndian>(cd_size).unwrap();
        out.write_u64::<LittleEndian>(cd_offset).unwrap();

        out.extend_from_slice(Zip64EOCDLocator::SIGNATURE);
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(eocd64_offset).unwrap();
        out.write_u32::<LittleEndian>(1).unwrap();
    }

    let (entries16, cd_size32, cd_offset32) = if opts.zip64 {
        (0xFFFF, 0xFFFF_FFFF, 0xFFFF_FFFF)
    } else {
        (count as u16, cd_size as u32, cd_offset as u32)
    };
    out.extend_from_slice(EndOfCentralDirectory::SIGNATURE);
    out.write_u16::<LittleEndian>(opts.disk_number).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(entries16).unwrap();
    out.write_u16::<LittleEndian>(entries16).unwrap();
    out.write_u32::<LittleEndian>(cd_size32).unwrap();
    out.write_u32::<LittleEndian>(cd_offset32).unwrap();
    out.write_u16::<LittleEndian>(opts.comment.len() as u16).unwrap();
    out.extend_from_slice(opts.comment);
    out
}

/// Deterministic filler that DEFLATE cannot shrink much.
pub fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // keep clear of '\n' so the filler never ends a line
            (state as u8) | 0x80
        })
        .collect()
}
