//! Archive format detection by magic bytes.
//!
//! Detection reads file content, never the file name: a `.rar`-named
//! file that fails both signature checks is rejected as unsupported.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ExtractionError;
use crate::Result;

/// ZIP local-file signature: `PK\x03\x04`.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// ZIP end-of-central-directory signature (empty archive): `PK\x05\x06`.
const ZIP_EMPTY_MAGIC: [u8; 4] = [0x50, 0x4B, 0x05, 0x06];

/// ZIP spanned-archive marker: `PK\x07\x08`.
const ZIP_SPANNED_MAGIC: [u8; 4] = [0x50, 0x4B, 0x07, 0x08];

/// RAR 4.x signature: `Rar!\x1A\x07\x00`.
const RAR4_MAGIC: [u8; 7] = [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00];

/// RAR 5.x signature: `Rar!\x1A\x07\x01\x00`.
const RAR5_MAGIC: [u8; 8] = [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00];

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// ZIP container.
    Zip,
    /// RAR container (4.x or 5.x).
    Rar,
}

/// Sniffs the container format from file content.
///
/// # Errors
///
/// Returns `ExtractionError::UnsupportedFormat` when the leading bytes
/// match neither a ZIP nor a RAR signature, and `ExtractionError::Io`
/// when the file cannot be read at all.
pub fn sniff_format(path: &Path) -> Result<ArchiveKind> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let mut read = 0;
    // A single read may return short even on regular files.
    while read < header.len() {
        let n = file.read(&mut header[read..])?;
        if n == 0 {
            break;
        }
        read += n;
    }

    sniff_bytes(&header[..read]).ok_or_else(|| ExtractionError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

/// Matches leading bytes against the known signatures.
fn sniff_bytes(header: &[u8]) -> Option<ArchiveKind> {
    if header.starts_with(&RAR5_MAGIC) || header.starts_with(&RAR4_MAGIC) {
        return Some(ArchiveKind::Rar);
    }
    if header.starts_with(&ZIP_MAGIC)
        || header.starts_with(&ZIP_EMPTY_MAGIC)
        || header.starts_with(&ZIP_SPANNED_MAGIC)
    {
        return Some(ArchiveKind::Zip);
    }
    None
}
