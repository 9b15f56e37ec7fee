//! Gzip envelope handling for .xp streams.
//!
//! REXPaint writes its images gzip-compressed, but plain streams are accepted
//! as well. Compressed input is recognized by the two-byte gzip magic number.

use std::io::{self, Cursor, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::trace;

use crate::xp::types::error::{Location, Result, XpError};

/// The first two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// A reader that yields the sniffed bytes again before the rest of the stream.
pub type Replay<R> = io::Chain<Cursor<Vec<u8>>, R>;

/// Peeks at the first two bytes of `reader` and reports whether they are the gzip magic.
///
/// The returned reader replays the peeked bytes, so the caller MUST continue
/// reading from it instead of the original reader. A stream shorter than two
/// bytes is reported as uncompressed and left for the decoder to reject.
pub fn sniff_gzip<R: Read>(mut reader: R) -> Result<(bool, Replay<R>)> {
    let mut magic = Vec::with_capacity(GZIP_MAGIC.len());
    reader
        .by_ref()
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut magic)
        .map_err(|source| XpError::Read {
            field: "gzip magic",
            location: Location::Header,
            source,
        })?;

    let compressed = magic == GZIP_MAGIC;
    trace!("Stream magic {:02x?}, gzip={}", magic, compressed);
    Ok((compressed, Cursor::new(magic).chain(reader)))
}

/// Inflates a complete gzip stream.
///
/// # Errors
/// Returns [`XpError::Decompression`] if the gzip header or payload is corrupt.
pub fn decompress<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    GzDecoder::new(reader)
        .read_to_end(&mut output)
        .map_err(|e| XpError::Decompression(format!("gzip stream: {}", e)))?;
    trace!("Decompressed gzip stream to {} bytes", output.len());
    Ok(output)
}

/// Wraps `data` in a gzip envelope.
///
/// `level` only trades speed for size; the decompressed bytes are identical.
pub fn compress(data: &[u8], level: Compression) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), level);
    encoder
        .write_all(data)
        .map_err(|e| XpError::Compression(format!("gzip write: {}", e)))?;
    let output = encoder
        .finish()
        .map_err(|e| XpError::Compression(format!("gzip finish: {}", e)))?;
    trace!(
        "Compressed {} bytes to {} bytes (level {})",
        data.len(),
        output.len(),
        level.level()
    );
    Ok(output)
}
