use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::codec::compression;
use super::format;
use super::types::error::{Result, XpError};
use super::types::models::XpDocument;
use super::types::options::LoadOptions;

impl XpDocument {
    /// Loads an .xp file with default options: row-major layers, CP437 glyphs.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The gzip envelope is corrupt
    /// - The stream ends before every declared layer and cell was read
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_options(path, &LoadOptions::default())
    }

    /// Loads an .xp file from `path` with the given options.
    pub fn load_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening XP file: {}", path.display());
        let file = File::open(path).map_err(|source| XpError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_reader(BufReader::new(file), options)?;
        info!(
            "XP file loaded: version {}, {} layer(s)",
            document.version,
            document.layer_count()
        );
        Ok(document)
    }

    /// Decodes an .xp stream, gzip-compressed or plain.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let (compressed, reader) = compression::sniff_gzip(reader)?;
        if compressed {
            debug!("Gzip magic found, decompressing");
            Self::from_gzip_reader(reader, options)
        } else {
            debug!("No gzip magic, reading plain stream");
            Self::from_plain_reader(reader, options)
        }
    }

    /// Decodes a gzip-compressed stream. Fails on plain input.
    pub fn from_gzip_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        let data = compression::decompress(reader)?;
        Self::from_plain_reader(data.as_slice(), options)
    }

    /// Decodes an uncompressed stream without sniffing for gzip.
    pub fn from_plain_reader<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Self> {
        format::decode(&mut reader, options)
    }

    /// Decodes an in-memory .xp image, gzip-compressed or plain.
    pub fn from_bytes(bytes: &[u8], options: &LoadOptions) -> Result<Self> {
        Self::from_reader(bytes, options)
    }
}
