use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use super::codec::compression;
use super::format;
use super::types::error::{Result, XpError};
use super::types::models::XpDocument;
use super::types::options::SaveOptions;

impl XpDocument {
    /// Saves to `path` the way REXPaint does: gzip at best compression, CP437 glyphs.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_options(path, &SaveOptions::default())
    }

    /// Saves to `path` with the given options.
    ///
    /// The image is fully encoded before the file is created, so an encoding
    /// failure never truncates an existing file.
    pub fn save_with_options(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_file_bytes(options)?;

        info!(
            "Writing XP file: {} ({} bytes, compressed={})",
            path.display(),
            data.len(),
            options.compress
        );
        let mut file = File::create(path).map_err(|source| XpError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(&data)
            .and_then(|_| file.flush())
            .map_err(|source| XpError::Persist {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Writes the same bytes [`XpDocument::save_with_options`] would put in a file.
    pub fn write_to<W: Write>(&self, mut writer: W, options: &SaveOptions) -> Result<()> {
        let data = self.to_file_bytes(options)?;
        writer.write_all(&data)?;
        Ok(())
    }

    /// Encodes the canonical uncompressed stream. Compression settings are ignored.
    pub fn to_bytes(&self, options: &SaveOptions) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(format::encoded_len(self));
        format::encode(&mut buf, self, options)?;
        Ok(buf)
    }

    fn to_file_bytes(&self, options: &SaveOptions) -> Result<Vec<u8>> {
        let raw = self.to_bytes(options)?;
        if !options.compress {
            return Ok(raw);
        }
        debug!("Compressing {} bytes", raw.len());
        compression::compress(&raw, options.level)
    }
}
