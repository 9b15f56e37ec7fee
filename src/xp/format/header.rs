//! File and layer headers.
//!
//! # File Header
//! ```text
//! [4 bytes] Format version (little-endian i32)
//! [4 bytes] Layer count    (little-endian u32)
//! ```
//!
//! # Layer Header
//! ```text
//! [4 bytes] Width  (little-endian u32)
//! [4 bytes] Height (little-endian u32)
//! ```

use std::io::{Read, Write};

use log::{debug, trace};

use crate::xp::types::error::{Location, Result};
use crate::xp::utils;

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 8;

/// Size of a layer header in bytes.
pub const LAYER_HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub version: i32,
    pub layer_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerHeader {
    pub width: u32,
    pub height: u32,
}

impl LayerHeader {
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Parses the file header from the start of an uncompressed stream.
pub fn parse<R: Read>(reader: &mut R) -> Result<FileHeader> {
    let version = utils::read_i32(reader, "version", Location::Header)?;
    let layer_count = utils::read_u32(reader, "layer count", Location::Header)?;
    debug!("File header: version={}, layers={}", version, layer_count);
    Ok(FileHeader { version, layer_count })
}

pub fn write<W: Write>(writer: &mut W, header: &FileHeader) -> Result<()> {
    utils::write_i32(writer, header.version, "version", Location::Header)?;
    utils::write_u32(writer, header.layer_count, "layer count", Location::Header)
}

/// Parses the width/height pair that opens each layer.
pub fn parse_layer<R: Read>(reader: &mut R, index: u32) -> Result<LayerHeader> {
    let location = Location::Layer { index };
    let width = utils::read_u32(reader, "layer width", location)?;
    let height = utils::read_u32(reader, "layer height", location)?;
    trace!("Layer {}: {}x{}", index, width, height);
    Ok(LayerHeader { width, height })
}

pub fn write_layer<W: Write>(writer: &mut W, index: u32, header: &LayerHeader) -> Result<()> {
    let location = Location::Layer { index };
    utils::write_u32(writer, header.width, "layer width", location)?;
    utils::write_u32(writer, header.height, "layer height", location)
}
