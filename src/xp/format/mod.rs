//! Binary layout of uncompressed .xp streams.
//!
//! This module maps between raw bytes and [`XpDocument`]. It knows nothing
//! about files or gzip; see [`crate::xp::reader`] and [`crate::xp::writer`]
//! for those.
//!
//! # Module Organization
//!
//! - [`header`]: File header and per-layer dimensions
//! - [`layer`]: Column-major cell streams
//!
//! # Architecture
//!
//! ```text
//! Stream Structure:
//! ┌─────────────────┐
//! │  File Header    │ ← header::parse()
//! ├─────────────────┤
//! │  Layer Header   │ ← header::parse_layer()
//! │  Cells (W×H)    │ ← layer::parse()
//! ├─────────────────┤
//! │  ...repeated    │
//! │  per layer      │
//! └─────────────────┘
//! ```

pub mod header;
pub mod layer;

use std::io::{Read, Write};

use log::debug;

use self::header::FileHeader;
use crate::xp::types::error::{Result, XpError};
use crate::xp::types::models::XpDocument;
use crate::xp::types::options::{LoadOptions, SaveOptions};

/// Upper bound on layers reserved before any of them has been read.
const MAX_PREALLOCATED_LAYERS: u32 = 16;

/// Decodes an uncompressed stream into a document.
///
/// The whole document is read or nothing is returned: any short read aborts
/// with an error naming the field and position.
pub fn decode<R: Read>(reader: &mut R, options: &LoadOptions) -> Result<XpDocument> {
    let file_header = header::parse(reader)?;

    let mut layers = Vec::with_capacity(file_header.layer_count.min(MAX_PREALLOCATED_LAYERS) as usize);
    for index in 0..file_header.layer_count {
        layers.push(layer::parse(reader, index, options)?);
    }

    debug!(
        "Decoded {} layer(s), version {}",
        layers.len(),
        file_header.version
    );
    Ok(XpDocument::with_layers(file_header.version, layers))
}

/// Encodes a document as an uncompressed, column-major stream.
pub fn encode<W: Write>(writer: &mut W, document: &XpDocument, options: &SaveOptions) -> Result<()> {
    let layer_count = u32::try_from(document.layer_count())
        .map_err(|_| XpError::TooManyLayers(document.layer_count()))?;

    header::write(
        writer,
        &FileHeader {
            version: document.version,
            layer_count,
        },
    )?;

    for (index, layer) in document.layers().iter().enumerate() {
        layer::write(writer, layer, index as u32, options)?;
    }
    Ok(())
}

/// Exact size of the uncompressed encoding of `document`.
pub fn encoded_len(document: &XpDocument) -> usize {
    document.layers().iter().fold(header::FILE_HEADER_SIZE, |acc, l| {
        acc + header::LAYER_HEADER_SIZE + l.width() as usize * l.height() as usize * layer::CELL_SIZE
    })
}
