//! Layer bodies: the cell stream following each layer header.
//!
//! Cells are always stored column by column on disk (x outer, y inner),
//! 10 bytes each:
//! ```text
//! [4 bytes] Glyph code (little-endian i32, CP437 by default)
//! [3 bytes] Foreground R, G, B
//! [3 bytes] Background R, G, B
//! ```

use std::io::{Read, Write};

use log::trace;

use super::header::{self, LayerHeader};
use crate::xp::types::error::{Location, Result};
use crate::xp::types::models::{Cell, Layer, StorageOrder};
use crate::xp::types::options::{LoadOptions, SaveOptions};
use crate::xp::utils;

/// Size of one encoded cell in bytes.
pub const CELL_SIZE: usize = 10;

/// Upper bound on cells reserved before any of them has been read.
/// Larger layers grow as data arrives, so a corrupt header cannot force a huge allocation.
const MAX_PREALLOCATED_CELLS: u64 = 1 << 16;

/// Reads one layer (header and cells) and lays it out in `options.order`.
pub fn parse<R: Read>(reader: &mut R, index: u32, options: &LoadOptions) -> Result<Layer> {
    let dims = header::parse_layer(reader, index)?;

    let mut cells = Vec::with_capacity(dims.cell_count().min(MAX_PREALLOCATED_CELLS) as usize);
    for x in 0..dims.width {
        for y in 0..dims.height {
            let location = Location::Cell { layer: index, x, y };
            cells.push(parse_cell(reader, location, options)?);
        }
    }

    let layer = Layer::from_cells(dims.width, dims.height, StorageOrder::ColumnMajor, cells)?;
    if options.order != StorageOrder::ColumnMajor {
        trace!("Transposing layer {} to {:?}", index, options.order);
    }
    Ok(layer.into_order(options.order))
}

fn parse_cell<R: Read>(reader: &mut R, location: Location, options: &LoadOptions) -> Result<Cell> {
    let code = utils::read_i32(reader, "codepoint", location)?;
    let fg = utils::read_color(reader, "foreground color", location)?;
    let bg = utils::read_color(reader, "background color", location)?;

    // NUL is drawn exactly like a space by REXPaint.
    let ch = match options.decode_char(code) {
        '\0' => ' ',
        ch => ch,
    };
    Ok(Cell::new(ch, fg, bg))
}

/// Writes one layer in column-major order, whatever its in-memory layout.
pub fn write<W: Write>(writer: &mut W, layer: &Layer, index: u32, options: &SaveOptions) -> Result<()> {
    let dims = LayerHeader {
        width: layer.width(),
        height: layer.height(),
    };
    header::write_layer(writer, index, &dims)?;

    for x in 0..dims.width {
        for y in 0..dims.height {
            let location = Location::Cell { layer: index, x, y };
            let cell = layer.get_cell(x, y);
            utils::write_i32(writer, options.encode_char(cell.ch), "codepoint", location)?;
            utils::write_color(writer, cell.fg, "foreground color", location)?;
            utils::write_color(writer, cell.bg, "background color", location)?;
        }
    }
    Ok(())
}
