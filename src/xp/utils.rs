//! Low-level fixed-width field I/O.
//!
//! Every field in an .xp stream is little-endian. Each helper tags failures
//! with the field name and its location so a truncated file reports exactly
//! where it ended.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::types::error::{Location, Result, XpError};
use super::types::models::Color;

pub fn read_i32(reader: &mut impl Read, field: &'static str, location: Location) -> Result<i32> {
    reader
        .read_i32::<LittleEndian>()
        .map_err(|source| XpError::Read { field, location, source })
}

pub fn read_u32(reader: &mut impl Read, field: &'static str, location: Location) -> Result<u32> {
    reader
        .read_u32::<LittleEndian>()
        .map_err(|source| XpError::Read { field, location, source })
}

/// Read three bytes as R, G, B.
pub fn read_color(reader: &mut impl Read, field: &'static str, location: Location) -> Result<Color> {
    let mut rgb = [0u8; 3];
    reader
        .read_exact(&mut rgb)
        .map_err(|source| XpError::Read { field, location, source })?;
    Ok(Color::from(rgb))
}

pub fn write_i32(writer: &mut impl Write, value: i32, field: &'static str, location: Location) -> Result<()> {
    writer
        .write_i32::<LittleEndian>(value)
        .map_err(|source| XpError::Write { field, location, source })
}

pub fn write_u32(writer: &mut impl Write, value: u32, field: &'static str, location: Location) -> Result<()> {
    writer
        .write_u32::<LittleEndian>(value)
        .map_err(|source| XpError::Write { field, location, source })
}

pub fn write_color(writer: &mut impl Write, color: Color, field: &'static str, location: Location) -> Result<()> {
    let rgb: [u8; 3] = color.into();
    writer
        .write_all(&rgb)
        .map_err(|source| XpError::Write { field, location, source })
}
