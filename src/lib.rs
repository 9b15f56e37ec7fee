//! # rexpaint-xp
//!
//! A reader and writer for REXPaint `.xp` images.
//! Handles gzip-compressed and plain streams, translates glyphs between CP437
//! and Unicode, and exposes layers in row-major or the native column-major order.
//!
//! **Note:** The CP437 table follows REXPaint's default font. Images drawn
//! with a custom font stay valid but may display different glyphs; pass a
//! custom decoder/encoder through [`LoadOptions`] and [`SaveOptions`].
pub mod xp;

// Re-export the main types for convenience
pub use xp::{
    codec::compression::{compress, decompress, sniff_gzip, GZIP_MAGIC},
    codec::cp437::{self, Codepage, Cp437},
    codepage_options, Cell, Color, Layer, LoadOptions, Location, Result, SaveOptions, StorageOrder, XpDocument,
    XpError, DEFAULT_FOREGROUND_COLOR, DEFAULT_VERSION, EMPTY_CHAR, INVISIBLE_COLOR,
};
pub use flate2::Compression;
