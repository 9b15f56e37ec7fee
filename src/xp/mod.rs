//! Core REXPaint .xp module.
//!
//! ```text
//! bytes ─► codec::compression ─► format ─► codec::cp437 ─► XpDocument
//! XpDocument ─► format (column-major) ─► codec::compression ─► bytes
//! ```

pub mod codec;
pub mod format;
pub mod types;

mod reader;
mod utils;
mod writer;

pub use types::error::{Location, Result, XpError};
pub use types::models::{
    Cell, Color, Layer, StorageOrder, XpDocument, DEFAULT_FOREGROUND_COLOR, DEFAULT_VERSION, EMPTY_CHAR,
    INVISIBLE_COLOR,
};
pub use types::options::{codepage_options, CharDecoder, CharEncoder, LoadOptions, SaveOptions};
