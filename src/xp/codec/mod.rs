//! Codec layer for glyph translation and compression.
//!
//! # Submodules
//!
//! - [`cp437`][]: CP437 ↔ Unicode glyph tables
//! - [`compression`][]: gzip detection and (de)compression

pub mod compression;
pub mod cp437;
