//! Custom error types for the rexpaint-xp crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where in the stream a field was being read or written when an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The document header (version and layer count).
    Header,
    /// The width/height header of a layer.
    Layer { index: u32 },
    /// A single cell inside a layer, addressed by logical coordinates.
    Cell { layer: u32, x: u32, y: u32 },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Header => write!(f, "file header"),
            Location::Layer { index } => write!(f, "layer {}", index),
            Location::Cell { layer, x, y } => write!(f, "layer {} at ({},{})", layer, x, y),
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum XpError {
    /// An error originating from I/O operations not tied to a specific field.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoded image could not be written to the output file.
    #[error("Failed to write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixed-width field could not be read, usually because the stream ended early.
    #[error("Failed to read {field} in {location}: {source}")]
    Read {
        field: &'static str,
        location: Location,
        #[source]
        source: std::io::Error,
    },

    /// A field could not be written to the output sink.
    #[error("Failed to write {field} in {location}: {source}")]
    Write {
        field: &'static str,
        location: Location,
        #[source]
        source: std::io::Error,
    },

    /// The gzip envelope is malformed or the compressed stream is corrupt.
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// The gzip encoder failed while wrapping the output.
    #[error("Compression failed: {0}")]
    Compression(String),

    /// A declared count of items does not match the actual number of items found.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },

    /// The document holds more layers than the 32-bit layer count can describe.
    #[error("Too many layers to encode: {0} (maximum is {max})", max = u32::MAX)]
    TooManyLayers(usize),
}

impl XpError {
    /// Returns true when the error was caused by the input ending before a field was complete.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            XpError::Read { source, .. } if source.kind() == std::io::ErrorKind::UnexpectedEof
        )
    }
}

/// A convenience `Result` type alias using the crate's `XpError` type.
pub type Result<T> = std::result::Result<T, XpError>;
