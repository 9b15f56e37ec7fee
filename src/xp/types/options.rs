//! Options controlling how documents are decoded and encoded.

use std::fmt;
use std::sync::Arc;

use flate2::Compression;

use super::models::StorageOrder;
use crate::xp::codec::cp437::{self, Codepage};

/// Maps a stored code to a glyph. Must never fail.
pub type CharDecoder = Box<dyn Fn(i32) -> char + Send + Sync>;

/// Maps a glyph to a stored code. Must never fail.
pub type CharEncoder = Box<dyn Fn(char) -> i32 + Send + Sync>;

/// Controls how .xp data is loaded.
#[derive(Default)]
pub struct LoadOptions {
    /// Storage order of the decoded layers. Row-major unless set otherwise;
    /// [`StorageOrder::ColumnMajor`] keeps REXPaint's native layout.
    pub order: StorageOrder,

    /// Overrides the CP437 table, e.g. for images drawn with a custom font.
    pub decoder: Option<CharDecoder>,
}

impl LoadOptions {
    /// Keep cells in the column-major layout used on disk.
    pub fn column_major(self) -> Self {
        self.with_order(StorageOrder::ColumnMajor)
    }

    pub fn with_order(mut self, order: StorageOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_decoder<F>(mut self, decoder: F) -> Self
    where
        F: Fn(i32) -> char + Send + Sync + 'static,
    {
        self.decoder = Some(Box::new(decoder));
        self
    }

    /// Decode glyphs through `codepage` instead of the default table.
    pub fn with_codepage<C: Codepage + 'static>(self, codepage: C) -> Self {
        self.with_decoder(move |code| codepage.decode(code))
    }

    pub(crate) fn decode_char(&self, code: i32) -> char {
        match &self.decoder {
            Some(decoder) => decoder(code),
            None => cp437::decode(code),
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("order", &self.order)
            .field("decoder", &self.decoder.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Controls how .xp data is saved.
pub struct SaveOptions {
    /// Wrap the output in gzip, as REXPaint does. Defaults to true.
    pub compress: bool,

    /// Gzip compression level. Defaults to the best compression.
    pub level: Compression,

    /// Overrides the CP437 table when turning glyphs back into codes.
    pub encoder: Option<CharEncoder>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            compress: true,
            level: Compression::best(),
            encoder: None,
        }
    }
}

impl SaveOptions {
    /// Write the raw stream without a gzip envelope.
    pub fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }

    pub fn with_level(mut self, level: Compression) -> Self {
        self.level = level;
        self
    }

    pub fn with_encoder<F>(mut self, encoder: F) -> Self
    where
        F: Fn(char) -> i32 + Send + Sync + 'static,
    {
        self.encoder = Some(Box::new(encoder));
        self
    }

    /// Encode glyphs through `codepage` instead of the default table.
    pub fn with_codepage<C: Codepage + 'static>(self, codepage: C) -> Self {
        self.with_encoder(move |ch| codepage.encode(ch))
    }

    pub(crate) fn encode_char(&self, ch: char) -> i32 {
        match &self.encoder {
            Some(encoder) => encoder(ch),
            None => cp437::encode(ch),
        }
    }
}

impl fmt::Debug for SaveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveOptions")
            .field("compress", &self.compress)
            .field("level", &self.level)
            .field("encoder", &self.encoder.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Shares one codepage between a [`LoadOptions`] and a [`SaveOptions`].
pub fn codepage_options<C: Codepage + 'static>(codepage: C) -> (LoadOptions, SaveOptions) {
    let shared = Arc::new(codepage);
    let decoding = Arc::clone(&shared);
    let load = LoadOptions::default().with_decoder(move |code| decoding.decode(code));
    let save = SaveOptions::default().with_encoder(move |ch| shared.encode(ch));
    (load, save)
}
