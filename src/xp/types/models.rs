//! Core data structures for REXPaint images.
//!
//! This module defines the in-memory model produced by the decoder and
//! consumed by the encoder:
//! - [`Color`] and [`Cell`], the per-glyph values
//! - [`Layer`], a rectangular grid of cells in a declared [`StorageOrder`]
//! - [`XpDocument`], the versioned stack of layers

use super::error::{Result, XpError};

/// The glyph REXPaint stores in a cell the artist never touched.
pub const EMPTY_CHAR: char = ' ';

/// Foreground color of a cell the artist never touched.
pub const DEFAULT_FOREGROUND_COLOR: Color = Color::new(0, 0, 0);

/// Absolute magenta. REXPaint never renders this color, neither as foreground nor as
/// background. It is also the background of untouched cells.
pub const INVISIBLE_COLOR: Color = Color::new(255, 0, 255);

/// Format version written by current REXPaint releases.
pub const DEFAULT_VERSION: i32 = -1;

/// An RGB color as stored on disk, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns true for absolute magenta, the "do not render" sentinel.
    pub fn is_invisible(&self) -> bool {
        *self == INVISIBLE_COLOR
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// A single glyph with its foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }

    /// A cell as REXPaint initializes it before the artist touches it.
    pub const fn empty() -> Self {
        Self {
            ch: EMPTY_CHAR,
            fg: DEFAULT_FOREGROUND_COLOR,
            bg: INVISIBLE_COLOR,
        }
    }

    /// Returns true when the cell still holds the untouched triple
    /// (space, default foreground, invisible background).
    pub fn is_empty(&self) -> bool {
        self.ch == EMPTY_CHAR && self.fg == DEFAULT_FOREGROUND_COLOR && self.bg.is_invisible()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Physical arrangement of a layer's cells in memory.
///
/// REXPaint itself always stores cells column by column. Row-major is the
/// default for decoded layers because most consumers iterate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// Multipliers turning logical `(x, y)` into an index of the flat cell vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Strides {
    x: usize,
    y: usize,
}

impl Strides {
    fn new(order: StorageOrder, width: u32, height: u32) -> Self {
        match order {
            // [outer = height][inner = width]
            StorageOrder::RowMajor => Self { x: 1, y: width as usize },
            // [outer = width][inner = height]
            StorageOrder::ColumnMajor => Self { x: height as usize, y: 1 },
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.x + y as usize * self.y
    }
}

/// One rectangular grid of cells.
///
/// Cells are always addressed by logical `(x, y)`; the storage order only
/// affects the layout of [`Layer::cells`].
#[derive(Debug, Clone)]
pub struct Layer {
    width: u32,
    height: u32,
    order: StorageOrder,
    strides: Strides,
    cells: Vec<Cell>,
}

impl Layer {
    /// Creates a row-major layer filled with empty cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_order(width, height, StorageOrder::RowMajor)
    }

    /// Creates a layer filled with empty cells in the given storage order.
    pub fn with_order(width: u32, height: u32, order: StorageOrder) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            order,
            strides: Strides::new(order, width, height),
            cells: vec![Cell::empty(); len],
        }
    }

    /// Wraps cells that are already laid out in `order`.
    ///
    /// # Errors
    /// Returns [`XpError::CountMismatch`] if `cells` does not hold exactly
    /// `width * height` entries.
    pub fn from_cells(width: u32, height: u32, order: StorageOrder, cells: Vec<Cell>) -> Result<Self> {
        let expected = width as u64 * height as u64;
        if cells.len() as u64 != expected {
            return Err(XpError::CountMismatch {
                item_type: "layer cells",
                expected,
                found: cells.len() as u64,
            });
        }
        Ok(Self {
            width,
            height,
            order,
            strides: Strides::new(order, width, height),
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn order(&self) -> StorageOrder {
        self.order
    }

    /// The backing storage in physical order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cell at logical `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_cell(&self, x: u32, y: u32) -> Cell {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) out of bounds for {}x{} layer",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[self.strides.index(x, y)]
    }

    /// Checked variant of [`Layer::get_cell`].
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        if self.contains(x, y) {
            self.cells.get(self.strides.index(x, y))
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        if self.contains(x, y) {
            self.cells.get_mut(self.strides.index(x, y))
        } else {
            None
        }
    }

    /// Overwrites the cell at logical `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        match self.cell_mut(x, y) {
            Some(slot) => *slot = cell,
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} layer",
                x, y, self.width, self.height
            ),
        }
    }

    /// Number of cells the artist has touched.
    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy of this layer stored in `order`.
    pub fn to_order(&self, order: StorageOrder) -> Layer {
        self.clone().into_order(order)
    }

    /// Converts this layer to `order`, transposing the storage if needed.
    pub fn into_order(self, order: StorageOrder) -> Layer {
        if order == self.order {
            return self;
        }
        let strides = Strides::new(order, self.width, self.height);
        let mut cells = vec![Cell::empty(); self.cells.len()];
        for x in 0..self.width {
            for y in 0..self.height {
                cells[strides.index(x, y)] = self.cells[self.strides.index(x, y)];
            }
        }
        Layer {
            width: self.width,
            height: self.height,
            order,
            strides,
            cells,
        }
    }
}

/// Layers compare by logical content; the storage order is not part of equality.
impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        if self.order == other.order {
            return self.cells == other.cells;
        }
        (0..self.width).all(|x| {
            (0..self.height).all(|y| {
                self.cells[self.strides.index(x, y)] == other.cells[other.strides.index(x, y)]
            })
        })
    }
}

impl Eq for Layer {}

/// A parsed REXPaint image: a format version and a stack of layers.
///
/// Layer 0 is the bottom of the stack. Layers may differ in size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpDocument {
    pub version: i32,
    layers: Vec<Layer>,
}

impl XpDocument {
    pub fn new(version: i32) -> Self {
        Self {
            version,
            layers: Vec::new(),
        }
    }

    pub(crate) fn with_layers(version: i32, layers: Vec<Layer>) -> Self {
        Self { version, layers }
    }

    /// Appends a layer on top of the stack.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Default for XpDocument {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}
