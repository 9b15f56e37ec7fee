#![allow(dead_code)]

use rexpaint_xp::{Cell, Color, Layer, XpDocument, DEFAULT_VERSION};

pub const WHITE: Color = Color::new(255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);

/// (x, glyph, fg, bg) painted on row 0 of the simple fixture.
pub const SIMPLE_ROW: &[(u32, char, Color, Color)] = &[
    (0, 'x', Color::new(255, 0, 0), Color::new(0, 128, 255)),
    (1, 'p', Color::new(255, 255, 0), Color::new(191, 0, 255)),
    (2, 'l', Color::new(128, 255, 0), Color::new(255, 0, 191)),
    (3, 'o', Color::new(0, 255, 0), Color::new(255, 0, 128)),
    (4, 'a', Color::new(0, 255, 128), Color::new(255, 0, 64)),
    (5, 'd', Color::new(0, 255, 191), Color::new(158, 158, 158)),
    (6, 'e', Color::new(0, 255, 255), Color::new(158, 134, 100)),
    (7, 'r', Color::new(0, 191, 255), Color::new(255, 255, 255)),
];

pub const SIMPLE_WIDTH: u32 = 10;
pub const SIMPLE_HEIGHT: u32 = 15;

/// A 10x15 layer with a short word painted along the top row.
pub fn simple_layer() -> Layer {
    let mut layer = Layer::new(SIMPLE_WIDTH, SIMPLE_HEIGHT);
    for &(x, ch, fg, bg) in SIMPLE_ROW {
        layer.set_cell(x, 0, Cell::new(ch, fg, bg));
    }
    layer
}

/// A second 10x15 layer with white-on-black text along the bottom row.
pub fn banner_layer() -> Layer {
    let mut layer = Layer::new(SIMPLE_WIDTH, SIMPLE_HEIGHT);
    for (x, ch) in "EXPLOADER".chars().enumerate() {
        layer.set_cell(x as u32, SIMPLE_HEIGHT - 1, Cell::new(ch, WHITE, BLACK));
    }
    layer
}

pub fn simple_document() -> XpDocument {
    let mut document = XpDocument::new(DEFAULT_VERSION);
    document.add_layer(simple_layer());
    document
}

pub fn multilayer_document() -> XpDocument {
    let mut document = simple_document();
    document.add_layer(banner_layer());
    document
}

pub fn push_header(buf: &mut Vec<u8>, version: i32, layer_count: u32) {
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&layer_count.to_le_bytes());
}

pub fn push_layer_header(buf: &mut Vec<u8>, width: u32, height: u32) {
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
}

pub fn push_cell(buf: &mut Vec<u8>, code: i32, fg: [u8; 3], bg: [u8; 3]) {
    buf.extend_from_slice(&code.to_le_bytes());
    buf.extend_from_slice(&fg);
    buf.extend_from_slice(&bg);
}

/// Appends a layer in wire order, asking `cell_at(x, y)` for each cell.
pub fn push_layer<F>(buf: &mut Vec<u8>, width: u32, height: u32, mut cell_at: F)
where
    F: FnMut(u32, u32) -> (i32, [u8; 3], [u8; 3]),
{
    push_layer_header(buf, width, height);
    for x in 0..width {
        for y in 0..height {
            let (code, fg, bg) = cell_at(x, y);
            push_cell(buf, code, fg, bg);
        }
    }
}

/// The uncompressed bytes REXPaint writes for [`simple_document`].
pub fn simple_plain_bytes() -> Vec<u8> {
    let mut buf = Vec::new();
    push_header(&mut buf, DEFAULT_VERSION, 1);
    push_layer(&mut buf, SIMPLE_WIDTH, SIMPLE_HEIGHT, |x, y| {
        match SIMPLE_ROW.iter().find(|(cx, ..)| y == 0 && *cx == x) {
            Some(&(_, ch, fg, bg)) => (ch as i32, fg.into(), bg.into()),
            None => (32, [0, 0, 0], [255, 0, 255]),
        }
    });
    buf
}

/// Compares two documents cell by cell through the logical accessor.
pub fn assert_documents_match(expected: &XpDocument, actual: &XpDocument) {
    assert_eq!(expected.version, actual.version, "version mismatch");
    assert_eq!(expected.layer_count(), actual.layer_count(), "layer count mismatch");

    for (i, (exp, act)) in expected.layers().iter().zip(actual.layers()).enumerate() {
        assert_eq!(
            (exp.width(), exp.height()),
            (act.width(), act.height()),
            "layer {} dimensions mismatch",
            i
        );
        for y in 0..exp.height() {
            for x in 0..exp.width() {
                assert_eq!(
                    exp.get_cell(x, y),
                    act.get_cell(x, y),
                    "layer {}, cell ({},{}) mismatch",
                    i,
                    x,
                    y
                );
            }
        }
    }
}
