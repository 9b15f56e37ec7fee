mod common;

use common::*;
use rexpaint_xp::{
    compress, Compression, Layer, LoadOptions, SaveOptions, StorageOrder, XpDocument, XpError, GZIP_MAGIC,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

fn load(path: &Path) -> XpDocument {
    XpDocument::load(path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

#[test]
fn loads_empty_canvas() {
    let dir = tempdir().expect("tempdir");
    let mut document = XpDocument::default();
    document.add_layer(Layer::new(60, 60));
    let bytes = compress(&document.to_bytes(&SaveOptions::default()).expect("encode"), Compression::best())
        .expect("compress");
    let path = write_fixture(&dir, "empty.xp", &bytes);

    let loaded = load(&path);
    assert_documents_match(&document, &loaded);
    assert_eq!(loaded.layers()[0].non_empty_count(), 0);
}

#[test]
fn loads_simple_files_compressed_and_plain() {
    let dir = tempdir().expect("tempdir");
    let plain = simple_plain_bytes();
    let gzipped = compress(&plain, Compression::best()).expect("compress");

    let fixtures = [
        ("simple.xp", gzipped.as_slice()),
        ("simple_plain.xp", plain.as_slice()),
    ];
    for (name, bytes) in fixtures {
        let path = write_fixture(&dir, name, bytes);
        let loaded = load(&path);
        assert_documents_match(&simple_document(), &loaded);
        assert_eq!(loaded.layers()[0].non_empty_count(), SIMPLE_ROW.len(), "{}", name);
    }
}

#[test]
fn loads_multilayer_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("multilayer.xp");
    multilayer_document().save(&path).expect("save");

    let loaded = load(&path);
    assert!(loaded.layer_count() >= 2, "expected multiple layers, got {}", loaded.layer_count());
    assert_documents_match(&multilayer_document(), &loaded);
    assert_eq!(loaded.layers()[1].get_cell(8, SIMPLE_HEIGHT - 1).ch, 'R');
}

#[test]
fn load_with_options_applies_order() {
    let dir = tempdir().expect("tempdir");
    let path = write_fixture(&dir, "simple_plain.xp", &simple_plain_bytes());

    let options = LoadOptions::default().column_major();
    let loaded = XpDocument::load_with_options(&path, &options).expect("load");
    assert!(loaded.layers().iter().all(|l| l.order() == StorageOrder::ColumnMajor));
    assert_documents_match(&simple_document(), &loaded);
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("non_existent.xp");
    match XpDocument::load(&path) {
        Err(XpError::Open { path: reported, .. }) => assert_eq!(reported, path),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("loading a missing file succeeded"),
    }
}

#[test]
fn broken_file_fails() {
    let dir = tempdir().expect("tempdir");
    let plain = simple_plain_bytes();
    let path = write_fixture(&dir, "broken.xp", &plain[..plain.len() - 7]);

    let err = XpDocument::load(&path).unwrap_err();
    assert!(err.is_truncation(), "unexpected error: {}", err);
}

#[test]
fn truncated_gzip_file_fails() {
    let dir = tempdir().expect("tempdir");
    let gzipped = compress(&simple_plain_bytes(), Compression::best()).expect("compress");
    let path = write_fixture(&dir, "broken.xp", &gzipped[..gzipped.len() / 2]);

    let err = XpDocument::load(&path).unwrap_err();
    assert!(matches!(err, XpError::Decompression(_)), "unexpected error: {}", err);
}

#[test]
fn save_and_reload() {
    let dir = tempdir().expect("tempdir");
    let source = write_fixture(&dir, "simple.xp", &simple_plain_bytes());
    let original = load(&source);

    let saved = dir.path().join("simple_saved.xp");
    original.save(&saved).expect("save");

    let raw = fs::read(&saved).expect("read saved file");
    assert_eq!(&raw[..2], &GZIP_MAGIC, "default save should be gzip-compressed");

    assert_documents_match(&original, &load(&saved));
}

#[test]
fn uncompressed_save_matches_rexpaint_bytes() {
    let dir = tempdir().expect("tempdir");
    let source = write_fixture(&dir, "simple_plain.xp", &simple_plain_bytes());
    let original = load(&source);

    let saved = dir.path().join("simple_saved_plain.xp");
    original
        .save_with_options(&saved, &SaveOptions::default().uncompressed())
        .expect("save");

    let original_data = fs::read(&source).expect("read source");
    let saved_data = fs::read(&saved).expect("read saved");
    assert_eq!(original_data.len(), saved_data.len(), "length mismatch");
    if let Some(i) = original_data.iter().zip(&saved_data).position(|(a, b)| a != b) {
        panic!(
            "saved data differs at byte {}: original=0x{:02x}, saved=0x{:02x}",
            i, original_data[i], saved_data[i]
        );
    }
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("out.xp");
    let err = simple_document().save(&path).unwrap_err();
    assert!(matches!(err, XpError::Create { .. }), "unexpected error: {}", err);
}
