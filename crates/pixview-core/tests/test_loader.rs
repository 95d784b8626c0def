mod common;

use std::path::PathBuf;

use pixview_core::error::PixviewError;
use pixview_core::geometry::Size;
use pixview_core::loader::{load, read_data_uri, FileInput};
use pixview_core::source::{DataUri, DecodedImage};

#[test]
fn test_load_png_produces_data_uri() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "red.png", 40, 30);

    let image = load(&path).unwrap();

    assert!(image.source.uri.as_str().starts_with("data:image/png;base64,"));
    assert_eq!(image.source.uri.media_type(), "image/png");
    assert_eq!(image.source.natural, Size::new(40.0, 30.0));
    assert_eq!(image.pixels.dimensions(), (40, 30));
}

#[test]
fn test_data_uri_holds_full_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "red.png", 8, 8);

    let uri = read_data_uri(&path).unwrap();

    assert_eq!(uri.decode_bytes().unwrap(), std::fs::read(&path).unwrap());
}

#[test]
fn test_media_type_comes_from_content_not_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = common::write_png(dir.path(), "red.png", 4, 4);
    let disguised = dir.path().join("photo.jpg");
    std::fs::copy(&png, &disguised).unwrap();

    let uri = read_data_uri(&disguised).unwrap();
    assert_eq!(uri.media_type(), "image/png");
}

#[test]
fn test_non_image_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "definitely not pixels").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, PixviewError::UnsupportedMediaType(_)), "got: {err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, PixviewError::Io(_)), "got: {err}");
}

#[test]
fn test_truncated_image_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "full.png", 64, 64);
    let bytes = std::fs::read(&path).unwrap();
    let truncated = dir.path().join("truncated.png");
    std::fs::write(&truncated, &bytes[..bytes.len() / 3]).unwrap();

    let err = load(&truncated).unwrap_err();
    assert!(matches!(err, PixviewError::ImageError(_)), "got: {err}");
}

#[test]
fn test_parse_rejects_foreign_strings() {
    assert!(DataUri::parse("https://example.com/cat.png").is_err());
    assert!(DataUri::parse("data:text/plain,hello").is_err());

    let uri = DataUri::parse("data:image/gif;base64,R0lGODlh").unwrap();
    assert_eq!(uri.media_type(), "image/gif");
}

#[test]
fn test_decode_rejects_corrupt_payload() {
    let uri = DataUri::parse("data:image/png;base64,@@not-base64@@").unwrap();
    let err = DecodedImage::decode(uri).unwrap_err();
    assert!(matches!(err, PixviewError::InvalidDataUri(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// File input control
// ---------------------------------------------------------------------------

#[test]
fn test_same_file_needs_reset_to_fire_again() {
    let mut input = FileInput::new(vec!["png".into()]);
    let path = PathBuf::from("/tmp/a.png");

    let first = input.select(path.clone()).unwrap();
    assert!(input.select(path.clone()).is_none());

    input.reset();
    assert!(input.value().is_none());

    let second = input.select(path).unwrap();
    assert!(second.ticket > first.ticket);
    assert_eq!(input.latest(), second.ticket);
}

#[test]
fn test_different_file_fires_without_reset() {
    let mut input = FileInput::new(Vec::new());
    let a = input.select(PathBuf::from("a.png")).unwrap();
    let b = input.select(PathBuf::from("b.png")).unwrap();
    assert_eq!(b.ticket.generation(), a.ticket.generation() + 1);
    assert_eq!(input.value(), Some(std::path::Path::new("b.png")));
}
