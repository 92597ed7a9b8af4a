use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_charset_reader");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn format_follows_extension() {
    assert_eq!(
        CharsetFormat::from_path(Path::new("a/font.bin")),
        Some(CharsetFormat::Bin)
    );
    assert_eq!(
        CharsetFormat::from_path(Path::new("font.64c")),
        Some(CharsetFormat::C64)
    );
    assert_eq!(CharsetFormat::from_path(Path::new("font.png")), None);
}

#[test]
fn from_bytes_dedups_and_records_slots() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x00; 8]);
    bytes.extend_from_slice(&[0xFF; 8]);
    bytes.extend_from_slice(&[0x00; 8]);
    bytes.extend_from_slice(&[0xAA; 8]);
    bytes.extend_from_slice(&[0x12, 0x34, 0x56]); // partial glyph

    let image = CharsetImage::from_bytes("mem", &bytes);
    assert_eq!(image.charset.len(), 3);
    assert_eq!(image.slots, vec![0, 1, 0, 2]);

    let mut cells = [3u8, 2, 1, 0, 200];
    image.remap_cells(&mut cells);
    assert_eq!(cells, [2, 0, 1, 0, 0]);
}

#[test]
fn full_file_yields_all_raw_glyphs() {
    let bytes: Vec<u8> = (0..CHARSET_FILE_BYTES).map(|i| (i / 8) as u8).collect();
    let image = CharsetImage::from_bytes("full", &bytes);
    assert_eq!(image.slots.len(), MAX_GLYPHS);
    assert_eq!(image.charset.len(), MAX_GLYPHS);
}

#[test]
fn read_skips_64c_header() {
    let path = scratch("font.64c");
    let mut bytes = vec![0x00, 0x30];
    bytes.extend_from_slice(&[0xFF; 8]);
    bytes.extend_from_slice(&[0x81; 8]);
    std::fs::write(&path, &bytes).unwrap();

    let image = read_charset(&path).unwrap();
    assert_eq!(image.charset.glyphs(), &[Glyph::FULL, Glyph::new([0x81; 8])]);
    assert!(image.charset.label().ends_with("font.64c"));
}

#[test]
fn read_rejects_unknown_extension_and_empty_file() {
    let err = read_charset(Path::new("font.txt")).unwrap_err();
    assert!(matches!(err, CharpackError::Load(_)));

    let path = scratch("empty.bin");
    std::fs::write(&path, []).unwrap();
    let err = read_charset(&path).unwrap_err();
    assert!(err.to_string().contains("no data read"));

    let err = read_charset(&scratch("missing.bin")).unwrap_err();
    assert!(err.to_string().contains("failed to open"));
}
