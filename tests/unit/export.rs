use std::path::PathBuf;

use super::*;
use crate::{
    channel::frame::{SCREEN_CELLS, ScreenFrame},
    charset::{glyph::Glyph, reader::read_charset, set::Charset},
};

fn sample() -> AnimSourceData {
    let mut data = AnimSourceData::new(100);
    let screens = [
        ScreenFrame {
            cells: [1; SCREEN_CELLS],
            color_ram: Some([5; SCREEN_CELLS]),
            border: 14,
            background: 6,
            duration_ms: 40,
        },
        ScreenFrame {
            cells: [0; SCREEN_CELLS],
            color_ram: Some([2; SCREEN_CELLS]),
            border: 0,
            background: 0,
            duration_ms: 0,
        },
    ];
    data.import_screens(
        &screens,
        Some(Charset::from_glyphs("a", [Glyph::BLANK, Glyph::FULL])),
    );
    data
}

#[test]
fn manifest_aligns_channels_by_frame() {
    let m = build_manifest(&sample()).unwrap();
    assert_eq!(m.charsets, vec!["charset_0.bin".to_owned()]);
    assert_eq!(m.frames.len(), 2);
    assert_eq!(m.frames[0].border, Some(14));
    assert_eq!(m.frames[0].color_ram.as_ref().unwrap()[999], 5);
    assert_eq!(m.frames[1].duration_ms, 100);
    assert_eq!(m.frames[1].cells.len(), SCREEN_CELLS);
}

#[test]
fn export_writes_charsets_and_manifest() {
    let dir = PathBuf::from("target").join("unit_export");
    let _ = std::fs::remove_dir_all(&dir);
    let report = ReductionReport::default();
    export_animation(&dir, &sample(), Some(&report)).unwrap();

    let image = read_charset(&dir.join("charset_0.bin")).unwrap();
    assert_eq!(image.charset.glyphs(), &[Glyph::BLANK, Glyph::FULL]);

    let text = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["frames"][0]["background"], 6);
    assert!(json["reduction"].is_object());
    let back: ExportManifest = serde_json::from_value(json).unwrap();
    assert_eq!(back.frames.len(), 2);
}

#[test]
fn missing_character_channel_is_an_export_error() {
    let err = build_manifest(&AnimSourceData::new(100)).unwrap_err();
    assert!(matches!(err, CharpackError::Export(_)));
}
