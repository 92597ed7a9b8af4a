use super::*;

fn scratch_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("unit_config");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_fill_missing_fields() {
    let cfg: AppConfig = serde_json::from_str(
        r#"{ "inputs": [ { "kind": "gif", "path": "a.gif" } ], "target_charsets": 3 }"#,
    )
    .unwrap();
    assert_eq!(cfg.target_charsets, 3);
    assert_eq!(cfg.similarity_percent, 80);
    assert_eq!(cfg.default_frame_duration_ms, 100);
    assert_eq!(cfg.inputs[0].kind, InputKind::Gif);
    assert_eq!(cfg.inputs[0].charset, None);
    cfg.validate().unwrap();
}

#[test]
fn from_path_resolves_relative_paths() {
    let dir = scratch_dir();
    let path = dir.join("charpack.json");
    std::fs::write(
        &path,
        r#"{
  "inputs": [ { "kind": "petscii", "path": "anim.c", "charset": "font.64c" } ],
  "output_dir": "build"
}"#,
    )
    .unwrap();

    let cfg = AppConfig::from_path(&path).unwrap();
    assert_eq!(cfg.inputs[0].path, dir.join("anim.c"));
    assert_eq!(cfg.inputs[0].charset, Some(dir.join("font.64c")));
    assert_eq!(cfg.output_dir, dir.join("build"));
}

#[test]
fn validate_rejects_bad_settings() {
    let mut cfg = AppConfig::default();
    assert!(cfg.validate().is_err());

    cfg.inputs.push(InputSpec {
        kind: InputKind::Petscii,
        path: PathBuf::from("a.c"),
        charset: None,
    });
    cfg.validate().unwrap();

    cfg.target_charsets = 0;
    assert!(cfg.validate().is_err());
    cfg.target_charsets = 2;
    cfg.similarity_percent = 101;
    assert!(cfg.validate().is_err());
    cfg.similarity_percent = 80;
    cfg.background_color = 16;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_reported() {
    let path = scratch_dir().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = AppConfig::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"));
}
