use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CharpackError::load("x")
            .to_string()
            .contains("load error:")
    );
    assert!(
        CharpackError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CharpackError::export("x")
            .to_string()
            .contains("export error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CharpackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
