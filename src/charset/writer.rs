use std::path::Path;

use anyhow::Context as _;

use crate::{
    charset::{reader::CharsetFormat, set::Charset},
    foundation::error::{CharpackError, CharpackResult},
};

/// Load address written in front of `.64c` output.
const C64_LOAD_ADDRESS: u16 = 0x3000;

/// Serialize `charset` in the given on-disk format.
pub fn encode_charset(charset: &Charset, format: CharsetFormat) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + charset.len() * 8);
    if format == CharsetFormat::C64 {
        out.extend_from_slice(&C64_LOAD_ADDRESS.to_le_bytes());
    }
    for g in charset.glyphs() {
        out.extend_from_slice(g.rows());
    }
    out
}

/// Write `charset` to `path`; the extension selects `.bin` or `.64c`.
pub fn write_charset(path: &Path, charset: &Charset) -> CharpackResult<()> {
    let format = CharsetFormat::from_path(path).ok_or_else(|| {
        CharpackError::export(format!(
            "charset output must end in .bin or .64c: {}",
            path.display()
        ))
    })?;
    std::fs::write(path, encode_charset(charset, format))
        .with_context(|| format!("write charset '{}'", path.display()))?;
    Ok(())
}
