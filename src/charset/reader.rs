use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use crate::{
    charset::{
        glyph::{GLYPH_BYTES, Glyph},
        set::{Charset, MAX_GLYPHS},
    },
    foundation::error::{CharpackError, CharpackResult},
};

/// Largest charset file payload: 256 glyphs of 8 bytes.
pub const CHARSET_FILE_BYTES: usize = MAX_GLYPHS * GLYPH_BYTES;

/// On-disk charset flavours, told apart by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharsetFormat {
    /// `.bin`: raw glyph bytes.
    Bin,
    /// `.64c`: two-byte load address followed by raw glyph bytes.
    C64,
}

impl CharsetFormat {
    /// Detect the format from the file name; `None` for unsupported extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_str()?;
        if name.ends_with(".bin") {
            Some(Self::Bin)
        } else if name.ends_with(".64c") {
            Some(Self::C64)
        } else {
            None
        }
    }

    /// Number of header bytes preceding the glyph data.
    pub fn header_len(self) -> u64 {
        match self {
            Self::Bin => 0,
            Self::C64 => 2,
        }
    }
}

/// A charset loaded from disk plus the raw-slot → charset-index mapping.
///
/// Charset files routinely repeat glyphs (many blank slots); the loaded [`Charset`] keeps only
/// distinct glyphs, so screen codes authored against the raw file layout must be translated
/// through [`CharsetImage::remap_cells`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharsetImage {
    /// Deduplicated charset.
    pub charset: Charset,
    /// `slots[raw]` is the charset index of raw glyph `raw`.
    pub slots: Vec<u8>,
}

impl CharsetImage {
    /// Build from raw glyph bytes; a trailing partial glyph is ignored.
    pub fn from_bytes(label: impl Into<String>, bytes: &[u8]) -> Self {
        let mut charset = Charset::new(label);
        let mut slots = Vec::with_capacity(bytes.len() / GLYPH_BYTES);
        for chunk in bytes.chunks_exact(GLYPH_BYTES).take(MAX_GLYPHS) {
            let Some(glyph) = Glyph::from_slice(chunk) else {
                break;
            };
            // At most 256 raw glyphs, so the deduplicated insert always fits.
            if let Some(idx) = charset.insert(glyph) {
                slots.push(idx);
            }
        }
        Self { charset, slots }
    }

    /// Translate raw screen codes to indices in [`CharsetImage::charset`].
    ///
    /// Codes beyond the end of the file map to index 0.
    pub fn remap_cells(&self, cells: &mut [u8]) {
        for cell in cells {
            *cell = self.slots.get(usize::from(*cell)).copied().unwrap_or(0);
        }
    }
}

/// Read a charset from a `.bin` or `.64c` file.
#[tracing::instrument]
pub fn read_charset(path: &Path) -> CharpackResult<CharsetImage> {
    let Some(format) = CharsetFormat::from_path(path) else {
        return Err(CharpackError::load(format!(
            "only .bin and .64c are supported, unable to load {}",
            path.display()
        )));
    };

    let mut file = File::open(path)
        .map_err(|e| CharpackError::load(format!("failed to open {}: {e}", path.display())))?;

    let header = format.header_len();
    if header > 0 {
        file.seek(SeekFrom::Start(header)).map_err(|e| {
            CharpackError::load(format!("failed to seek {}: {e}", path.display()))
        })?;
    }

    let mut bytes = Vec::with_capacity(CHARSET_FILE_BYTES);
    file.take(CHARSET_FILE_BYTES as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| CharpackError::load(format!("failed to read {}: {e}", path.display())))?;
    if bytes.is_empty() {
        return Err(CharpackError::load(format!(
            "no data read from {}",
            path.display()
        )));
    }

    let image = CharsetImage::from_bytes(path.display().to_string(), &bytes);
    tracing::debug!(
        raw_glyphs = image.slots.len(),
        distinct = image.charset.len(),
        "charset loaded"
    );
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/charset/reader.rs"]
mod tests;
