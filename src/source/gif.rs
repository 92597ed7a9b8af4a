use std::{io::Cursor, path::Path};

use image::{AnimationDecoder as _, codecs::gif::GifDecoder};

use crate::{
    foundation::error::{CharpackError, CharpackResult},
    source::{bitmap::IndexedBitmap, palette::PaletteConverter},
};

/// One decoded GIF frame, already converted to palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifFrame {
    /// Full composited canvas.
    pub bitmap: IndexedBitmap,
    /// Frame delay in milliseconds (`0` when the file specifies none).
    pub delay_ms: u32,
}

/// A decoded GIF animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifAnimation {
    /// Source label (file name).
    pub source: String,
    /// Frames in playback order.
    pub frames: Vec<GifFrame>,
}

/// Read and convert a GIF file.
#[tracing::instrument(skip(converter))]
pub fn read_gif(path: &Path, converter: &dyn PaletteConverter) -> CharpackResult<GifAnimation> {
    let bytes = std::fs::read(path)
        .map_err(|e| CharpackError::load(format!("failed to open GIF {}: {e}", path.display())))?;
    decode_gif(path.display().to_string(), &bytes, converter)
}

/// Decode GIF bytes. Fully transparent pixels become the converter's background colour.
pub fn decode_gif(
    source: impl Into<String>,
    bytes: &[u8],
    converter: &dyn PaletteConverter,
) -> CharpackResult<GifAnimation> {
    let source = source.into();
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| CharpackError::load(format!("failed to read GIF {source}: {e}")))?;
    let decoded = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| CharpackError::load(format!("failed to decode GIF {source}: {e}")))?;
    if decoded.is_empty() {
        return Err(CharpackError::load(format!("no frames found in GIF {source}")));
    }

    let background = converter.background_index();
    let frames = decoded
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let delay_ms = if denom == 0 { 0 } else { numer / denom };
            let rgba = frame.into_buffer();
            let (width, height) = rgba.dimensions();
            let pixels = rgba
                .pixels()
                .map(|p| {
                    let [r, g, b, a] = p.0;
                    if a == 0 {
                        background
                    } else {
                        converter.rgb_to_index(r, g, b)
                    }
                })
                .collect();
            GifFrame {
                bitmap: IndexedBitmap {
                    width: width as usize,
                    height: height as usize,
                    pixels,
                },
                delay_ms,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(source = %source, frames = frames.len(), "GIF decoded");
    Ok(GifAnimation { source, frames })
}

#[cfg(test)]
#[path = "../../tests/unit/source/gif.rs"]
mod tests;
