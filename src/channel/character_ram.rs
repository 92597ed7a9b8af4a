use crate::{
    channel::frame::{Frame, SCREEN_CELLS},
    charset::set::Charset,
    foundation::error::{CharpackError, CharpackResult},
};

/// Character-RAM channel: the charsets of an animation and the frames drawn from them.
///
/// Invariant (checked by [`CharacterRamChannel::validate`]): every frame's `charset_index` is a
/// valid index into [`CharacterRamChannel::charsets`], and every cell of that frame indexes a
/// glyph of the referenced charset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterRamChannel {
    pub(crate) charsets: Vec<Charset>,
    pub(crate) frames: Vec<Frame>,
}

impl CharacterRamChannel {
    /// Empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel from already-built parts. Structure is not checked here; see
    /// [`CharacterRamChannel::validate`].
    pub fn from_parts(charsets: Vec<Charset>, frames: Vec<Frame>) -> Self {
        Self { charsets, frames }
    }

    /// Charsets in index order.
    pub fn charsets(&self) -> &[Charset] {
        &self.charsets
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of `charset`, appending it when no equal charset (label and glyphs) exists yet.
    pub fn intern_charset(&mut self, charset: Charset) -> usize {
        if let Some(idx) = self.charsets.iter().position(|c| *c == charset) {
            return idx;
        }
        self.charsets.push(charset);
        self.charsets.len() - 1
    }

    /// Append frames from one imported source.
    ///
    /// When `charset` is given it is deduplicated against the existing charsets and the frames
    /// are tagged with its index; otherwise they use charset 0. Cells and durations are copied
    /// verbatim. Returns the charset index used.
    pub fn add_frames<'a>(
        &mut self,
        frames: impl IntoIterator<Item = (&'a [u8; SCREEN_CELLS], u32)>,
        charset: Option<Charset>,
    ) -> usize {
        let charset_index = charset.map_or(0, |cs| self.intern_charset(cs));
        for (cells, duration_ms) in frames {
            self.frames.push(Frame {
                cells: *cells,
                charset_index,
                duration_ms,
            });
        }
        charset_index
    }

    /// Append a single frame as-is.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Check the channel invariant, reporting the first violation.
    pub fn validate(&self) -> CharpackResult<()> {
        for (i, frame) in self.frames.iter().enumerate() {
            let Some(charset) = self.charsets.get(frame.charset_index) else {
                return Err(CharpackError::validation(format!(
                    "frame {i} references charset {} but the channel has {}",
                    frame.charset_index,
                    self.charsets.len()
                )));
            };
            if let Some(cell) = frame.cells.iter().position(|&c| usize::from(c) >= charset.len()) {
                return Err(CharpackError::validation(format!(
                    "frame {i} cell {cell} uses code {} but charset '{}' has {} glyphs",
                    frame.cells[cell],
                    charset.label(),
                    charset.len()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/character_ram.rs"]
mod tests;
