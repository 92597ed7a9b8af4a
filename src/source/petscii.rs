//! Reader for the C source export of Marq's PETSCII editor.
//!
//! Each frame is a block of the form:
//!
//! ```text
//! unsigned char frame0000[]={// border,bg,chars,colors
//! 14, 6,
//! 32,32,32,...
//! ...
//! };
//! ```
//!
//! The second line holds the border and background colours; the remaining values are 1000 screen
//! codes followed by 1000 colour-RAM entries.

use std::path::Path;

use crate::{
    channel::frame::{SCREEN_CELLS, ScreenFrame},
    foundation::error::{CharpackError, CharpackResult},
};

const FRAME_MARKER: &str = "unsigned char frame";

/// One PETSCII editor frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetsciiFrame {
    /// Identifier following `frame` in the array name.
    pub id: String,
    /// Border colour.
    pub border: u8,
    /// Background colour.
    pub background: u8,
    /// Screen codes, row-major.
    pub cells: [u8; SCREEN_CELLS],
    /// Colour RAM, row-major.
    pub color_ram: [u8; SCREEN_CELLS],
}

impl PetsciiFrame {
    /// Screen for ingestion. PETSCII exports carry no timing, so the duration is left at `0`.
    pub fn to_screen(&self) -> ScreenFrame {
        ScreenFrame {
            cells: self.cells,
            color_ram: Some(self.color_ram),
            border: self.border,
            background: self.background,
            duration_ms: 0,
        }
    }
}

/// A parsed PETSCII export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetsciiAnim {
    /// Source label (file name).
    pub source: String,
    /// Frames in file order.
    pub frames: Vec<PetsciiFrame>,
}

/// Read a PETSCII editor `.c` export.
#[tracing::instrument]
pub fn read_petscii(path: &Path) -> CharpackResult<PetsciiAnim> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CharpackError::load(format!("failed to open {}: {e}", path.display())))?;
    parse_petscii(path.display().to_string(), &text)
}

/// Parse the text of a PETSCII editor export.
pub fn parse_petscii(source: impl Into<String>, text: &str) -> CharpackResult<PetsciiAnim> {
    let source = source.into();
    let mut frames = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(FRAME_MARKER) {
        let after = &rest[start + FRAME_MARKER.len()..];
        let id_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let (id, tail) = after.split_at(id_len);
        let Some(tail) = tail.strip_prefix("[]={") else {
            // Some other `unsigned char frame...` declaration.
            rest = after;
            continue;
        };
        let Some(end) = tail.find("};") else {
            return Err(CharpackError::load(format!(
                "{source}: frame{id} is not terminated"
            )));
        };
        frames.push(parse_frame(&source, id, &tail[..end])?);
        rest = &tail[end + 2..];
    }

    tracing::debug!(source = %source, frames = frames.len(), "PETSCII export parsed");
    Ok(PetsciiAnim { source, frames })
}

fn parse_frame(source: &str, id: &str, body: &str) -> CharpackResult<PetsciiFrame> {
    let mut frame = PetsciiFrame {
        id: id.to_owned(),
        border: 0,
        background: 0,
        cells: [0; SCREEN_CELLS],
        color_ram: [0; SCREEN_CELLS],
    };

    // Line 0 is whatever follows the opening brace (usually a comment).
    let mut lines = body.lines().skip(1);

    if let Some(line) = lines.next() {
        let colors = parse_values(source, id, line)?;
        if let [border, background, ..] = colors[..] {
            frame.border = border;
            frame.background = background;
        }
    }

    let mut data = Vec::with_capacity(2 * SCREEN_CELLS);
    for line in lines {
        data.extend(parse_values(source, id, line)?);
    }
    if data.len() >= 2 * SCREEN_CELLS {
        frame.cells.copy_from_slice(&data[..SCREEN_CELLS]);
        frame.color_ram.copy_from_slice(&data[SCREEN_CELLS..2 * SCREEN_CELLS]);
    } else {
        tracing::warn!(
            source,
            frame = id,
            values = data.len(),
            "frame has fewer than 2000 values, leaving it blank"
        );
    }
    Ok(frame)
}

fn parse_values(source: &str, id: &str, line: &str) -> CharpackResult<Vec<u8>> {
    let line = line.split("//").next().unwrap_or_default();
    line.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<u8>().map_err(|e| {
                CharpackError::load(format!("{source}: frame{id}: bad value '{v}': {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/source/petscii.rs"]
mod tests;
