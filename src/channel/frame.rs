/// Screen width in character cells.
pub const SCREEN_WIDTH: usize = 40;
/// Screen height in character cells.
pub const SCREEN_HEIGHT: usize = 25;
/// Character cells per screen.
pub const SCREEN_CELLS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// One screen state of the character-RAM channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Screen codes, row-major; each indexes the charset at `charset_index`.
    pub cells: [u8; SCREEN_CELLS],
    /// Index into the owning channel's charset list.
    pub charset_index: usize,
    /// Display time in milliseconds.
    pub duration_ms: u32,
}

impl Frame {
    /// Frame with every cell set to `code`.
    pub fn filled(charset_index: usize, duration_ms: u32, code: u8) -> Self {
        Self {
            cells: [code; SCREEN_CELLS],
            charset_index,
            duration_ms,
        }
    }

    /// Number of cell positions holding the same screen code in both frames.
    pub fn matching_cells(&self, other: &Frame) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

/// One colour-RAM state (per-cell foreground colours).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRamFrame {
    /// Colour per cell, row-major.
    pub colors: [u8; SCREEN_CELLS],
    /// Display time in milliseconds.
    pub duration_ms: u32,
}

/// Border and background colour for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScreenColorFrame {
    /// Border colour (palette index).
    pub border: u8,
    /// Background colour (palette index).
    pub background: u8,
    /// Display time in milliseconds.
    pub duration_ms: u32,
}

/// A decoded source screen as produced by the readers, before it is split into channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenFrame {
    /// Screen codes, row-major.
    pub cells: [u8; SCREEN_CELLS],
    /// Per-cell colours when the source carries them.
    pub color_ram: Option<[u8; SCREEN_CELLS]>,
    /// Border colour.
    pub border: u8,
    /// Background colour.
    pub background: u8,
    /// Display time in milliseconds; `0` means "use the default".
    pub duration_ms: u32,
}

impl ScreenFrame {
    /// Blank screen with the given colours.
    pub fn blank(border: u8, background: u8) -> Self {
        Self {
            cells: [0; SCREEN_CELLS],
            color_ram: None,
            border,
            background,
            duration_ms: 0,
        }
    }
}
