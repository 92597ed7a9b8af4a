use crate::{
    channel::frame::{SCREEN_CELLS, SCREEN_HEIGHT, SCREEN_WIDTH, ScreenFrame},
    charset::{
        glyph::Glyph,
        set::{Charset, MAX_GLYPHS},
    },
};

/// Screen width in pixels.
pub const SCREEN_PIXEL_WIDTH: usize = SCREEN_WIDTH * 8;
/// Screen height in pixels.
pub const SCREEN_PIXEL_HEIGHT: usize = SCREEN_HEIGHT * 8;

/// Row-major bitmap of palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedBitmap {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// `width * height` palette indices.
    pub pixels: Vec<u8>,
}

impl IndexedBitmap {
    /// Bitmap of one colour.
    pub fn filled(width: usize, height: usize, color: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Palette index at `(x, y)`; `outside` when the point lies beyond the bitmap.
    pub fn pixel_or(&self, x: usize, y: usize, outside: u8) -> u8 {
        if x >= self.width || y >= self.height {
            return outside;
        }
        self.pixels.get(y * self.width + x).copied().unwrap_or(outside)
    }

    /// Glyph and foreground colour of the 8×8 cell at `(col, row)`.
    ///
    /// A pixel is set when it is not `background`. The foreground colour is the most frequent
    /// non-background colour (lowest index on ties), or `background` for an empty cell. Pixels
    /// beyond the bitmap count as background.
    pub fn cell(&self, col: usize, row: usize, background: u8) -> (Glyph, u8) {
        let mut rows = [0u8; 8];
        let mut histogram = [0u16; 256];
        for (dy, bits) in rows.iter_mut().enumerate() {
            for dx in 0..8 {
                let px = self.pixel_or(col * 8 + dx, row * 8 + dy, background);
                if px != background {
                    *bits |= 0x80 >> dx;
                    histogram[usize::from(px)] += 1;
                }
            }
        }
        let mut color = background;
        let mut best = 0;
        for (c, &n) in histogram.iter().enumerate() {
            if n > best {
                best = n;
                color = c as u8;
            }
        }
        (Glyph::new(rows), color)
    }
}

/// One charset and the screens drawn from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenBatch {
    /// Charset the batch's screen codes index.
    pub charset: Charset,
    /// Screens in playback order.
    pub screens: Vec<ScreenFrame>,
}

/// Convert palette-indexed frames into screens of glyph codes.
///
/// Glyphs accumulate in one charset until a frame's new glyphs no longer fit; the next charset is
/// labelled `<label>#<n>`. A single frame with more than 256 distinct glyphs draws the excess from
/// the nearest glyph already in its charset.
pub fn bitmaps_to_screens<'a>(
    label: &str,
    frames: impl IntoIterator<Item = (&'a IndexedBitmap, u32)>,
    background: u8,
) -> Vec<ScreenBatch> {
    let mut batches: Vec<ScreenBatch> = Vec::new();
    let mut current = ScreenBatch {
        charset: Charset::new(label),
        screens: Vec::new(),
    };

    for (frame_no, (bitmap, duration_ms)) in frames.into_iter().enumerate() {
        let cells: Vec<(Glyph, u8)> = (0..SCREEN_CELLS)
            .map(|i| bitmap.cell(i % SCREEN_WIDTH, i / SCREEN_WIDTH, background))
            .collect();

        let mut fresh: Vec<Glyph> = Vec::new();
        for (g, _) in &cells {
            if current.charset.index_of(g).is_none() && !fresh.contains(g) {
                fresh.push(*g);
            }
        }
        if current.charset.len() + fresh.len() > MAX_GLYPHS
            && !current.screens.is_empty()
        {
            let n = batches.len() + 1;
            batches.push(std::mem::replace(
                &mut current,
                ScreenBatch {
                    charset: Charset::new(format!("{label}#{n}")),
                    screens: Vec::new(),
                },
            ));
        }

        let mut screen = ScreenFrame::blank(background, background);
        let mut colors = [background; SCREEN_CELLS];
        let mut substituted = 0usize;
        for (i, (glyph, color)) in cells.into_iter().enumerate() {
            let code = match current.charset.insert(glyph) {
                Some(code) => code,
                None => {
                    substituted += 1;
                    current.charset.closest_char(&glyph).unwrap_or(0)
                }
            };
            screen.cells[i] = code;
            colors[i] = color;
        }
        if substituted > 0 {
            tracing::warn!(
                frame = frame_no,
                substituted,
                "frame has more than 256 distinct glyphs; using nearest matches"
            );
        }
        screen.color_ram = Some(colors);
        screen.duration_ms = duration_ms;
        current.screens.push(screen);
    }

    if !current.screens.is_empty() {
        batches.push(current);
    }
    batches
}

#[cfg(test)]
#[path = "../../tests/unit/source/bitmap.rs"]
mod tests;
