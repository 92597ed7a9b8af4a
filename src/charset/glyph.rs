use crate::foundation::math::{fold31, hamming_distance_8bytes};

/// Bytes per glyph: one byte per pixel row, MSB is the leftmost pixel.
pub const GLYPH_BYTES: usize = 8;

/// One 8×8 monochrome character cell.
///
/// Glyphs are plain values: equality is exact bit equality, and two glyphs are "similar" when
/// their [`Glyph::distance`] is small.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Glyph([u8; GLYPH_BYTES]);

impl Glyph {
    /// All pixels clear. Always present in reduced charsets.
    pub const BLANK: Glyph = Glyph([0x00; GLYPH_BYTES]);
    /// All pixels set. Always present in reduced charsets.
    pub const FULL: Glyph = Glyph([0xFF; GLYPH_BYTES]);

    /// Build a glyph from its eight row bytes.
    pub const fn new(rows: [u8; GLYPH_BYTES]) -> Self {
        Self(rows)
    }

    /// Build a glyph from the first eight bytes of `bytes`.
    ///
    /// Returns `None` when fewer than eight bytes are available.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let rows: [u8; GLYPH_BYTES] = bytes.get(..GLYPH_BYTES)?.try_into().ok()?;
        Some(Self(rows))
    }

    /// Row bytes.
    pub fn rows(&self) -> &[u8; GLYPH_BYTES] {
        &self.0
    }

    /// Whether the pixel at `(x, y)` is set; both coordinates in `0..8`.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[y] & (0x80 >> x) != 0
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        self.0 = [0; GLYPH_BYTES];
    }

    /// Flip every pixel.
    pub fn invert(&mut self) {
        for row in &mut self.0 {
            *row = !*row;
        }
    }

    /// Hamming distance over the 64 pixel bits, in `[0, 64]`.
    #[inline]
    pub fn distance(&self, other: &Glyph) -> u32 {
        hamming_distance_8bytes(&self.0, &other.0)
    }

    /// Order-dependent polynomial fold of the row bytes.
    pub fn fold_hash(&self) -> u64 {
        fold31(0, self.0.iter().map(|&b| u64::from(b)))
    }

    /// Whether this is [`Glyph::BLANK`].
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }

    /// Whether this is [`Glyph::FULL`].
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

impl std::hash::Hash for Glyph {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.fold_hash());
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Glyph(")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{row:02x}")?;
        }
        write!(f, ")")
    }
}

impl From<[u8; GLYPH_BYTES]> for Glyph {
    fn from(rows: [u8; GLYPH_BYTES]) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charset/glyph.rs"]
mod tests;
