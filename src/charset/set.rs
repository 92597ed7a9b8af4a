use crate::{
    charset::glyph::Glyph,
    foundation::math::{Fnv1a64, fold31, hash_combine},
};

/// Maximum number of glyphs a charset can hold (screen codes are 8-bit).
pub const MAX_GLYPHS: usize = 256;

/// An insertion-ordered, deduplicating collection of up to [`MAX_GLYPHS`] glyphs.
///
/// The label (usually the source file name) takes part in equality, so two charsets holding
/// the same glyphs but loaded from different files are distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    label: String,
    glyphs: Vec<Glyph>,
}

impl Charset {
    /// Create an empty charset.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyphs: Vec::new(),
        }
    }

    /// Create a charset holding `glyphs` in order, dropping duplicates and anything past
    /// [`MAX_GLYPHS`].
    pub fn from_glyphs(label: impl Into<String>, glyphs: impl IntoIterator<Item = Glyph>) -> Self {
        let mut out = Self::new(label);
        for g in glyphs {
            if out.insert(g).is_none() {
                break;
            }
        }
        out
    }

    /// Source label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the charset holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether no further distinct glyph can be inserted.
    pub fn is_full(&self) -> bool {
        self.glyphs.len() >= MAX_GLYPHS
    }

    /// Glyph at `index`, if present.
    pub fn get(&self, index: u8) -> Option<Glyph> {
        self.glyphs.get(usize::from(index)).copied()
    }

    /// Glyphs in index order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Insert `glyph`, returning its index.
    ///
    /// An equal glyph already present is reused. Returns `None` only when the glyph is new and the
    /// charset is full.
    pub fn insert(&mut self, glyph: Glyph) -> Option<u8> {
        if let Some(idx) = self.index_of(&glyph) {
            return Some(idx);
        }
        if self.is_full() {
            return None;
        }
        let idx = self.glyphs.len() as u8;
        self.glyphs.push(glyph);
        Some(idx)
    }

    /// Exact lookup.
    pub fn index_of(&self, glyph: &Glyph) -> Option<u8> {
        self.glyphs
            .iter()
            .position(|g| g == glyph)
            .map(|idx| idx as u8)
    }

    /// Nearest glyph by Hamming distance; the lowest index wins ties.
    ///
    /// Returns `None` for an empty charset.
    pub fn closest_char(&self, glyph: &Glyph) -> Option<u8> {
        let mut best: Option<(u8, u32)> = None;
        for (idx, candidate) in self.glyphs.iter().enumerate() {
            let d = glyph.distance(candidate);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((idx as u8, d));
                if d == 0 {
                    break;
                }
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Exact match if present, otherwise the nearest glyph.
    pub fn best_match(&self, glyph: &Glyph) -> Option<u8> {
        self.index_of(glyph).or_else(|| self.closest_char(glyph))
    }

    /// Stable content hash over label and glyph sequence.
    pub fn content_hash(&self) -> u64 {
        let mut fnv = Fnv1a64::new_default();
        fnv.write_bytes(self.label.as_bytes());
        let glyph_hash = fold31(0, self.glyphs.iter().map(Glyph::fold_hash));
        hash_combine(fnv.finish(), glyph_hash)
    }
}

impl std::hash::Hash for Charset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charset/set.rs"]
mod tests;
