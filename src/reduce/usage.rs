use std::collections::HashMap;

use crate::{
    channel::frame::Frame,
    charset::{glyph::Glyph, set::Charset},
};

/// Glyph occurrence counts, remembering the order in which glyphs were first seen.
#[derive(Clone, Debug, Default)]
pub(crate) struct UsageTally {
    first_seen: Vec<Glyph>,
    counts: HashMap<Glyph, u64>,
}

impl UsageTally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Tally with BLANK and FULL pre-counted once, so they are always ranked.
    pub(crate) fn with_reserved() -> Self {
        let mut t = Self::new();
        t.add(Glyph::BLANK);
        t.add(Glyph::FULL);
        t
    }

    pub(crate) fn add(&mut self, glyph: Glyph) {
        let count = self.counts.entry(glyph).or_insert_with(|| {
            self.first_seen.push(glyph);
            0
        });
        *count += 1;
    }

    /// Count every cell of `frame`, resolved through its charset.
    pub(crate) fn add_frame(&mut self, charsets: &[Charset], frame: &Frame) {
        for glyph in frame_glyphs(charsets, frame) {
            self.add(glyph);
        }
    }

    /// Number of distinct glyphs seen.
    pub(crate) fn len(&self) -> usize {
        self.first_seen.len()
    }

    /// Distinct glyphs in first-seen order.
    pub(crate) fn distinct(&self) -> &[Glyph] {
        &self.first_seen
    }

    /// Glyphs by count, most used first; ties keep first-seen order.
    pub(crate) fn ranked(&self) -> Vec<(Glyph, u64)> {
        let mut out: Vec<(Glyph, u64)> = self
            .first_seen
            .iter()
            .map(|g| (*g, self.counts[g]))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

/// Glyphs drawn by `frame`, cell by cell.
///
/// Cells outside the referenced charset are skipped; validated channels have none.
pub(crate) fn frame_glyphs<'a>(
    charsets: &'a [Charset],
    frame: &'a Frame,
) -> impl Iterator<Item = Glyph> + 'a {
    let charset = charsets.get(frame.charset_index);
    frame
        .cells
        .iter()
        .filter_map(move |&code| charset.and_then(|cs| cs.get(code)))
}

#[cfg(test)]
#[path = "../../tests/unit/reduce/usage.rs"]
mod tests;
