use std::collections::HashSet;

use crate::{
    channel::{character_ram::CharacterRamChannel, frame::Frame},
    charset::{
        glyph::Glyph,
        set::{Charset, MAX_GLYPHS},
    },
    foundation::error::{CharpackError, CharpackResult},
    reduce::{
        grouping::{FrameGroups, group_frames},
        usage::{UsageTally, frame_glyphs},
    },
};

/// Default share of verbatim-equal cells (percent) for a frame to stay in its predecessor's group.
pub const DEFAULT_SIMILARITY_PERCENT: u32 = 80;

/// How many of the globally most used glyphs are copied into every output charset.
pub const SHARED_SEED_LIMIT: usize = 50;

/// What a reduction did.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReductionReport {
    /// Distinct glyphs referenced by frames, BLANK and FULL included.
    pub distinct_glyphs: usize,
    /// Whether everything fit in a single charset.
    pub single_charset: bool,
    /// Whether the channel already fit the target and was left as it was.
    pub unchanged: bool,
    /// Glyphs copied into every output charset.
    pub shared_glyphs: usize,
    /// Frames per output charset.
    pub group_sizes: Vec<usize>,
    /// Candidate glyphs per output charset that did not fit.
    pub dropped_glyphs: Vec<usize>,
}

impl CharacterRamChannel {
    /// Reduce the channel to at most `target_count` charsets, remapping every frame.
    ///
    /// See [`CharacterRamChannel::reduce_charsets_with_report`].
    pub fn reduce_charsets(
        &mut self,
        target_count: usize,
        similarity_percent: u32,
    ) -> CharpackResult<()> {
        self.reduce_charsets_with_report(target_count, similarity_percent)
            .map(|_| ())
    }

    /// Reduce the channel to at most `target_count` charsets and report what happened.
    ///
    /// When every glyph the frames draw fits in one charset, the result is exactly one charset
    /// holding BLANK, FULL and those glyphs, and frames are remapped exactly. Otherwise the
    /// charsets are rebuilt greedily: shared high-usage glyphs first, then per-group glyphs, with
    /// frames remapped to the nearest available glyph. Every output charset starts with BLANK at
    /// index 0 and FULL at index 1. A channel that needs more than one charset but already has at
    /// most `target_count` is left unchanged.
    ///
    /// Fails, leaving the channel untouched, only when `target_count` is zero or the channel
    /// violates its structural invariant.
    #[tracing::instrument(skip(self), fields(charsets = self.charsets.len(), frames = self.frames.len()))]
    pub fn reduce_charsets_with_report(
        &mut self,
        target_count: usize,
        similarity_percent: u32,
    ) -> CharpackResult<ReductionReport> {
        if target_count == 0 {
            return Err(CharpackError::validation("target charset count must be >= 1"));
        }
        self.validate()?;

        let mut usage = UsageTally::with_reserved();
        for frame in &self.frames {
            usage.add_frame(&self.charsets, frame);
        }
        tracing::debug!(distinct = usage.len(), "glyph usage tallied");

        let (charsets, frames, report) = if usage.len() <= MAX_GLYPHS {
            self.single_charset(&usage, target_count)
        } else if self.charsets.len() <= target_count {
            tracing::debug!(
                distinct = usage.len(),
                charsets = self.charsets.len(),
                "channel already within target"
            );
            return Ok(self.unchanged_report(&usage));
        } else {
            self.multi_charset(&usage, target_count, similarity_percent)
        };

        self.charsets = charsets;
        self.frames = frames;
        tracing::debug!(?report, "charsets reduced");
        Ok(report)
    }

    fn unchanged_report(&self, usage: &UsageTally) -> ReductionReport {
        let mut group_sizes = vec![0; self.charsets.len()];
        for frame in &self.frames {
            group_sizes[frame.charset_index] += 1;
        }
        ReductionReport {
            distinct_glyphs: usage.len(),
            single_charset: false,
            unchanged: true,
            shared_glyphs: 0,
            dropped_glyphs: vec![0; self.charsets.len()],
            group_sizes,
        }
    }

    fn single_charset(
        &self,
        usage: &UsageTally,
        target_count: usize,
    ) -> (Vec<Charset>, Vec<Frame>, ReductionReport) {
        // Reserved glyphs were tallied first, so they land at 0 and 1.
        let charset = Charset::from_glyphs(
            output_label(target_count, 0),
            usage.distinct().iter().copied(),
        );

        let frames = self
            .frames
            .iter()
            .map(|frame| {
                let old = &self.charsets[frame.charset_index];
                let mut cells = frame.cells;
                for cell in &mut cells {
                    *cell = old
                        .get(*cell)
                        .and_then(|g| charset.index_of(&g))
                        .unwrap_or(0);
                }
                Frame {
                    cells,
                    charset_index: 0,
                    duration_ms: frame.duration_ms,
                }
            })
            .collect();

        let report = ReductionReport {
            distinct_glyphs: usage.len(),
            single_charset: true,
            unchanged: false,
            shared_glyphs: 0,
            group_sizes: vec![self.frames.len()],
            dropped_glyphs: vec![0],
        };
        (vec![charset], frames, report)
    }

    fn multi_charset(
        &self,
        usage: &UsageTally,
        group_count: usize,
        similarity_percent: u32,
    ) -> (Vec<Charset>, Vec<Frame>, ReductionReport) {
        let ranked = usage.ranked();

        let mut charsets: Vec<Charset> = (0..group_count)
            .map(|i| {
                Charset::from_glyphs(output_label(group_count, i), [Glyph::BLANK, Glyph::FULL])
            })
            .collect();

        let shared: Vec<Glyph> = ranked
            .iter()
            .take(SHARED_SEED_LIMIT)
            .map(|(g, _)| *g)
            .collect();
        for glyph in &shared {
            for charset in &mut charsets {
                if !charset.is_full() {
                    charset.insert(*glyph);
                }
            }
        }
        let shared: HashSet<Glyph> = shared.into_iter().collect();

        let groups = group_frames(&self.frames, group_count, similarity_percent);
        tracing::debug!(
            shared = shared.len(),
            sizes = ?groups.members.iter().map(Vec::len).collect::<Vec<_>>(),
            "frames grouped"
        );

        let dropped_glyphs: Vec<usize> = charsets
            .iter_mut()
            .zip(&groups.members)
            .enumerate()
            .map(|(g, (charset, members))| {
                let dropped = self.populate_group(charset, members, &shared);
                if dropped > 0 {
                    tracing::warn!(group = g, dropped, "charset full, glyphs remapped to nearest");
                }
                dropped
            })
            .collect();

        let frames = self.remap_frames(&charsets, &groups);

        let report = ReductionReport {
            distinct_glyphs: usage.len(),
            single_charset: false,
            unchanged: false,
            shared_glyphs: shared.len(),
            group_sizes: groups.members.iter().map(Vec::len).collect(),
            dropped_glyphs,
        };
        (charsets, frames, report)
    }

    /// Fill `charset` with the glyphs its frames use most, skipping shared ones. Returns how many
    /// candidates did not fit.
    fn populate_group(
        &self,
        charset: &mut Charset,
        members: &[usize],
        shared: &HashSet<Glyph>,
    ) -> usize {
        let mut local = UsageTally::new();
        for &i in members {
            for glyph in frame_glyphs(&self.charsets, &self.frames[i]) {
                if !shared.contains(&glyph) {
                    local.add(glyph);
                }
            }
        }

        let ranked = local.ranked();
        for (n, (glyph, _)) in ranked.iter().enumerate() {
            if charset.is_full() {
                return ranked.len() - n;
            }
            charset.insert(*glyph);
        }
        0
    }

    fn remap_frames(&self, charsets: &[Charset], groups: &FrameGroups) -> Vec<Frame> {
        let group_count = charsets.len();

        // table[old charset][old slot * group_count + group] -> new slot
        let table: Vec<Vec<u8>> = self
            .charsets
            .iter()
            .map(|old| {
                old.glyphs()
                    .iter()
                    .flat_map(|glyph| {
                        charsets
                            .iter()
                            .map(move |new| new.best_match(glyph).unwrap_or(0))
                    })
                    .collect()
            })
            .collect();

        self.frames
            .iter()
            .zip(&groups.group_of)
            .map(|(frame, &group)| {
                let row = &table[frame.charset_index];
                let mut cells = frame.cells;
                for cell in &mut cells {
                    *cell = row[usize::from(*cell) * group_count + group];
                }
                Frame {
                    cells,
                    charset_index: group,
                    duration_ms: frame.duration_ms,
                }
            })
            .collect()
    }
}

fn output_label(count: usize, index: usize) -> String {
    format!("reduced_{count}_{index}")
}

#[cfg(test)]
#[path = "../../tests/unit/reduce/engine.rs"]
mod tests;
