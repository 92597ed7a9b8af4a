use crate::channel::frame::{Frame, SCREEN_CELLS};

/// Assignment of frames to output charsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameGroups {
    /// Frame indices per group, ascending.
    pub(crate) members: Vec<Vec<usize>>,
    /// Group of each frame.
    pub(crate) group_of: Vec<usize>,
}

/// Number of cells that must match verbatim (strictly more than this) for a frame to follow its
/// predecessor into the same group.
pub(crate) fn similarity_threshold(similarity_percent: u32) -> usize {
    (similarity_percent.min(100) as usize * SCREEN_CELLS) / 100
}

/// Split `frames` into `group_count` groups.
///
/// Frame 0 opens group 0. Each later frame joins its predecessor's group when more than
/// `similarity_percent`% of their cells hold the same screen code; otherwise it goes to the
/// currently smallest group (lowest index on ties).
pub(crate) fn group_frames(
    frames: &[Frame],
    group_count: usize,
    similarity_percent: u32,
) -> FrameGroups {
    let group_count = group_count.max(1);
    let threshold = similarity_threshold(similarity_percent);
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); group_count];
    let mut group_of = Vec::with_capacity(frames.len());

    if frames.is_empty() {
        return FrameGroups { members, group_of };
    }
    members[0].push(0);
    group_of.push(0);

    for i in 1..frames.len() {
        let prev_group = members
            .iter()
            .position(|m| m.last() == Some(&(i - 1)));

        if let Some(g) = prev_group
            && frames[i].matching_cells(&frames[i - 1]) > threshold
        {
            members[g].push(i);
            group_of.push(g);
            continue;
        }

        let mut smallest = 0;
        for (g, m) in members.iter().enumerate() {
            if m.len() < members[smallest].len() {
                smallest = g;
            }
        }
        members[smallest].push(i);
        group_of.push(smallest);
    }

    FrameGroups { members, group_of }
}

#[cfg(test)]
#[path = "../../tests/unit/reduce/grouping.rs"]
mod tests;
