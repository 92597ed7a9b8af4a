use super::*;

fn frame(code: u8) -> Frame {
    Frame::filled(0, 100, code)
}

fn with_changes(code: u8, every: usize, changed: u8) -> Frame {
    let mut f = frame(code);
    for i in (0..SCREEN_CELLS).step_by(every) {
        f.cells[i] = changed;
    }
    f
}

#[test]
fn threshold_is_clamped_percentage_of_cells() {
    assert_eq!(similarity_threshold(80), 800);
    assert_eq!(similarity_threshold(0), 0);
    assert_eq!(similarity_threshold(250), 1000);
}

#[test]
fn similar_runs_stay_together() {
    // 0-1 are 90% equal, 3-4 are 95% equal, other neighbours share at most 10%.
    let frames = vec![
        frame(2),
        with_changes(2, 10, 3),
        frame(3),
        frame(4),
        with_changes(4, 20, 5),
        frame(5),
    ];
    let groups = group_frames(&frames, 2, 80);
    assert_eq!(groups.group_of[0], groups.group_of[1]);
    assert_eq!(groups.group_of[3], groups.group_of[4]);
    assert_eq!(groups.members, vec![vec![0, 1, 5], vec![2, 3, 4]]);
}

#[test]
fn dissimilar_frames_are_balanced() {
    let frames: Vec<Frame> = (0..6).map(frame).collect();
    let groups = group_frames(&frames, 3, 80);
    assert_eq!(groups.group_of, vec![0, 1, 2, 0, 1, 2]);
}

#[test]
fn exactly_threshold_matches_is_not_enough() {
    // 800 of 1000 cells match: needs strictly more than 800.
    let mut b = frame(1);
    for c in b.cells.iter_mut().take(200) {
        *c = 9;
    }
    let groups = group_frames(&[frame(1), b], 2, 80);
    assert_eq!(groups.group_of, vec![0, 1]);
}

#[test]
fn full_similarity_threshold_never_groups() {
    let groups = group_frames(&[frame(1), frame(1)], 2, 100);
    assert_eq!(groups.group_of, vec![0, 1]);
}

#[test]
fn empty_input_gives_empty_groups() {
    let groups = group_frames(&[], 2, 80);
    assert_eq!(groups.members, vec![Vec::<usize>::new(), Vec::new()]);
    assert!(groups.group_of.is_empty());
}
