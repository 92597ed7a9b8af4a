use super::*;

const A: Glyph = Glyph::new([0xAA; 8]);
const X: Glyph = Glyph::new([0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81]);

#[test]
fn reserved_glyphs_start_at_one() {
    let t = UsageTally::with_reserved();
    assert_eq!(t.len(), 2);
    assert_eq!(t.ranked(), vec![(Glyph::BLANK, 1), (Glyph::FULL, 1)]);
}

#[test]
fn ranking_is_by_count_then_first_seen() {
    let mut t = UsageTally::with_reserved();
    t.add(X);
    t.add(A);
    t.add(A);
    t.add(X);
    t.add(Glyph::FULL);
    let ranked: Vec<Glyph> = t.ranked().into_iter().map(|(g, _)| g).collect();
    // FULL, X and A all have 2; first-seen order decides.
    assert_eq!(ranked, vec![Glyph::FULL, X, A, Glyph::BLANK]);
}

#[test]
fn frames_are_counted_through_their_charset() {
    let charsets = vec![
        Charset::from_glyphs("one", [Glyph::BLANK, A]),
        Charset::from_glyphs("two", [X, A]),
    ];
    let mut t = UsageTally::new();
    t.add_frame(&charsets, &Frame::filled(0, 10, 1));
    t.add_frame(&charsets, &Frame::filled(1, 10, 1));
    // Slot 1 is A in both charsets, so both frames add to the same glyph.
    assert_eq!(t.len(), 1);
    assert_eq!(t.ranked(), vec![(A, 2000)]);
    assert_eq!(t.distinct(), &[A]);
}
