use super::*;

fn screen_bitmap(background: u8) -> IndexedBitmap {
    IndexedBitmap::filled(SCREEN_PIXEL_WIDTH, SCREEN_PIXEL_HEIGHT, background)
}

fn paint_cell(bm: &mut IndexedBitmap, col: usize, row: usize, rows: [u8; 8], color: u8) {
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..8 {
            if bits & (0x80 >> dx) != 0 {
                bm.pixels[(row * 8 + dy) * bm.width + col * 8 + dx] = color;
            }
        }
    }
}

/// Screen whose every cell holds a distinct glyph number `base + cell`.
fn busy_bitmap(base: usize, count: usize) -> IndexedBitmap {
    let mut bm = screen_bitmap(0);
    for i in 0..count {
        let n = (base + i) as u16;
        let [lo, hi] = n.to_le_bytes();
        paint_cell(&mut bm, i % SCREEN_WIDTH, i / SCREEN_WIDTH, [lo, hi, 0x5A, 0, 0, 0, 0, 0], 1);
    }
    bm
}

#[test]
fn cell_reads_bits_and_dominant_colour() {
    let mut bm = screen_bitmap(6);
    paint_cell(&mut bm, 2, 1, [0x80, 0x40, 0, 0, 0, 0, 0, 0x01], 14);
    paint_cell(&mut bm, 2, 1, [0x80, 0, 0, 0, 0, 0, 0, 0], 3);
    let (glyph, color) = bm.cell(2, 1, 6);
    assert_eq!(glyph, Glyph::new([0x80, 0x40, 0, 0, 0, 0, 0, 0x01]));
    assert_eq!(color, 14);

    assert_eq!(bm.cell(0, 0, 6), (Glyph::BLANK, 6));
}

#[test]
fn small_bitmaps_pad_with_background() {
    let bm = IndexedBitmap::filled(4, 4, 1);
    let (glyph, color) = bm.cell(0, 0, 0);
    assert_eq!(glyph, Glyph::new([0xF0, 0xF0, 0xF0, 0xF0, 0, 0, 0, 0]));
    assert_eq!(color, 1);
    assert_eq!(bm.cell(1, 0, 0).0, Glyph::BLANK);
}

#[test]
fn frames_share_a_charset_while_it_fits() {
    let a = screen_bitmap(0);
    let mut b = screen_bitmap(0);
    paint_cell(&mut b, 0, 0, [0xFF; 8], 1);

    let batches = bitmaps_to_screens("anim.gif", [(&a, 40), (&b, 60)], 0);
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.charset.glyphs(), &[Glyph::BLANK, Glyph::FULL]);
    assert_eq!(batch.screens.len(), 2);
    assert_eq!(batch.screens[1].cells[0], 1);
    assert_eq!(batch.screens[1].cells[1], 0);
    assert_eq!(batch.screens[1].duration_ms, 60);
    assert_eq!(batch.screens[1].color_ram.unwrap()[0], 1);
}

#[test]
fn overflowing_frames_open_a_new_charset() {
    let a = busy_bitmap(0, 200);
    let b = busy_bitmap(1000, 200);
    let batches = bitmaps_to_screens("anim.gif", [(&a, 10), (&b, 10)], 0);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].charset.label(), "anim.gif");
    assert_eq!(batches[1].charset.label(), "anim.gif#1");
    // 200 numbered glyphs plus the blank background cells.
    assert_eq!(batches[0].charset.len(), 201);
    assert_eq!(batches[1].screens.len(), 1);
}

#[test]
fn single_frame_overflow_uses_nearest_glyphs() {
    let a = busy_bitmap(0, SCREEN_CELLS);
    let batches = bitmaps_to_screens("busy", [(&a, 10)], 0);
    assert_eq!(batches.len(), 1);
    let cs = &batches[0].charset;
    assert!(cs.is_full());
    let screen = &batches[0].screens[0];
    assert!(screen.cells.iter().all(|&c| usize::from(c) < cs.len()));
}
