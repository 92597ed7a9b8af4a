use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

use super::*;
use crate::source::palette::PeptoPalette;

fn encode(frames: Vec<(RgbaImage, u32)>) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut enc = GifEncoder::new(&mut out);
        enc.encode_frames(frames.into_iter().map(|(img, ms)| {
            Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(ms, 1))
        }))
        .unwrap();
    }
    out
}

#[test]
fn decodes_frames_delays_and_palette_indices() {
    let mut white_dot = RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 255]));
    white_dot.put_pixel(3, 2, Rgba([255, 255, 255, 255]));
    let black = RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 255]));

    let bytes = encode(vec![(white_dot, 50), (black, 120)]);
    let anim = decode_gif("mem.gif", &bytes, &PeptoPalette::new(0)).unwrap();

    assert_eq!(anim.source, "mem.gif");
    assert_eq!(anim.frames.len(), 2);
    assert_eq!(anim.frames[0].delay_ms, 50);
    assert_eq!(anim.frames[1].delay_ms, 120);

    let bm = &anim.frames[0].bitmap;
    assert_eq!((bm.width, bm.height), (16, 8));
    assert_eq!(bm.pixel_or(3, 2, 99), 1);
    assert_eq!(bm.pixel_or(4, 2, 99), 0);
    assert!(anim.frames[1].bitmap.pixels.iter().all(|&p| p == 0));
}

#[test]
fn garbage_is_a_load_error() {
    let err = decode_gif("junk", b"not a gif", &PeptoPalette::new(0)).unwrap_err();
    assert!(matches!(err, CharpackError::Load(_)));

    let err = read_gif(Path::new("target/does-not-exist.gif"), &PeptoPalette::new(0)).unwrap_err();
    assert!(err.to_string().contains("failed to open GIF"));
}
