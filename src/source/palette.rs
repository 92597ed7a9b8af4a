/// Maps RGB colours to hardware palette indices.
pub trait PaletteConverter {
    /// Nearest palette index for an RGB colour.
    fn rgb_to_index(&self, r: u8, g: u8, b: u8) -> u8;

    /// Palette index used for transparent pixels and as the "pixel off" colour.
    fn background_index(&self) -> u8;
}

/// Number of colours in the VIC-II palette.
pub const VIC_COLORS: usize = 16;

/// The "Pepto (old)" VIC-II palette.
pub const PEPTO_PALETTE: [[u8; 3]; VIC_COLORS] = [
    [0, 0, 0],       // black
    [255, 255, 255], // white
    [104, 55, 43],   // red
    [112, 164, 178], // cyan
    [111, 61, 134],  // purple
    [88, 141, 67],   // green
    [53, 40, 121],   // blue
    [184, 199, 111], // yellow
    [111, 79, 37],   // orange
    [67, 57, 0],     // brown
    [154, 103, 89],  // light red
    [68, 68, 68],    // dark grey
    [108, 108, 108], // grey
    [154, 210, 132], // light green
    [108, 94, 181],  // light blue
    [149, 149, 149], // light grey
];

/// Nearest-colour conversion against [`PEPTO_PALETTE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeptoPalette {
    background: u8,
}

impl PeptoPalette {
    /// Converter with the given background colour index (`0..16`).
    pub fn new(background: u8) -> Self {
        Self { background }
    }
}

impl PaletteConverter for PeptoPalette {
    fn rgb_to_index(&self, r: u8, g: u8, b: u8) -> u8 {
        let mut best = 0usize;
        let mut best_err = u32::MAX;
        for (i, [pr, pg, pb]) in PEPTO_PALETTE.iter().enumerate() {
            let dr = i32::from(*pr) - i32::from(r);
            let dg = i32::from(*pg) - i32::from(g);
            let db = i32::from(*pb) - i32::from(b);
            // Squared distance orders the same as Euclidean.
            let err = (dr * dr + dg * dg + db * db) as u32;
            if err < best_err {
                best_err = err;
                best = i;
            }
        }
        best as u8
    }

    fn background_index(&self) -> u8 {
        self.background
    }
}
