#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Number of differing bits between two 8-byte bitmaps, in `[0, 64]`.
#[inline(always)]
pub(crate) fn hamming_distance_8bytes(a: &[u8; 8], b: &[u8; 8]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Order-dependent polynomial fold (`h = h * 31 + x`).
pub(crate) fn fold31(seed: u64, values: impl IntoIterator<Item = u64>) -> u64 {
    values
        .into_iter()
        .fold(seed, |h, v| h.wrapping_mul(31).wrapping_add(v))
}

/// Boost-style hash combine.
pub(crate) fn hash_combine(h: u64, v: u64) -> u64 {
    h ^ v
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(h << 6)
        .wrapping_add(h >> 2)
}
