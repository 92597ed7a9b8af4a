pub(crate) mod bitmap;
pub(crate) mod gif;
pub(crate) mod palette;
pub(crate) mod petscii;
