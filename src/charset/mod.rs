pub(crate) mod glyph;
pub(crate) mod reader;
pub(crate) mod set;
pub(crate) mod writer;
