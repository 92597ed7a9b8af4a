//! charpack converts pixel and PETSCII animations into charset-based screens for 8-bit
//! character displays (the C64 VIC-II in particular).
//!
//! Screens on such hardware are 40×25 grids of indices into a charset of at most 256 8×8
//! glyphs, and only a few charsets fit in memory at once. Source material easily produces far
//! more distinct glyphs than that, so the heart of the crate is charset reduction.
//!
//! # Pipeline overview
//!
//! 1. **Read**: GIF files ([`read_gif`]) and PETSCII editor exports ([`read_petscii`]), plus
//!    optional charset files ([`read_charset`]).
//! 2. **Ingest**: decoded screens are split into channels of an [`AnimSourceData`]; screen codes
//!    and charsets land in a [`CharacterRamChannel`].
//! 3. **Reduce**: [`CharacterRamChannel::reduce_charsets`] rebuilds the charsets so that at most
//!    `K` remain and remaps every frame to draw from one of them.
//! 4. **Export**: charsets and a JSON frame manifest are written by [`export_animation`].
//!
//! Reduction is deterministic: the same input always yields the same charsets and frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod channel;
mod charset;
mod foundation;
mod reduce;
mod source;

/// Converter configuration.
pub mod config;
/// Writing reduced animations to disk.
pub mod export;
/// Load → reduce → export orchestration.
pub mod pipeline;

pub use channel::character_ram::CharacterRamChannel;
pub use channel::frame::{
    ColorRamFrame, Frame, SCREEN_CELLS, SCREEN_HEIGHT, SCREEN_WIDTH, ScreenColorFrame, ScreenFrame,
};
pub use channel::source::{
    AnimSourceData, ChannelKind, ColorRamChannel, ScreenColorChannel, SourceChannel,
};
pub use charset::glyph::{GLYPH_BYTES, Glyph};
pub use charset::reader::{CHARSET_FILE_BYTES, CharsetFormat, CharsetImage, read_charset};
pub use charset::set::{Charset, MAX_GLYPHS};
pub use charset::writer::{encode_charset, write_charset};
pub use config::{AppConfig, InputKind, InputSpec};
pub use export::{ExportManifest, ExportedFrame, MANIFEST_FILE, build_manifest, export_animation};
pub use foundation::error::{CharpackError, CharpackResult};
pub use pipeline::{ConversionOutput, load_sources, run};
pub use reduce::engine::{DEFAULT_SIMILARITY_PERCENT, ReductionReport, SHARED_SEED_LIMIT};
pub use source::bitmap::{
    IndexedBitmap, SCREEN_PIXEL_HEIGHT, SCREEN_PIXEL_WIDTH, ScreenBatch, bitmaps_to_screens,
};
pub use source::gif::{GifAnimation, GifFrame, decode_gif, read_gif};
pub use source::palette::{PEPTO_PALETTE, PaletteConverter, PeptoPalette, VIC_COLORS};
pub use source::petscii::{PetsciiAnim, PetsciiFrame, parse_petscii, read_petscii};
