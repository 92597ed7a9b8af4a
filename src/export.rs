use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;

use crate::{
    channel::source::AnimSourceData,
    charset::writer::write_charset,
    foundation::error::{CharpackError, CharpackResult},
    reduce::engine::ReductionReport,
};

/// Name of the frame manifest written next to the charsets.
pub const MANIFEST_FILE: &str = "frames.json";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One exported frame.
pub struct ExportedFrame {
    /// Index into [`ExportManifest::charsets`].
    pub charset: usize,
    /// Display time in milliseconds.
    pub duration_ms: u32,
    /// 1000 screen codes, row-major.
    pub cells: Vec<u8>,
    /// 1000 colour-RAM entries when the source carried colours.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color_ram: Option<Vec<u8>>,
    /// Border colour.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub border: Option<u8>,
    /// Background colour.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Contents of [`MANIFEST_FILE`].
pub struct ExportManifest {
    /// Charset file names, relative to the export directory.
    pub charsets: Vec<String>,
    /// Frames in playback order.
    pub frames: Vec<ExportedFrame>,
}

/// Build the manifest for `data` without touching the filesystem.
pub fn build_manifest(data: &AnimSourceData) -> CharpackResult<ExportManifest> {
    let Some(ram) = data.character_ram() else {
        return Err(CharpackError::export("animation has no character RAM channel"));
    };
    let colors = data.screen_colors().map(|c| c.frames.as_slice()).unwrap_or_default();
    let color_ram = data.color_ram().map(|c| c.frames.as_slice()).unwrap_or_default();

    let charsets = (0..ram.charsets().len())
        .map(|i| format!("charset_{i}.bin"))
        .collect();
    let frames = ram
        .frames()
        .iter()
        .enumerate()
        .map(|(i, f)| ExportedFrame {
            charset: f.charset_index,
            duration_ms: f.duration_ms,
            cells: f.cells.to_vec(),
            color_ram: color_ram.get(i).map(|c| c.colors.to_vec()),
            border: colors.get(i).map(|c| c.border),
            background: colors.get(i).map(|c| c.background),
        })
        .collect();
    Ok(ExportManifest { charsets, frames })
}

/// Write every charset as `charset_<i>.bin` and the frame manifest into `dir`.
#[tracing::instrument(skip(data, report))]
pub fn export_animation(
    dir: &Path,
    data: &AnimSourceData,
    report: Option<&ReductionReport>,
) -> CharpackResult<ExportManifest> {
    let manifest = build_manifest(data)?;
    let Some(ram) = data.character_ram() else {
        return Err(CharpackError::export("animation has no character RAM channel"));
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    for (name, charset) in manifest.charsets.iter().zip(ram.charsets()) {
        write_charset(&dir.join(name), charset)?;
    }

    let path = dir.join(MANIFEST_FILE);
    let f = File::create(&path).with_context(|| format!("create '{}'", path.display()))?;
    #[derive(serde::Serialize)]
    struct Document<'a> {
        #[serde(flatten)]
        manifest: &'a ExportManifest,
        #[serde(skip_serializing_if = "Option::is_none")]
        reduction: Option<&'a ReductionReport>,
    }
    serde_json::to_writer_pretty(
        BufWriter::new(f),
        &Document {
            manifest: &manifest,
            reduction: report,
        },
    )
    .with_context(|| format!("write '{}'", path.display()))?;

    tracing::info!(
        dir = %dir.display(),
        charsets = manifest.charsets.len(),
        frames = manifest.frames.len(),
        "export written"
    );
    Ok(manifest)
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
