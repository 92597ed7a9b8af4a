use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{CharpackError, CharpackResult},
    reduce::engine::DEFAULT_SIMILARITY_PERCENT,
    source::palette::VIC_COLORS,
};

/// Kind of animation source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// PETSCII editor `.c` export.
    Petscii,
    /// Animated GIF.
    Gif,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One animation source to import.
pub struct InputSpec {
    /// Source kind.
    pub kind: InputKind,
    /// Source file.
    pub path: PathBuf,
    /// Charset (`.bin` / `.64c`) the source's screen codes refer to (PETSCII only).
    #[serde(default)]
    pub charset: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Converter settings, from a JSON file and/or command-line flags.
pub struct AppConfig {
    /// Sources in import order.
    pub inputs: Vec<InputSpec>,
    /// Export directory.
    pub output_dir: PathBuf,
    /// Maximum number of charsets after reduction.
    pub target_charsets: usize,
    /// Share of verbatim-equal cells (percent) for neighbouring frames to share a charset.
    pub similarity_percent: u32,
    /// Palette index treated as "pixel off" for GIF input.
    pub background_color: u8,
    /// Duration for frames whose source gives none.
    pub default_frame_duration_ms: u32,
    /// Debug logging.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("out"),
            target_charsets: 1,
            similarity_percent: DEFAULT_SIMILARITY_PERCENT,
            background_color: 0,
            default_frame_duration_ms: 100,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Load a JSON config. Relative paths inside resolve against the file's directory.
    pub fn from_path(path: &Path) -> CharpackResult<Self> {
        let f = File::open(path)
            .map_err(|e| CharpackError::load(format!("open config '{}': {e}", path.display())))?;
        let mut cfg: AppConfig = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        for input in &mut cfg.inputs {
            resolve(&mut input.path);
            if let Some(cs) = input.charset.as_mut() {
                resolve(cs);
            }
        }
        resolve(&mut cfg.output_dir);
        Ok(cfg)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> CharpackResult<()> {
        if self.inputs.is_empty() {
            return Err(CharpackError::validation("no input files given"));
        }
        if self.target_charsets == 0 {
            return Err(CharpackError::validation("target_charsets must be >= 1"));
        }
        if self.similarity_percent > 100 {
            return Err(CharpackError::validation(
                "similarity_percent must be within 0..=100",
            ));
        }
        if usize::from(self.background_color) >= VIC_COLORS {
            return Err(CharpackError::validation(format!(
                "background_color must be below {VIC_COLORS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
