use crate::{
    channel::{frame::ScreenFrame, source::AnimSourceData},
    charset::reader::read_charset,
    config::{AppConfig, InputKind, InputSpec},
    export::{ExportManifest, export_animation},
    foundation::error::CharpackResult,
    reduce::engine::ReductionReport,
    source::{
        bitmap::bitmaps_to_screens, gif::read_gif, palette::PeptoPalette, petscii::read_petscii,
    },
};

/// Result of a full conversion.
#[derive(Clone, Debug)]
pub struct ConversionOutput {
    /// Reduced animation.
    pub data: AnimSourceData,
    /// What the reduction did.
    pub report: ReductionReport,
    /// What was written to disk.
    pub manifest: ExportManifest,
}

/// Import every configured source into one animation.
pub fn load_sources(cfg: &AppConfig) -> CharpackResult<AnimSourceData> {
    let mut data = AnimSourceData::new(cfg.default_frame_duration_ms);
    for input in &cfg.inputs {
        import_input(&mut data, input, cfg.background_color)?;
    }
    Ok(data)
}

fn import_input(
    data: &mut AnimSourceData,
    input: &InputSpec,
    background: u8,
) -> CharpackResult<()> {
    match input.kind {
        InputKind::Petscii => {
            let anim = read_petscii(&input.path)?;
            let mut screens: Vec<ScreenFrame> =
                anim.frames.iter().map(|f| f.to_screen()).collect();
            let charset = match &input.charset {
                Some(path) => {
                    let image = read_charset(path)?;
                    for s in &mut screens {
                        image.remap_cells(&mut s.cells);
                    }
                    Some(image.charset)
                }
                None => None,
            };
            let index = data.import_screens(&screens, charset);
            tracing::info!(
                source = %anim.source,
                frames = screens.len(),
                charset = index,
                "PETSCII imported"
            );
        }
        InputKind::Gif => {
            if input.charset.is_some() {
                tracing::warn!(path = %input.path.display(), "charset is ignored for GIF input");
            }
            let anim = read_gif(&input.path, &PeptoPalette::new(background))?;
            let batches = bitmaps_to_screens(
                &anim.source,
                anim.frames.iter().map(|f| (&f.bitmap, f.delay_ms)),
                background,
            );
            for batch in batches {
                let frames = batch.screens.len();
                let index = data.import_screens(&batch.screens, Some(batch.charset));
                tracing::info!(
                    source = %anim.source,
                    frames,
                    charset = index,
                    "GIF frames imported"
                );
            }
        }
    }
    Ok(())
}

/// Load, reduce and export according to `cfg`.
#[tracing::instrument(skip(cfg), fields(inputs = cfg.inputs.len()))]
pub fn run(cfg: &AppConfig) -> CharpackResult<ConversionOutput> {
    cfg.validate()?;
    let mut data = load_sources(cfg)?;

    let report = data
        .character_ram_mut()
        .reduce_charsets_with_report(cfg.target_charsets, cfg.similarity_percent)?;
    tracing::info!(
        charsets = report.group_sizes.len(),
        distinct = report.distinct_glyphs,
        "charsets reduced"
    );

    let manifest = export_animation(&cfg.output_dir, &data, Some(&report))?;
    Ok(ConversionOutput {
        data,
        report,
        manifest,
    })
}
