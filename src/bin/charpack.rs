use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "charpack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert animations into reduced charsets plus a frame manifest.
    Convert(ConvertArgs),
    /// Print the glyphs of a charset file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// PETSCII editor `.c` export (repeatable).
    #[arg(long)]
    petscii: Vec<PathBuf>,

    /// Animated GIF (repeatable).
    #[arg(long)]
    gif: Vec<PathBuf>,

    /// Charset (`.bin` / `.64c`) used by every `--petscii` input.
    #[arg(long)]
    charset: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Maximum number of charsets after reduction.
    #[arg(long)]
    targets: Option<usize>,

    /// Percentage of equal cells for neighbouring frames to share a charset.
    #[arg(long)]
    similarity: Option<u32>,

    /// Palette index treated as background for GIF input.
    #[arg(long)]
    background: Option<u8>,

    /// Debug logging.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Charset file (`.bin` / `.64c`).
    #[arg(long)]
    charset: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn build_config(args: ConvertArgs) -> anyhow::Result<charpack::AppConfig> {
    let mut cfg = match &args.config {
        Some(path) => charpack::AppConfig::from_path(path)?,
        None => charpack::AppConfig::default(),
    };

    cfg.inputs
        .extend(args.petscii.into_iter().map(|path| charpack::InputSpec {
            kind: charpack::InputKind::Petscii,
            path,
            charset: args.charset.clone(),
        }));
    cfg.inputs
        .extend(args.gif.into_iter().map(|path| charpack::InputSpec {
            kind: charpack::InputKind::Gif,
            path,
            charset: None,
        }));

    if let Some(out) = args.out {
        cfg.output_dir = out;
    }
    if let Some(targets) = args.targets {
        cfg.target_charsets = targets;
    }
    if let Some(similarity) = args.similarity {
        cfg.similarity_percent = similarity;
    }
    if let Some(background) = args.background {
        cfg.background_color = background;
    }
    cfg.verbose |= args.verbose;
    Ok(cfg)
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let cfg = build_config(args)?;
    init_logging(cfg.verbose);

    let output = charpack::run(&cfg).context("convert animation")?;

    eprintln!(
        "wrote {} charset(s) and {} frame(s) to {}",
        output.manifest.charsets.len(),
        output.manifest.frames.len(),
        cfg.output_dir.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let image = charpack::read_charset(&args.charset)?;
    let charset = &image.charset;

    println!("{}: {} glyph(s)", args.charset.display(), charset.len());
    for (index, glyph) in charset.glyphs().iter().enumerate() {
        println!("#{index}");
        for y in 0..8 {
            let row: String = (0..8)
                .map(|x| if glyph.pixel(x, y) { '#' } else { '.' })
                .collect();
            println!("  {row}");
        }
    }
    Ok(())
}
