use std::path::PathBuf;

use clap::Parser;
use mediameta_core::{InputMode, OutputFormat, ProcessOptions, ReportSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mediameta", version, about = "Convert a media metadata report into a script-loadable data file")]
struct Cli {
    /// Metadata report (used when not reading standard input)
    #[arg(short, long, env = "METADATA_FILE", default_value = "metadata.txt")]
    input: PathBuf,

    /// Output data file [default: js/mediaMetadata.js, or js/imageMetadata.js with --no-types]
    #[arg(short, long, env = "OUTPUT_JS_FILE")]
    output: Option<PathBuf>,

    /// Where to read the report from
    #[arg(long, value_enum, default_value_t = InputMode::Auto)]
    input_mode: InputMode,

    /// Ignore `Type:` lines and write the untyped `imageMetadata` format
    #[arg(long)]
    no_types: bool,

    /// Disable date guessing from filenames
    #[arg(long)]
    no_guess: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let track_types = !cli.no_types;

    let source = ReportSource::from_mode(cli.input_mode, &cli.input);
    tracing::debug!(%source, "reading report");

    let options = ProcessOptions {
        source,
        output: cli
            .output
            .unwrap_or_else(|| OutputFormat::new(track_types).default_output()),
        track_types,
        no_guess: cli.no_guess,
    };

    let result = mediameta_core::process(&options)?;

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!("Wrote {}", result.output.display());
    if let Some(legacy) = &result.legacy_output {
        tracing::info!("Wrote {} (image-only)", legacy.display());
    }
    println!("{}", result);

    Ok(())
}
