use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tmdbgen::pipeline::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_STRIDE};
use tmdbgen::{ExportPipeline, PipelineConfig};

#[derive(Parser)]
#[command(name = "tmdbgen")]
#[command(about = "Generate TypeScript movie and TV show data modules from a TMDB CSV export")]
#[command(version)]
struct Args {
    /// TMDB movies CSV export
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input_file: PathBuf,

    /// Directory receiving importedMovies.ts and importedTvShows.ts
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Derive a TV show from every Nth accepted movie
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_STRIDE)]
    sample_stride: usize,

    /// Keep only the N most popular movies
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Also drop movies without an overview
    #[arg(long)]
    require_overview: bool,

    /// Log progress every N rows
    #[arg(long, value_name = "N")]
    progress: Option<usize>,

    /// Debug mode - show per-row decisions
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            input_path: self.input_file,
            output_dir: self.output_dir,
            sample_stride: self.sample_stride,
            limit: self.limit,
            require_overview: self.require_overview,
            progress_interval: self.progress.unwrap_or(0),
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(args.into_config()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: PipelineConfig) -> anyhow::Result<()> {
    let input = config.input_path.clone();
    let mut pipeline = ExportPipeline::new(config);

    let output = pipeline
        .run()
        .with_context(|| format!("export from '{}' failed", input.display()))?;

    let stats = &output.stats;
    info!(
        rows = stats.rows_read,
        skipped = stats.rows_skipped,
        errors = stats.row_errors,
        movies = stats.movies_written,
        tv_shows = stats.tv_shows_written,
        elapsed = ?stats.processing_time,
        "Data import completed"
    );

    Ok(())
}
