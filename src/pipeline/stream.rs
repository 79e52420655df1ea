// src/pipeline/stream.rs
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::input_format::{CsvSource, EXPECTED_COLUMNS};
use crate::output_format::TsModule;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::context::{Movie, ProcessingStats, TvShow};
use crate::pipeline::derive::derive_tv_shows;
use crate::pipeline::normalize::{normalize_movie, InclusionRules};
use crate::pipeline::sort::sort_by_popularity;

/// Both datasets, sorted and ready to be written
#[derive(Debug, Default)]
pub struct Datasets {
    pub movies: Vec<Movie>,
    pub tv_shows: Vec<TvShow>,
}

/// Paths written by [`ExportPipeline::run`]
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub movies_path: PathBuf,
    pub tv_shows_path: PathBuf,
    pub stats: ProcessingStats,
}

/// CSV export -> movies + derived TV shows -> generated modules
pub struct ExportPipeline {
    config: PipelineConfig,
    stats: ProcessingStats,
}

impl ExportPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        ExportPipeline {
            config,
            stats: ProcessingStats::default(),
        }
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Validate, read, build, write. Any error returned here is fatal.
    pub fn run(&mut self) -> Result<ExportOutput, PipelineError> {
        let start_time = Instant::now();
        self.config.validate()?;

        info!(input = %self.config.input_path.display(), "Reading file");
        let mut source = CsvSource::open(&self.config.input_path)?;
        let datasets = self.build(&mut source)?;

        let source_name = self
            .config
            .input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let movies_path =
            TsModule::movies().write(&self.config.output_dir, &datasets.movies, &source_name)?;
        info!(path = %movies_path.display(), count = datasets.movies.len(), "Saved movies");

        let tv_shows_path =
            TsModule::tv_shows().write(&self.config.output_dir, &datasets.tv_shows, &source_name)?;
        info!(path = %tv_shows_path.display(), count = datasets.tv_shows.len(), "Saved TV shows");

        self.stats.processing_time = start_time.elapsed();
        Ok(ExportOutput {
            movies_path,
            tv_shows_path,
            stats: self.stats.clone(),
        })
    }

    /// Single pass over the source; nothing is written.
    pub fn build<R: Read>(&mut self, source: &mut CsvSource<R>) -> Result<Datasets, PipelineError> {
        self.stats = ProcessingStats::default();

        for column in source.missing_columns(EXPECTED_COLUMNS) {
            warn!(column, "Expected column missing from input, treating as empty");
        }

        let rules = InclusionRules {
            require_overview: self.config.require_overview,
        };
        let mut movies = Vec::new();

        for item in source.records() {
            self.stats.rows_read += 1;
            if self.config.progress_interval > 0
                && self.stats.rows_read % self.config.progress_interval == 0
            {
                info!(rows = self.stats.rows_read, accepted = movies.len(), "Progress");
            }

            let raw = match item? {
                Ok(raw) => raw,
                Err(e) => {
                    self.stats.row_errors += 1;
                    warn!(row = e.row(), error = %e, "Error processing row, skipping");
                    continue;
                }
            };

            match normalize_movie(&raw, rules) {
                Ok(movie) => movies.push(movie),
                Err(reason) => {
                    self.stats.rows_skipped += 1;
                    debug!(row = raw.row, %reason, "Row excluded");
                }
            }
        }

        // Positions for the derived dataset are encounter order, not rank
        let mut tv_shows = derive_tv_shows(&movies, self.config.sample_stride);

        sort_by_popularity(&mut movies);
        sort_by_popularity(&mut tv_shows);
        if let Some(limit) = self.config.limit {
            movies.truncate(limit);
        }

        self.stats.movies_written = movies.len();
        self.stats.tv_shows_written = tv_shows.len();
        info!(count = movies.len(), "Successfully processed movies");
        info!(count = tv_shows.len(), "Successfully processed TV shows");

        Ok(Datasets { movies, tv_shows })
    }
}
