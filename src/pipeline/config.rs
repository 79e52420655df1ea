use std::path::PathBuf;

use crate::error::PipelineError;

pub const DEFAULT_SAMPLE_STRIDE: usize = 3;
pub const DEFAULT_OUTPUT_DIR: &str = "src/data";

/// Configuration for an export run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Every `sample_stride`-th accepted movie also becomes a TV show
    pub sample_stride: usize,
    /// Keep only the N most popular movies
    pub limit: Option<usize>,
    pub require_overview: bool,
    pub progress_interval: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input_path: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            limit: None,
            require_overview: false,
            progress_interval: 0, // Disabled
        }
    }
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Checked before any row is read.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(PipelineError::Config("no input file given".to_string()));
        }
        if !self.input_path.is_file() {
            return Err(PipelineError::Config(format!(
                "input file '{}' does not exist or is not a regular file",
                self.input_path.display()
            )));
        }
        if self.sample_stride == 0 {
            return Err(PipelineError::Config(
                "sample stride must be at least 1".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(PipelineError::Config(
                "limit must be at least 1 when given".to_string(),
            ));
        }
        Ok(())
    }
}
