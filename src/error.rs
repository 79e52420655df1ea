use std::path::PathBuf;

/// Fatal errors: any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Cannot read input file '{path}': {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Row-level errors: logged, counted, and the row is skipped.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("Malformed row {row}: {message}")]
    Malformed { row: usize, message: String },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            RowError::Malformed { row, .. } => *row,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenreParseError {
    #[error("not decodable even after repair: {0}")]
    Undecodable(#[from] serde_json::Error),
}
