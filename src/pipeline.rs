// src/pipeline.rs
pub mod config;
pub mod context;
pub mod derive;
pub mod normalize;
pub mod sort;
pub mod stream;

pub use config::PipelineConfig;
pub use context::{Movie, ProcessingStats, TvShow};
pub use derive::derive_tv_shows;
pub use normalize::{normalize_movie, InclusionRules, SkipReason};
pub use sort::{sort_by_popularity, Ranked};
pub use stream::{Datasets, ExportOutput, ExportPipeline};
