// src/lib.rs
pub mod error;
pub mod genres;
pub mod input_format;
pub mod output_format;
pub mod pipeline;

pub use error::*;
pub use pipeline::*;

pub use genres::parse_genre_names;
pub use input_format::{CsvSource, RawRecord};
pub use output_format::TsModule;
