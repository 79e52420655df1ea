// src/output_format.rs - Generated TypeScript data modules

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

pub const GENERATED_HEADER: &str = "// Auto-generated file - DO NOT EDIT";

/// One generated `.ts` file: an exported `as const` array plus a type alias
/// for its element shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TsModule {
    pub const_name: &'static str,
    pub type_name: &'static str,
    pub file_name: &'static str,
}

impl TsModule {
    pub fn movies() -> Self {
        TsModule {
            const_name: "importedMovies",
            type_name: "ImportedMovie",
            file_name: "importedMovies.ts",
        }
    }

    pub fn tv_shows() -> Self {
        TsModule {
            const_name: "importedTvShows",
            type_name: "ImportedTvShow",
            file_name: "importedTvShows.ts",
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name)
    }

    /// `source` is only echoed in the header comment.
    pub fn render<T: Serialize>(&self, items: &[T], source: &str) -> Result<String, PipelineError> {
        // Pretty printer keeps non-ASCII as-is and indents by two spaces
        let literal = serde_json::to_string_pretty(items)?;

        Ok(format!(
            "{header}\n// Data imported from {source}\nexport const {name} = {literal} as const;\n\nexport type {ty} = typeof {name}[number];\n",
            header = GENERATED_HEADER,
            source = comment_safe(source),
            name = self.const_name,
            literal = literal,
            ty = self.type_name,
        ))
    }

    /// Overwrites `<dir>/<file_name>`, creating `dir` if needed.
    pub fn write<T: Serialize>(
        &self,
        dir: &Path,
        items: &[T],
        source: &str,
    ) -> Result<PathBuf, PipelineError> {
        let content = self.render(items, source)?;
        fs::create_dir_all(dir)?;
        let path = self.path_in(dir);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// The JSON literal inside a rendered module, if it has the expected shape.
    pub fn extract_literal<'a>(&self, text: &'a str) -> Option<&'a str> {
        let prefix = format!("export const {} = ", self.const_name);
        let start = text.find(&prefix)? + prefix.len();
        let end = text.rfind(" as const;")?;
        if end < start {
            return None;
        }
        Some(&text[start..end])
    }
}

/// A line comment ends at the first line break, so control characters in
/// the echoed file name are flattened to spaces.
fn comment_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
