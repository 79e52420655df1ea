// src/input_format.rs - CSV source yielding one RawRecord per data row

use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{PipelineError, RowError};

/// Columns the normalizer reads. Anything else in the export is ignored.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "id",
    "title",
    "overview",
    "release_date",
    "poster_path",
    "backdrop_path",
    "genres",
    "runtime",
    "status",
    "vote_average",
    "vote_count",
    "original_language",
    "popularity",
];

/// One row of the source file, column name to raw string value
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub row: usize,
    fields: IndexMap<String, String>,
}

impl RawRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: IndexMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: &str) {
        self.fields.insert(column.to_string(), value.to_string());
    }

    /// Present and non-empty; an empty cell reads the same as a missing column.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
}

impl CsvSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path).map_err(|source| PipelineError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(input: R) -> Result<Self, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(input);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        Ok(Self { reader, headers })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn missing_columns<'c>(&self, expected: &[&'c str]) -> Vec<&'c str> {
        expected
            .iter()
            .copied()
            .filter(|col| !self.headers.iter().any(|h| h.as_str() == *col))
            .collect()
    }

    /// Outer error is fatal (I/O), inner error only condemns the row.
    /// Short rows leave trailing columns missing; surplus cells are dropped.
    pub fn records(
        &mut self,
    ) -> impl Iterator<Item = Result<Result<RawRecord, RowError>, PipelineError>> + '_ {
        let headers = &self.headers;
        self.reader
            .records()
            .enumerate()
            .map(move |(i, result)| {
                let row = i + 1;
                match result {
                    Ok(record) => {
                        let mut raw = RawRecord::new(row);
                        for (header, value) in headers.iter().zip(record.iter()) {
                            raw.insert(header, value);
                        }
                        Ok(Ok(raw))
                    }
                    Err(e) if e.is_io_error() => Err(PipelineError::Csv(e)),
                    Err(e) => Ok(Err(RowError::Malformed {
                        row,
                        message: e.to_string(),
                    })),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_rows_by_header() {
        let input = Cursor::new("id,title,genres\n1,Avatar,\"[{\"\"name\"\": \"\"Action\"\"}]\"\n");
        let mut source = CsvSource::from_reader(input).unwrap();
        assert_eq!(source.headers(), &["id", "title", "genres"]);

        let rows: Vec<RawRecord> = source
            .records()
            .map(|r| r.unwrap().unwrap())
            .collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].field("title"), Some("Avatar"));
        assert_eq!(rows[0].field("genres"), Some(r#"[{"name": "Action"}]"#));
    }

    #[test]
    fn test_empty_cell_reads_as_missing() {
        let raw = RawRecord::new(1).with("title", "").with("overview", "x");
        assert_eq!(raw.field("title"), None);
        assert_eq!(raw.field("poster_path"), None);
        assert_eq!(raw.field("overview"), Some("x"));
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let input = Cursor::new("id,title,poster_path\n1,Short\n2,Long,/l.jpg,extra\n");
        let mut source = CsvSource::from_reader(input).unwrap();

        let rows: Vec<RawRecord> = source
            .records()
            .map(|r| r.unwrap().unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("title"), Some("Short"));
        assert_eq!(rows[0].field("poster_path"), None);
        assert_eq!(rows[1].field("poster_path"), Some("/l.jpg"));
        assert_eq!(rows[1].field("extra"), None);
    }

    #[test]
    fn test_invalid_utf8_is_row_error() {
        let input = Cursor::new(b"id,title\n1,A\n2,\xff\xfe\n3,C\n".to_vec());
        let mut source = CsvSource::from_reader(input).unwrap();

        let results: Vec<_> = source.records().map(|r| r.unwrap()).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(e) => assert_eq!(e.row(), 2),
            Ok(_) => panic!("Expected a malformed row"),
        }
        assert_eq!(results[2].as_ref().unwrap().field("title"), Some("C"));
    }

    #[test]
    fn test_missing_columns() {
        let source = CsvSource::from_reader(Cursor::new(" title ,poster_path\n")).unwrap();
        let missing = source.missing_columns(&["title", "poster_path", "popularity"]);
        assert_eq!(missing, vec!["popularity"]);
    }

    #[test]
    fn test_open_missing_file_is_fatal() {
        let result = CsvSource::open(Path::new("/nonexistent/tmdb_movies.csv"));
        assert!(matches!(result, Err(PipelineError::InputUnreadable { .. })));
    }
}
