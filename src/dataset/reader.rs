//! Source-table reader.
//!
//! The table must carry a header row with an `err_sentence` column.  An `id`
//! column is optional; without it every row receives `temp_id_<index>`.
//! Extra columns are ignored.  Any parse failure aborts the whole read, so
//! the pipeline never starts on a half-loaded table.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use super::record::InputRow;

pub const ID_COLUMN: &str = "id";
pub const SENTENCE_COLUMN: &str = "err_sentence";

/// Fatal errors raised while loading or writing a sentence table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required header is absent.
    #[error("Input CSV must contain '{0}' column")]
    MissingColumn(&'static str),

    /// The file could not be opened or created.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed CSV (ragged rows, invalid UTF-8, …).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read and validate the table at `path`.
pub fn read_path(path: &Path) -> Result<Vec<InputRow>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file)
}

/// Read and validate a table from any byte source.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<InputRow>, DatasetError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let headers = reader.headers()?.clone();
    let sentence_idx =
        column_index(&headers, SENTENCE_COLUMN).ok_or(DatasetError::MissingColumn(SENTENCE_COLUMN))?;
    let id_idx = column_index(&headers, ID_COLUMN);

    if id_idx.is_none() {
        log::warn!("'id' column not found; generating temp_id_<n> identifiers");
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let err_sentence = record.get(sentence_idx).unwrap_or_default().to_string();
        let id = match id_idx {
            Some(idx) => record.get(idx).unwrap_or_default().to_string(),
            None => InputRow::placeholder_id(index),
        };
        rows.push(InputRow { id, err_sentence });
    }

    log::info!("loaded {} rows", rows.len());
    Ok(rows)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_id_and_sentence() {
        let csv = "id,err_sentence\n1,안뇽하세요\n2,오늘 날씨 좋다\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![
                InputRow::new("1", "안뇽하세요"),
                InputRow::new("2", "오늘 날씨 좋다"),
            ]
        );
    }

    #[test]
    fn missing_id_column_synthesizes_placeholders() {
        let csv = "err_sentence\n오늘 날씨 좋다\n내일 봐요\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].id, "temp_id_0");
        assert_eq!(rows[1].id, "temp_id_1");
        assert_eq!(rows[1].err_sentence, "내일 봐요");
    }

    #[test]
    fn missing_sentence_column_is_fatal() {
        let csv = "id,sentence\n1,안녕\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::MissingColumn("err_sentence")));
        assert!(err.to_string().contains("err_sentence"));
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let csv = "err_sentence,note,id\n문장 입니다,x,a1\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows, vec![InputRow::new("a1", "문장 입니다")]);
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let csv = "id,err_sentence\n1,\"안녕, 친구\n반가워\"\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].err_sentence, "안녕, 친구\n반가워");
    }

    #[test]
    fn utf8_bom_is_tolerated() {
        let csv = "\u{feff}id,err_sentence\n1,안녕\n";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows, vec![InputRow::new("1", "안녕")]);
    }

    #[test]
    fn ragged_rows_are_a_format_error() {
        let csv = "id,err_sentence\n1,안녕,extra\n";
        let err = read_rows(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn header_only_table_is_empty() {
        let rows = read_rows("id,err_sentence\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.csv");

        let err = read_path(&path).unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }
}
