//! Output-table writer.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use super::reader::DatasetError;
use super::record::OutputRow;

/// Column order of every output table.
pub const OUTPUT_HEADER: [&str; 3] = ["id", "err_sentence", "cor_sentence"];

/// Write `rows` to `path`, creating parent directories as needed.
pub fn write_path(path: &Path, rows: &[OutputRow]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| DatasetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = std::fs::File::create(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_rows(file, rows)
}

/// Write `rows` as UTF-8 CSV.  The header is written even when `rows` is
/// empty.
pub fn write_rows<W: Write>(sink: W, rows: &[OutputRow]) -> Result<(), DatasetError> {
    // Header is written by hand: serde only emits it alongside the first row.
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
