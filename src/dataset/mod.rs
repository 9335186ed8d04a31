//! Sentence tables: CSV in, CSV out.
//!
//! * [`InputRow`] / [`OutputRow`] — one record per sentence.
//! * [`read_path`] / [`read_rows`] — parse and validate the source table.
//! * [`write_path`] / [`write_rows`] — emit `id,err_sentence,cor_sentence`.
//! * [`DatasetError`] — fatal, pre-loop table errors.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::{read_path, read_rows, DatasetError};
pub use record::{InputRow, OutputRow};
pub use writer::{write_path, write_rows, OUTPUT_HEADER};
