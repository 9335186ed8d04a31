use serde::Serialize;

/// One sentence read from the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// Identifier from the `id` column, or `temp_id_<index>` when the table
    /// has no such column.
    pub id: String,
    /// The sentence to correct.
    pub err_sentence: String,
}

impl InputRow {
    pub fn new(id: impl Into<String>, err_sentence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            err_sentence: err_sentence.into(),
        }
    }

    /// Placeholder identifier for row `index` of a table without `id`.
    pub fn placeholder_id(index: usize) -> String {
        format!("temp_id_{index}")
    }
}

/// One corrected sentence, serialised in field order as
/// `id,err_sentence,cor_sentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub id: String,
    pub err_sentence: String,
    pub cor_sentence: String,
}

impl OutputRow {
    /// Pair `row` with its corrected sentence, copying `id` and
    /// `err_sentence` through unchanged.
    pub fn from_input(row: &InputRow, cor_sentence: impl Into<String>) -> Self {
        Self {
            id: row.id.clone(),
            err_sentence: row.err_sentence.clone(),
            cor_sentence: cor_sentence.into(),
        }
    }
}
