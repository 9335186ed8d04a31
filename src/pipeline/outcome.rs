//! Per-row outcomes and the run summary.

use crate::dataset::OutputRow;

/// How a row's `cor_sentence` was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Both passes succeeded; `cor_sentence` is the reviewer output.
    Reviewed,
    /// The reviewer pass failed; `cor_sentence` is the specialist output.
    SpecialistFallback,
    /// The specialist pass failed, or the reviewer failed after an empty
    /// specialist answer; `cor_sentence` is the original sentence.
    OriginalFallback,
}

/// Ordered output rows plus per-outcome counters.
#[derive(Debug, Default)]
pub struct RunReport {
    /// One row per input row, in input order.
    pub rows: Vec<OutputRow>,
    pub reviewed: usize,
    pub specialist_fallbacks: usize,
    pub original_fallbacks: usize,
}

impl RunReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn push(&mut self, row: OutputRow, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Reviewed => self.reviewed += 1,
            RowOutcome::SpecialistFallback => self.specialist_fallbacks += 1,
            RowOutcome::OriginalFallback => self.original_fallbacks += 1,
        }
        self.rows.push(row);
    }

    /// Rows that hit at least one failed call.
    pub fn failed_rows(&self) -> usize {
        self.specialist_fallbacks + self.original_fallbacks
    }
}
