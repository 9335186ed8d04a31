//! Correction pipeline — drives the specialist → reviewer loop over a table.
//!
//! # Row flow
//!
//! ```text
//! err_sentence
//!   └─▶ specialist prompt → client.complete
//!         ├─ Err → warn, cor_sentence = err_sentence          [OriginalFallback]
//!         └─ Ok(corrected_1)
//!               └─▶ reviewer prompt → client.complete
//!                     ├─ Err → warn, cor_sentence = corrected_1 [SpecialistFallback]
//!                     │          (err_sentence if corrected_1 is empty)
//!                     └─ Ok(corrected_2) → cor_sentence        [Reviewed]
//! ```
//!
//! An empty completion is a successful call: it is passed to the reviewer or
//! written out as-is.  A failed call never aborts the run; it only lowers
//! the quality of its own row.  Warnings are printed through
//! [`ProgressBar::suspend`] so they do not tear the bar.
//!
//! With `concurrency > 1` several rows are in flight at once, but the two
//! calls of a row stay sequential and results come back in input order.

use futures_util::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::dataset::{InputRow, OutputRow};
use crate::llm::{ChatClient, ChatRequest, LlmError, PromptBuilder, Stage};

use super::outcome::{RowOutcome, RunReport};

/// Characters of the offending sentence quoted in a failure log line.
const SNIPPET_CHARS: usize = 50;

// ---------------------------------------------------------------------------
// CorrectionPipeline
// ---------------------------------------------------------------------------

/// Two-pass sentence corrector over any [`ChatClient`].
///
/// ```rust,no_run
/// use indicatif::ProgressBar;
/// use ko_corrector::config::{ApiKey, LlmConfig};
/// use ko_corrector::dataset::InputRow;
/// use ko_corrector::llm::ApiClient;
/// use ko_corrector::pipeline::CorrectionPipeline;
///
/// # async fn example() {
/// let config = LlmConfig::default();
/// let key = ApiKey::from_env(&config.api_key_env).unwrap();
/// let pipeline = CorrectionPipeline::new(ApiClient::from_config(&config, key), &config.model);
///
/// let rows = vec![InputRow::new("1", "안뇽하세요")];
/// let report = pipeline.run(&rows, &ProgressBar::hidden()).await;
/// assert_eq!(report.rows.len(), 1);
/// # }
/// ```
pub struct CorrectionPipeline<C: ChatClient> {
    client: C,
    prompts: PromptBuilder,
    model: String,
    temperature: f32,
    concurrency: usize,
}

impl<C: ChatClient> CorrectionPipeline<C> {
    /// Sequential pipeline at temperature 0.
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            prompts: PromptBuilder::new(),
            model: model.into(),
            temperature: 0.0,
            concurrency: 1,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Allow up to `concurrency` rows in flight.  Values below 1 are
    /// treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    // -----------------------------------------------------------------------
    // Batch
    // -----------------------------------------------------------------------

    /// Correct every row, returning exactly one output row per input row in
    /// input order.  `progress` is advanced once per finished row.
    pub async fn run(&self, rows: &[InputRow], progress: &ProgressBar) -> RunReport {
        progress.set_length(rows.len() as u64);

        let results: Vec<(OutputRow, RowOutcome)> = stream::iter(rows)
            .map(|row| async move {
                let result = self.correct_row(row, progress).await;
                progress.inc(1);
                result
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut report = RunReport::with_capacity(rows.len());
        for (row, outcome) in results {
            report.push(row, outcome);
        }
        report
    }

    // -----------------------------------------------------------------------
    // Single row
    // -----------------------------------------------------------------------

    /// Run both passes for one row and apply the fallback policy.
    pub async fn correct_row(
        &self,
        row: &InputRow,
        progress: &ProgressBar,
    ) -> (OutputRow, RowOutcome) {
        let text = row.err_sentence.as_str();

        let corrected_1 = match self.call(Stage::Specialist, text).await {
            Ok(corrected) => corrected,
            Err(e) => {
                progress.suspend(|| report_failure(Stage::Specialist, text, &e));
                return (OutputRow::from_input(row, text), RowOutcome::OriginalFallback);
            }
        };
        log::debug!("row {}: specialist = {:?}", row.id, corrected_1);

        match self.call(Stage::Reviewer, &corrected_1).await {
            Ok(corrected_2) => {
                log::debug!("row {}: reviewer = {:?}", row.id, corrected_2);
                (OutputRow::from_input(row, corrected_2), RowOutcome::Reviewed)
            }
            Err(e) => {
                progress.suspend(|| report_failure(Stage::Reviewer, text, &e));
                if corrected_1.is_empty() {
                    (OutputRow::from_input(row, text), RowOutcome::OriginalFallback)
                } else {
                    (
                        OutputRow::from_input(row, corrected_1),
                        RowOutcome::SpecialistFallback,
                    )
                }
            }
        }
    }

    async fn call(&self, stage: Stage, text: &str) -> Result<String, LlmError> {
        let (system, user) = self.prompts.build_chat(stage, text);
        let request = ChatRequest::new(self.model.as_str(), system, user, self.temperature);
        self.client.complete(&request).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn report_failure(stage: Stage, text: &str, error: &LlmError) {
    log::warn!("{}", failure_message(stage, text, error));
}

fn failure_message(stage: Stage, text: &str, error: &LlmError) -> String {
    format!(
        "Error processing ({} pass): {}... - {error}",
        stage.label(),
        snippet(text, SNIPPET_CHARS)
    )
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
