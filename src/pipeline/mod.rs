//! Correction pipeline.
//!
//! Wires the sentence table through the two LLM passes and collects the
//! results.
//!
//! # Architecture
//!
//! ```text
//! Vec<InputRow>
//!        │
//!        ▼
//! CorrectionPipeline::run()   ← async, `concurrency` rows in flight
//!        │
//!        ├─ correct_row(row)
//!        │     ├─ Stage::Specialist → ChatClient::complete
//!        │     └─ Stage::Reviewer   → ChatClient::complete
//!        │
//!        └─ RunReport { rows (input order), outcome counters }
//! ```

pub mod outcome;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use outcome::{RowOutcome, RunReport};
pub use runner::CorrectionPipeline;
