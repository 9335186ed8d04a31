//! Two-pass Korean sentence correction over an OpenAI-compatible
//! chat-completions API.
//!
//! * [`config`] — settings, platform paths, API-key resolution.
//! * [`dataset`] — CSV input/output rows.
//! * [`llm`] — chat client, wire types, prompts.
//! * [`pipeline`] — specialist → reviewer loop with per-row fallback.

pub mod config;
pub mod dataset;
pub mod llm;
pub mod pipeline;
