//! LLM access for the correction pipeline.
//!
//! This module provides:
//! * [`ChatClient`] — async trait for one chat-completion round trip.
//! * [`ApiClient`] — OpenAI-compatible REST client (Upstage by default).
//! * [`ChatRequest`] / [`ChatResponse`] — wire types.
//! * [`PromptBuilder`] / [`Stage`] — specialist and reviewer prompts.
//! * [`LlmError`] — error variants for a single call.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use ko_corrector::config::{ApiKey, AppConfig};
//! use ko_corrector::llm::{ApiClient, ChatClient, ChatRequest, PromptBuilder, Stage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let key = ApiKey::from_env(&config.llm.api_key_env).unwrap();
//!     let client = ApiClient::from_config(&config.llm, key);
//!
//!     let (system, user) = PromptBuilder::new().build_chat(Stage::Specialist, "안뇽하세요");
//!     let request = ChatRequest::new(&config.llm.model, system, user, 0.0);
//!     println!("{}", client.complete(&request).await.unwrap());
//! }
//! ```

pub mod client;
pub mod prompt;
pub mod wire;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiClient, ChatClient, LlmError};
pub use prompt::{PromptBuilder, Stage};
pub use wire::{ChatMessage, ChatRequest, ChatResponse};
