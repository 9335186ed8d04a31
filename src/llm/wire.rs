//! OpenAI-compatible chat-completions wire types.
//!
//! Only the fields this tool reads or writes are modelled; unknown response
//! fields (`usage`, `id`, `created`, …) are ignored by serde.

use serde::{Deserialize, Serialize};

use super::client::LlmError;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// A system + user exchange.
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature,
        }
    }

    /// Content of the final user message.
    #[cfg(test)]
    pub(crate) fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// Response body.  `choices` may legitimately be empty on the wire; that is
/// rejected in [`ChatResponse::into_text`] rather than indexed blindly.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Trimmed content of the first choice.
    ///
    /// A string that trims to nothing is still a completion and comes back
    /// as `Ok("")`; only a missing or `null` content is an error.
    pub fn into_text(self) -> Result<String, LlmError> {
        let first = self.choices.into_iter().next().ok_or(LlmError::NoChoices)?;
        let content = first.message.content.ok_or(LlmError::EmptyResponse)?;
        Ok(content.trim().to_string())
    }
}
