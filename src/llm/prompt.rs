//! Prompt templates for the two correction passes.
//!
//! Each [`Stage`] pairs a fixed system instruction with a user-message
//! template holding exactly one `{text}` slot.  [`PromptBuilder`] fills the
//! slot and returns the `(system_msg, user_msg)` pair sent to the
//! chat-completions endpoint.

// ---------------------------------------------------------------------------
// System instructions
// ---------------------------------------------------------------------------

const SPECIALIST_SYSTEM: &str = "당신은 한국어 문장 교정 전문가입니다. \
맞춤법/띄어쓰기/문장부호/문법을 자연스럽게 교정하세요. \
반드시 불필요한 설명 없이 교정된 문장만 출력하세요.";

const REVIEWER_SYSTEM: &str = "당신은 1차 교정본을 검토하는 2차 검토자입니다. \
명백한 오류가 아니라면 절대 수정하지 마세요. \
설명 없이 교정된 문장만 출력하세요.";

// ---------------------------------------------------------------------------
// User-message templates
// ---------------------------------------------------------------------------

const SPECIALIST_TEMPLATE: &str = "\
다음 문장의 맞춤법, 띄어쓰기, 문장부호, 문법 오류를 교정하세요.
원래 의미와 어투는 그대로 유지하고, 오류가 없다면 문장을 그대로 출력하세요.

예시:
입력: 안뇽하세요 저는 학생 입니다
출력: 안녕하세요. 저는 학생입니다.

입력: 그 일은 어의가 없었다
출력: 그 일은 어이가 없었다.

문장: {text}
교정:";

const REVIEWER_TEMPLATE: &str = "\
아래는 1차 교정을 마친 문장입니다.
맞춤법이나 띄어쓰기에 명백한 오류가 남아 있을 때만 고치고, 그렇지 않으면 문장을 그대로 출력하세요.
표현을 바꾸거나 내용을 덧붙이지 마세요.

문장: {text}
최종:";

/// Placeholder substituted by [`PromptBuilder::build_chat`].
pub const TEXT_SLOT: &str = "{text}";

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// One of the two correction passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First pass: full correction of the raw sentence.
    Specialist,
    /// Second pass: minimal review of the specialist output.
    Reviewer,
}

impl Stage {
    pub fn system_instruction(self) -> &'static str {
        match self {
            Stage::Specialist => SPECIALIST_SYSTEM,
            Stage::Reviewer => REVIEWER_SYSTEM,
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Stage::Specialist => SPECIALIST_TEMPLATE,
            Stage::Reviewer => REVIEWER_TEMPLATE,
        }
    }

    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Specialist => "specialist",
            Stage::Reviewer => "reviewer",
        }
    }
}

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds `(system_msg, user_msg)` pairs for either stage.
///
/// ```rust
/// use ko_corrector::llm::{PromptBuilder, Stage};
///
/// let (system, user) = PromptBuilder::new().build_chat(Stage::Specialist, "안뇽하세요");
/// assert!(system.contains("교정 전문가"));
/// assert!(user.contains("문장: 안뇽하세요"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build_chat(&self, stage: Stage, text: &str) -> (String, String) {
        (
            stage.system_instruction().to_string(),
            render(stage.template(), text),
        )
    }
}

/// Substitute `text` into the first `{text}` slot of `template`.
///
/// The inserted text is never re-scanned, so a literal `{text}` inside the
/// sentence is left alone.
fn render(template: &str, text: &str) -> String {
    match template.split_once(TEXT_SLOT) {
        Some((head, tail)) => {
            let mut out = String::with_capacity(template.len() + text.len());
            out.push_str(head);
            out.push_str(text);
            out.push_str(tail);
            out
        }
        None => template.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
