//! JSON bodies exchanged with the backend.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeVideoRequest<'a> {
    pub youtube_url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeTopicRequest<'a> {
    pub topic: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskRequest<'a> {
    pub question: &'a str,
}

/// `/analyze` and `/ask` reply in the video protocol. Any JSON object is a
/// reply; a missing `success` counts as `false`.
#[derive(Debug, Deserialize)]
pub(crate) struct FlaggedReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryReply {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerReply {
    pub answer: String,
}

/// Error body of the topic protocol. Validation failures carry a structured
/// `detail` instead of a string.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorReply {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorReply {
    pub(crate) fn detail_text(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}
