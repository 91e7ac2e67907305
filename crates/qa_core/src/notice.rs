//! User-visible texts produced by the controller.
use crate::{CallFailure, Variant};

/// Status shown after a video was analyzed; the server's own message is not shown.
pub const CONTEXT_ANALYZED_BANNER: &str =
    "✅ Video processed successfully! You can now ask questions.";
pub const EMPTY_TOPIC_ALERT: &str = "Please enter a topic.";
pub const EMPTY_QUESTION_ALERT: &str = "Please enter a question.";
/// Placeholder when a rejection carries no error text.
pub const UNKNOWN_ERROR: &str = "unknown error";

pub(crate) fn empty_input_alert(variant: Variant, phase: crate::Phase) -> Option<&'static str> {
    match (variant, phase) {
        (Variant::Video, _) => None,
        (Variant::Topic, crate::Phase::Context) => Some(EMPTY_TOPIC_ALERT),
        (Variant::Topic, crate::Phase::Question) => Some(EMPTY_QUESTION_ALERT),
    }
}

pub(crate) fn failure_text(variant: Variant, failure: &CallFailure) -> String {
    match (variant, failure) {
        (Variant::Video, CallFailure::Rejected(detail)) => {
            format!("❌ Error: {}", rejection_detail(detail.as_deref()))
        }
        (Variant::Video, CallFailure::Transport(detail)) => format!(
            "❌ An unexpected error occurred. Please check the backend server. Error: {detail}"
        ),
        (Variant::Topic, CallFailure::Rejected(detail)) => {
            rejection_detail(detail.as_deref()).to_string()
        }
        (Variant::Topic, CallFailure::Transport(detail)) => format!(
            "Failed to reach the backend. Please check the backend server. ({detail})"
        ),
    }
}

/// Server error text, or [`UNKNOWN_ERROR`] when the backend sent none.
fn rejection_detail(detail: Option<&str>) -> &str {
    detail.unwrap_or(UNKNOWN_ERROR)
}
