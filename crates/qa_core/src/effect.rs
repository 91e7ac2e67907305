use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// First-phase call: submit the context (video URL or topic) for analysis.
    AnalyzeContext { request_id: RequestId, input: String },
    /// Second-phase call: ask a question against the analyzed context.
    AskQuestion {
        request_id: RequestId,
        question: String,
    },
}
