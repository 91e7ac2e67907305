use crate::{CallOutcome, Phase, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the context input (video URL or topic).
    ContextInputChanged(String),
    /// User edited the question input.
    QuestionInputChanged(String),
    /// User clicked the context submit control.
    ContextSubmitted,
    /// User clicked the question submit control.
    QuestionSubmitted,
    /// User pressed Enter while focused on one of the inputs.
    EnterPressed(Phase),
    /// Backend resolution of a context submission.
    ContextResolved {
        request_id: RequestId,
        outcome: CallOutcome,
    },
    /// Backend resolution of a question submission.
    QuestionResolved {
        request_id: RequestId,
        outcome: CallOutcome,
    },
    /// User acknowledged the blocking alert.
    AlertDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
