use crate::{PhaseState, Variant};

/// Read-only snapshot of everything a front-end needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub variant: Variant,
    pub context_input: String,
    pub question_input: String,
    pub context_phase: PhaseState,
    pub question_phase: PhaseState,
    pub context_input_enabled: bool,
    pub question_input_enabled: bool,
    pub context_submit_enabled: bool,
    pub question_submit_enabled: bool,
    /// Topic variant only shows the question form after a summary arrived.
    pub question_visible: bool,
    pub summary: Option<String>,
    /// Never `Some("")`; an empty answer renders as no answer.
    pub answer: Option<String>,
    /// Inline status line.
    pub message: Option<String>,
    /// Blocking alert awaiting acknowledgement.
    pub alert: Option<String>,
    pub dirty: bool,
}
