use qa_logging::qa_debug;

use crate::notice::{empty_input_alert, failure_text, CONTEXT_ANALYZED_BANNER};
use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Which backend flavor the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Video URL context; failures go to the inline status line.
    #[default]
    Video,
    /// Topic context with a summary; failures raise a blocking alert.
    Topic,
}

impl Variant {
    /// Topic hides the question form until a context was analyzed.
    pub fn gates_question_on_context(self) -> bool {
        matches!(self, Variant::Topic)
    }

    /// Form semantics: Enter in the context input submits it.
    pub fn enter_submits_context(self) -> bool {
        matches!(self, Variant::Topic)
    }

    /// Video keeps submit controls disabled while their input is empty;
    /// topic leaves them enabled and alerts instead.
    fn disables_submit_on_empty(self) -> bool {
        matches!(self, Variant::Video)
    }
}

/// One of the two independent submission flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Context,
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseState {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
    Succeeded,
    Failed,
}

impl PhaseState {
    pub fn is_pending(self) -> bool {
        matches!(self, PhaseState::Pending { .. })
    }
}

/// Normalized failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// Backend answered with a non-success indication, with its error text if any.
    Rejected(Option<String>),
    /// The backend could not be reached or its answer could not be read.
    Transport(String),
}

pub type CallOutcome = Result<String, CallFailure>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    variant: Variant,
    context_input: String,
    question_input: String,
    context_phase: PhaseState,
    question_phase: PhaseState,
    summary: Option<String>,
    answer: Option<String>,
    message: Option<String>,
    alert: Option<String>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn context_input(&self) -> &str {
        &self.context_input
    }

    pub fn question_input(&self) -> &str {
        &self.question_input
    }

    pub fn phase(&self, phase: Phase) -> PhaseState {
        match phase {
            Phase::Context => self.context_phase,
            Phase::Question => self.question_phase,
        }
    }

    pub fn question_visible(&self) -> bool {
        !self.variant.gates_question_on_context() || self.summary.is_some()
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let disables_on_empty = self.variant.disables_submit_on_empty();
        let context_pending = self.context_phase.is_pending();
        let question_pending = self.question_phase.is_pending();
        let question_visible = self.question_visible();

        AppViewModel {
            variant: self.variant,
            context_input: self.context_input.clone(),
            question_input: self.question_input.clone(),
            context_phase: self.context_phase,
            question_phase: self.question_phase,
            context_input_enabled: !context_pending,
            question_input_enabled: question_visible && !question_pending,
            context_submit_enabled: !context_pending
                && !(disables_on_empty && self.context_input.is_empty()),
            question_submit_enabled: question_visible
                && !question_pending
                && !(disables_on_empty && self.question_input.is_empty()),
            question_visible,
            summary: self.summary.clone(),
            answer: self.answer.clone().filter(|answer| !answer.is_empty()),
            message: self.message.clone(),
            alert: self.alert.clone(),
            dirty: self.dirty,
        }
    }

    /// Inputs are disabled while their phase is pending; edits are dropped.
    pub(crate) fn set_input(&mut self, phase: Phase, text: String) {
        if self.phase(phase).is_pending() {
            return;
        }
        let slot = match phase {
            Phase::Context => &mut self.context_input,
            Phase::Question => &mut self.question_input,
        };
        if *slot != text {
            *slot = text;
            self.dirty = true;
        }
    }

    /// Synchronous notification for an empty submission; no phase transition.
    pub(crate) fn reject_empty(&mut self, phase: Phase) {
        if let Some(alert) = empty_input_alert(self.variant, phase) {
            self.alert = Some(alert.to_string());
            self.dirty = true;
        }
    }

    /// Moves `phase` to pending under a fresh request id and clears the
    /// results that phase replaces.
    pub(crate) fn begin(&mut self, phase: Phase) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let pending = PhaseState::Pending { request_id };

        match phase {
            Phase::Context => {
                self.context_phase = pending;
                if self.variant.gates_question_on_context() {
                    self.summary = None;
                }
            }
            Phase::Question => self.question_phase = pending,
        }
        self.message = None;
        self.answer = None;
        self.dirty = true;
        request_id
    }

    /// Applies a backend resolution. Returns `false` when it was discarded
    /// because `request_id` is not the phase's pending request.
    pub(crate) fn resolve(
        &mut self,
        phase: Phase,
        request_id: RequestId,
        outcome: CallOutcome,
    ) -> bool {
        if self.phase(phase) != (PhaseState::Pending { request_id }) {
            qa_debug!(
                "Discarding stale {:?} resolution request_id={} current={:?}",
                phase,
                request_id,
                self.phase(phase)
            );
            return false;
        }

        let next = match outcome {
            Ok(text) => {
                match (phase, self.variant) {
                    (Phase::Context, Variant::Video) => {
                        self.message = Some(CONTEXT_ANALYZED_BANNER.to_string());
                    }
                    (Phase::Context, Variant::Topic) => self.summary = Some(text),
                    (Phase::Question, _) => self.answer = Some(text),
                }
                PhaseState::Succeeded
            }
            Err(failure) => {
                let text = failure_text(self.variant, &failure);
                match self.variant {
                    Variant::Video => self.message = Some(text),
                    Variant::Topic => self.alert = Some(text),
                }
                PhaseState::Failed
            }
        };

        match phase {
            Phase::Context => self.context_phase = next,
            Phase::Question => self.question_phase = next,
        }
        self.dirty = true;
        true
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.dirty = true;
        }
    }
}
