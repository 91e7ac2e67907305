use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ContextInputChanged(text) => {
            state.set_input(Phase::Context, text);
            Vec::new()
        }
        Msg::QuestionInputChanged(text) => {
            state.set_input(Phase::Question, text);
            Vec::new()
        }
        Msg::ContextSubmitted => submit_context(&mut state),
        Msg::QuestionSubmitted => submit_question(&mut state),
        Msg::EnterPressed(Phase::Question) => submit_question(&mut state),
        Msg::EnterPressed(Phase::Context) => {
            if state.variant().enter_submits_context() {
                submit_context(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ContextResolved {
            request_id,
            outcome,
        } => {
            state.resolve(Phase::Context, request_id, outcome);
            Vec::new()
        }
        Msg::QuestionResolved {
            request_id,
            outcome,
        } => {
            state.resolve(Phase::Question, request_id, outcome);
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_context(state: &mut AppState) -> Vec<Effect> {
    // Pending disables the control; a repeat click never reaches the backend.
    if state.phase(Phase::Context).is_pending() {
        return Vec::new();
    }
    if state.context_input().is_empty() {
        state.reject_empty(Phase::Context);
        return Vec::new();
    }

    let request_id = state.begin(Phase::Context);
    vec![Effect::AnalyzeContext {
        request_id,
        input: state.context_input().to_owned(),
    }]
}

fn submit_question(state: &mut AppState) -> Vec<Effect> {
    if state.phase(Phase::Question).is_pending() || !state.question_visible() {
        return Vec::new();
    }
    if state.question_input().is_empty() {
        state.reject_empty(Phase::Question);
        return Vec::new();
    }

    let request_id = state.begin(Phase::Question);
    vec![Effect::AskQuestion {
        request_id,
        question: state.question_input().to_owned(),
    }]
}
