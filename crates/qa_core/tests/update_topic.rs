use std::sync::Once;

use pretty_assertions::assert_eq;
use qa_core::{
    update, AppState, CallFailure, Effect, Msg, Phase, PhaseState, Variant, EMPTY_QUESTION_ALERT,
    EMPTY_TOPIC_ALERT, UNKNOWN_ERROR,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(qa_logging::initialize_for_tests);
}

fn submit_topic(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ContextInputChanged(input.to_string()));
    update(state, Msg::ContextSubmitted)
}

fn summarized_state() -> AppState {
    let (state, _) = submit_topic(AppState::new(Variant::Topic), "rust ownership");
    let (state, _) = update(
        state,
        Msg::ContextResolved {
            request_id: 1,
            outcome: Ok("Topic summary...".to_string()),
        },
    );
    state
}

#[test]
fn question_form_hidden_until_summary_arrives() {
    init_logging();
    let state = AppState::new(Variant::Topic);
    assert!(!state.view().question_visible);
    assert!(!state.view().question_submit_enabled);

    let (state, effects) = submit_topic(state, "rust ownership");
    assert_eq!(
        effects,
        vec![Effect::AnalyzeContext {
            request_id: 1,
            input: "rust ownership".to_string(),
        }]
    );
    assert!(!state.view().question_visible);
}

#[test]
fn summary_reveals_question_form() {
    init_logging();
    let view = summarized_state().view();

    assert_eq!(view.context_phase, PhaseState::Succeeded);
    assert_eq!(view.summary.as_deref(), Some("Topic summary..."));
    assert!(view.question_visible);
    assert!(view.question_submit_enabled);
    assert_eq!(view.message, None);
}

#[test]
fn rejected_topic_alerts_and_keeps_form_hidden() {
    init_logging();
    let (state, _) = submit_topic(AppState::new(Variant::Topic), "???");
    let (state, _) = update(
        state,
        Msg::ContextResolved {
            request_id: 1,
            outcome: Err(CallFailure::Rejected(Some("bad topic".to_string()))),
        },
    );
    let view = state.view();

    assert!(view.alert.as_deref().unwrap().contains("bad topic"));
    assert!(!view.question_visible);
    assert_eq!(view.context_phase, PhaseState::Failed);
    assert_eq!(view.message, None);

    let (state, _) = update(state, Msg::AlertDismissed);
    assert_eq!(state.view().alert, None);
}

#[test]
fn empty_topic_alerts_synchronously() {
    init_logging();
    let state = AppState::new(Variant::Topic);
    assert!(state.view().context_submit_enabled);

    let (mut state, effects) = update(state, Msg::ContextSubmitted);

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().alert.as_deref(), Some(EMPTY_TOPIC_ALERT));
    assert_eq!(state.view().context_phase, PhaseState::Idle);
}

#[test]
fn empty_question_alerts_synchronously() {
    init_logging();
    let (state, effects) = update(summarized_state(), Msg::QuestionSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.view().alert.as_deref(), Some(EMPTY_QUESTION_ALERT));
    assert_eq!(state.view().question_phase, PhaseState::Idle);
}

#[test]
fn question_ignored_while_form_hidden() {
    init_logging();
    let (state, _) = update(
        AppState::new(Variant::Topic),
        Msg::QuestionInputChanged("why?".to_string()),
    );
    let (state, effects) = update(state, Msg::QuestionSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.view().question_phase, PhaseState::Idle);
    assert_eq!(state.view().alert, None);
}

#[test]
fn enter_submits_both_forms() {
    init_logging();
    let (state, _) = update(
        AppState::new(Variant::Topic),
        Msg::ContextInputChanged("borrowing".to_string()),
    );
    let (state, effects) = update(state, Msg::EnterPressed(Phase::Context));
    assert_eq!(effects.len(), 1);

    let (state, _) = update(
        state,
        Msg::ContextResolved {
            request_id: 1,
            outcome: Ok("summary".to_string()),
        },
    );
    let (state, _) = update(state, Msg::QuestionInputChanged("and lifetimes?".to_string()));
    let (_, effects) = update(state, Msg::EnterPressed(Phase::Question));
    assert_eq!(
        effects,
        vec![Effect::AskQuestion {
            request_id: 2,
            question: "and lifetimes?".to_string(),
        }]
    );
}

#[test]
fn answer_is_stored_and_failure_alerts() {
    init_logging();
    let (state, _) = update(
        summarized_state(),
        Msg::QuestionInputChanged("what is a borrow?".to_string()),
    );
    let (state, _) = update(state, Msg::QuestionSubmitted);
    let (state, _) = update(
        state,
        Msg::QuestionResolved {
            request_id: 2,
            outcome: Ok("A reference.".to_string()),
        },
    );
    assert_eq!(state.view().answer.as_deref(), Some("A reference."));

    let (state, _) = update(state, Msg::QuestionSubmitted);
    assert_eq!(state.view().answer, None);
    let (state, _) = update(
        state,
        Msg::QuestionResolved {
            request_id: 3,
            outcome: Err(CallFailure::Transport("connection refused".to_string())),
        },
    );
    let view = state.view();
    assert_eq!(view.answer, None);
    assert!(view.alert.as_deref().unwrap().contains("connection refused"));
    // The summary and the form survive a failed question.
    assert!(view.question_visible);
}

#[test]
fn new_topic_hides_form_until_resolved() {
    init_logging();
    let (state, _) = submit_topic(summarized_state(), "lifetimes");
    let view = state.view();

    assert_eq!(view.summary, None);
    assert!(!view.question_visible);
    assert_eq!(view.context_phase, PhaseState::Pending { request_id: 2 });
}

#[test]
fn rejection_without_detail_alerts_unknown_error() {
    init_logging();
    let (state, _) = submit_topic(AppState::new(Variant::Topic), "ownership");
    let (state, _) = update(
        state,
        Msg::ContextResolved {
            request_id: 1,
            outcome: Err(CallFailure::Rejected(None)),
        },
    );

    assert_eq!(state.view().alert.as_deref(), Some(UNKNOWN_ERROR));
    assert!(!state.view().question_visible);
}
