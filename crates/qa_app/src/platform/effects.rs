use std::sync::mpsc;
use std::thread;

use qa_core::{CallFailure, CallOutcome, Effect, Msg};
use qa_engine::{CallError, EngineEvent, EngineEvents, EngineHandle, RequestId};
use qa_logging::{qa_debug, qa_info, qa_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Starts forwarding engine completions to `event_tx` as controller messages.
    pub fn new(
        engine: EngineHandle,
        events: EngineEvents,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_loop(events, event_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AnalyzeContext { request_id, input } => {
                    qa_info!(
                        "AnalyzeContext request_id={} input_len={}",
                        request_id,
                        input.len()
                    );
                    self.engine.analyze(request_id, input);
                }
                Effect::AskQuestion {
                    request_id,
                    question,
                } => {
                    qa_info!(
                        "AskQuestion request_id={} question_len={}",
                        request_id,
                        question.len()
                    );
                    self.engine.ask(request_id, question);
                }
            }
        }
    }

}

fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if event_tx.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
        qa_debug!("Engine event loop finished");
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalyzeCompleted { request_id, result } => Msg::ContextResolved {
            request_id,
            outcome: to_outcome("analyze", request_id, result),
        },
        EngineEvent::AskCompleted { request_id, result } => Msg::QuestionResolved {
            request_id,
            outcome: to_outcome("ask", request_id, result),
        },
    }
}

fn to_outcome(call: &str, request_id: RequestId, result: Result<String, CallError>) -> CallOutcome {
    result.map_err(|err| {
        qa_warn!("{} request_id={} failed: {}", call, request_id, err);
        if err.is_rejection() {
            CallFailure::Rejected(err.detail().map(str::to_owned))
        } else {
            CallFailure::Transport(err.to_string())
        }
    })
}
