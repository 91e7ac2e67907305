use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use qa_engine::{
    BackendClient, BackendSettings, CallError, EngineEvent, EngineHandle, Protocol,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

/// Echoes inputs back; analyze waits so an ask issued later overtakes it.
struct EchoBackend;

#[async_trait::async_trait]
impl BackendClient for EchoBackend {
    async fn analyze(&self, input: &str) -> Result<String, CallError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(format!("analyzed {input}"))
    }

    async fn ask(&self, question: &str) -> Result<String, CallError> {
        Ok(format!("answer to {question}"))
    }
}

#[test]
fn calls_complete_independently() {
    let (engine, events) = EngineHandle::with_backend(Arc::new(EchoBackend)).expect("engine");
    engine.analyze(1, "topic");
    engine.ask(2, "why?");

    let first = events.recv_timeout(WAIT).expect("first event");
    let second = events.recv_timeout(WAIT).expect("second event");

    assert_eq!(
        first,
        EngineEvent::AskCompleted {
            request_id: 2,
            result: Ok("answer to why?".to_string()),
        }
    );
    assert_eq!(
        second,
        EngineEvent::AnalyzeCompleted {
            request_id: 1,
            result: Ok("analyzed topic".to_string()),
        }
    );
    assert!(events.recv_timeout(Duration::from_millis(50)).is_none());
}

#[test]
fn engine_drives_real_backend() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": false, "message": "private video" })),
            )
            .mount(&server)
            .await;
        server
    });

    let (engine, events) =
        EngineHandle::new(BackendSettings::new(server.uri(), Protocol::Video)).expect("engine");
    engine.analyze(7, "https://youtu.be/private");

    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::AnalyzeCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result.unwrap_err().detail(), Some("private video"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
