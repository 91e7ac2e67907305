use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use qa_logging::{qa_debug, qa_warn};
use thiserror::Error;

use crate::backend::{BackendClient, BackendSettings, ReqwestBackend};
use crate::{EngineEvent, RequestId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Analyze { request_id: RequestId, input: String },
    Ask { request_id: RequestId, question: String },
}

/// Runs backend calls on a dedicated runtime thread. Calls are independent:
/// an analyze and an ask may be in flight at once, completing in any order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Completions of the calls issued through the paired [`EngineHandle`].
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> Result<(Self, EngineEvents), EngineError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(
        backend: Arc<dyn BackendClient>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
            qa_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn analyze(&self, request_id: RequestId, input: impl Into<String>) {
        self.send(EngineCommand::Analyze {
            request_id,
            input: input.into(),
        });
    }

    pub fn ask(&self, request_id: RequestId, question: impl Into<String>) {
        self.send(EngineCommand::Ask {
            request_id,
            question: question.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            qa_warn!("Engine thread is gone; command dropped");
        }
    }
}

impl EngineEvents {
    /// Blocks until the next completion, or `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    backend: &dyn BackendClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Analyze { request_id, input } => EngineEvent::AnalyzeCompleted {
            request_id,
            result: backend.analyze(&input).await,
        },
        EngineCommand::Ask {
            request_id,
            question,
        } => EngineEvent::AskCompleted {
            request_id,
            result: backend.ask(&question).await,
        },
    };
    let _ = event_tx.send(event);
}
