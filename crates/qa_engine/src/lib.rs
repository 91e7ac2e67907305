//! Q&A engine: backend client and effect execution.
mod backend;
mod engine;
mod types;
mod wire;

pub use backend::{BackendClient, BackendSettings, ReqwestBackend};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use types::{CallError, EngineEvent, FailureKind, Protocol, RequestId};
