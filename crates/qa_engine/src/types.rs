use std::fmt;

pub type RequestId = u64;

/// Endpoint family spoken by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// `/analyze` + `/ask`; success is a `success` field in the body.
    #[default]
    Video,
    /// `/analyze_topic` + `/ask`; success is a 2xx status.
    Topic,
}

impl Protocol {
    pub(crate) fn analyze_path(self) -> &'static str {
        match self {
            Protocol::Video => "analyze",
            Protocol::Topic => "analyze_topic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalyzeCompleted {
        request_id: RequestId,
        result: Result<String, CallError>,
    },
    AskCompleted {
        request_id: RequestId,
        result: Result<String, CallError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallError {
    pub kind: FailureKind,
    pub message: String,
}

impl CallError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn rejected(status: u16, detail: Option<String>) -> Self {
        let message = detail
            .clone()
            .unwrap_or_else(|| format!("rejected with status {status}"));
        Self::new(FailureKind::Rejected { status, detail }, message)
    }

    /// Server-supplied error text, if the backend rejected the call.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, FailureKind::Rejected { .. })
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CallError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Backend reachable but answered with a non-success indication.
    Rejected { status: u16, detail: Option<String> },
    InvalidUrl,
    Timeout,
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected { status, .. } => write!(f, "rejected (http status {status})"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
