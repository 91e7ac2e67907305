use std::time::Duration;

use qa_logging::{qa_debug, qa_info};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::wire::{
    AnalyzeTopicRequest, AnalyzeVideoRequest, AnswerReply, AskRequest, ErrorReply, FlaggedReply,
    SummaryReply,
};
use crate::{CallError, FailureKind, Protocol};

const ASK_PATH: &str = "ask";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub protocol: Protocol,
    /// `None` waits for the backend indefinitely.
    pub connect_timeout: Option<Duration>,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>, protocol: Protocol) -> Self {
        Self {
            base_url: base_url.into(),
            protocol,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The two backend calls, normalized to text on success.
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// First phase: submit a video URL or topic. Returns the server's
    /// message (the summary, for topics).
    async fn analyze(&self, input: &str) -> Result<String, CallError>;

    /// Second phase: ask a question against the analyzed context.
    async fn ask(&self, question: &str) -> Result<String, CallError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, CallError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw)
            .map_err(|err| CallError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, Vec<u8>), CallError> {
        let url = self.endpoint(path)?;
        qa_debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        qa_info!("POST /{} -> {} ({} bytes)", path, status, bytes.len());
        Ok((status, bytes.to_vec()))
    }

    /// Video protocol: the body's `success` flag decides, whatever the status.
    async fn post_flagged<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<FlaggedReply, CallError> {
        let (status, bytes) = self.post(path, body).await?;
        let reply: FlaggedReply = decode(&bytes)?;
        if reply.success {
            Ok(reply)
        } else {
            Err(CallError::rejected(status.as_u16(), reply.message))
        }
    }

    /// Topic protocol: a 2xx status decides; errors carry `detail`.
    async fn post_checked<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, CallError> {
        let (status, bytes) = self.post(path, body).await?;
        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorReply>(&bytes)
                .ok()
                .and_then(ErrorReply::detail_text);
            return Err(CallError::rejected(status.as_u16(), detail));
        }
        decode(&bytes)
    }
}

#[async_trait::async_trait]
impl BackendClient for ReqwestBackend {
    async fn analyze(&self, input: &str) -> Result<String, CallError> {
        let path = self.settings.protocol.analyze_path();
        match self.settings.protocol {
            Protocol::Video => {
                let reply = self
                    .post_flagged(path, &AnalyzeVideoRequest { youtube_url: input })
                    .await?;
                Ok(reply.message.unwrap_or_default())
            }
            Protocol::Topic => {
                let reply: SummaryReply = self
                    .post_checked(path, &AnalyzeTopicRequest { topic: input })
                    .await?;
                Ok(reply.message)
            }
        }
    }

    async fn ask(&self, question: &str) -> Result<String, CallError> {
        let body = AskRequest { question };
        match self.settings.protocol {
            Protocol::Video => {
                let reply = self.post_flagged(ASK_PATH, &body).await?;
                Ok(reply.answer.unwrap_or_default())
            }
            Protocol::Topic => {
                let reply: AnswerReply = self.post_checked(ASK_PATH, &body).await?;
                Ok(reply.answer)
            }
        }
    }
}

fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, CallError> {
    serde_json::from_slice(bytes)
        .map_err(|err| CallError::new(FailureKind::MalformedResponse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> CallError {
    if err.is_timeout() {
        return CallError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return CallError::new(FailureKind::InvalidUrl, err.to_string());
    }
    CallError::new(FailureKind::Network, err.to_string())
}
