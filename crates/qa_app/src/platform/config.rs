//! Startup configuration: CLI flags, environment, optional RON settings file.
//!
//! Precedence is flag > environment > settings file > built-in default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use qa_core::Variant;
use qa_engine::{BackendSettings, Protocol};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

/// Backend used by the video variant when nothing else is configured.
pub const DEFAULT_VIDEO_BACKEND_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum VariantArg {
    Video,
    Topic,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Video => Variant::Video,
            VariantArg::Topic => Variant::Topic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "qa_app")]
#[command(about = "Analyze a video or topic on a Q&A backend, then ask questions about it")]
pub struct Cli {
    /// Which backend flavor to talk to
    #[arg(long, value_enum, env = "QA_VARIANT")]
    pub variant: Option<VariantArg>,

    /// Backend base URL (required for the topic variant)
    #[arg(long, env = "QA_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// RON settings file with `variant`, `backend_url`, `request_timeout_secs`,
    /// `connect_timeout_secs`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Give up on a backend call after this many seconds (default: wait forever)
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Give up connecting to the backend after this many seconds (default: no limit)
    #[arg(long)]
    pub connect_timeout_secs: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogDestination,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("the topic variant needs a backend URL (--backend-url or QA_BACKEND_URL)")]
    MissingBackendUrl,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    variant: Option<VariantArg>,
    backend_url: Option<String>,
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub variant: Variant,
    pub backend_url: String,
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match cli.config.as_deref() {
            Some(path) => load_settings(path)?,
            None => SettingsFile::default(),
        };

        let variant: Variant = cli
            .variant
            .or(file.variant)
            .map(Variant::from)
            .unwrap_or_default();

        // Not validated; a bad URL surfaces as a transport failure on the first call.
        let backend_url = match cli.backend_url.or(file.backend_url) {
            Some(url) => url,
            None if variant == Variant::Video => DEFAULT_VIDEO_BACKEND_URL.to_string(),
            None => return Err(ConfigError::MissingBackendUrl),
        };

        let request_timeout = cli
            .request_timeout_secs
            .or(file.request_timeout_secs)
            .map(Duration::from_secs);
        let connect_timeout = cli
            .connect_timeout_secs
            .or(file.connect_timeout_secs)
            .map(Duration::from_secs);

        Ok(Self {
            variant,
            backend_url,
            request_timeout,
            connect_timeout,
            log_destination: cli.log,
        })
    }

    pub fn backend_settings(&self) -> BackendSettings {
        let protocol = match self.variant {
            Variant::Video => Protocol::Video,
            Variant::Topic => Protocol::Topic,
        };
        BackendSettings {
            request_timeout: self.request_timeout,
            connect_timeout: self.connect_timeout,
            ..BackendSettings::new(self.backend_url.clone(), protocol)
        }
    }
}

fn load_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
