//! CLI error types with miette diagnostics.
//!
//! Maps API and config failures into user-facing errors with actionable
//! help text and distinct exit codes.

use miette::Diagnostic;
use thiserror::Error;

use tagview_api::ApiError;
use tagview_config::ConfigError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to backend at {url}")]
    #[diagnostic(
        code(tagview::connection_failed),
        help(
            "Check that the backend is running and accessible.\n\
             URL: {url}\n\
             Try: tagview edges --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out after {timeout_secs}s")]
    #[diagnostic(
        code(tagview::timeout),
        help("The backend did not respond in time. Raise --timeout or check the network.")
    )]
    Timeout { timeout_secs: u64 },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("Backend returned HTTP {status} for {path}")]
    #[diagnostic(code(tagview::backend_error))]
    Backend { status: u16, path: String },

    #[error("Resource not found: {what}")]
    #[diagnostic(
        code(tagview::not_found),
        help("Check the edge id with: tagview edges")
    )]
    NotFound { what: String },

    #[error("Could not decode backend response: {message}")]
    #[diagnostic(
        code(tagview::decode_error),
        help("The backend may be a different version than this CLI expects.")
    )]
    Decode { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error")]
    #[diagnostic(
        code(tagview::config_error),
        help("Check your config file with: tagview config path")
    )]
    Config(#[from] ConfigError),

    #[error("No backend server configured")]
    #[diagnostic(
        code(tagview::no_server),
        help(
            "Pass --server <url>, set TAGVIEW_SERVER, or add a profile to the\n\
             config file (tagview config path)."
        )
    )]
    NoServer,

    // ── Catch-all ────────────────────────────────────────────────────
    #[error("{0}")]
    #[diagnostic(code(tagview::error))]
    Other(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Config(_) | Self::NoServer => exit_code::USAGE,
            Self::Backend { .. } | Self::Decode { .. } | Self::Other(_) => exit_code::GENERAL,
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Timeout { timeout_secs } => Self::Timeout { timeout_secs },
            ApiError::Http { status: 404, path } => Self::NotFound { what: path },
            ApiError::Http { status, path } => Self::Backend { status, path },
            ApiError::Deserialization { message, .. } => Self::Decode { message },
            ApiError::Transport(e) => {
                if e.is_timeout() {
                    Self::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    Self::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        source: Box::new(e),
                    }
                } else if e.status() == Some(reqwest::StatusCode::NOT_FOUND) {
                    Self::NotFound {
                        what: e.url().map(|u| u.path().to_owned()).unwrap_or_default(),
                    }
                } else {
                    Self::Other(e.to_string())
                }
            }
            ApiError::InvalidUrl(e) => Self::Other(format!("Invalid URL: {e}")),
            ApiError::Tls(msg) => Self::ConnectionFailed {
                url: String::new(),
                source: msg.into(),
            },
        }
    }
}
