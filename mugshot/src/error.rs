// top-level error for the public API

#[derive(Debug, thiserror::Error)]
pub enum MugshotError {
    /// Connection, DNS, TLS, timeout or body-read failure from reqwest.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. Only the status line is kept.
    #[error("HTTP error! Status: {status}")]
    Status { code: u16, status: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to deserialize api response: {0}")]
    JsonDeserialize(serde_json::Error),

    /// Metadata could not be encoded as JSON.
    #[error("failed to serialize api request: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("invalid {name} header: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    /// The caller-supplied image content type does not parse as a MIME type.
    #[error("invalid image mime type '{mime}': {reason}")]
    InvalidMime { mime: String, reason: String },

    #[error("no api key given and {env_var} is not set")]
    MissingApiKey { env_var: String },

    #[error("logger setup failed: {0}")]
    Logging(String),

    #[error("failed to read image '{path}'")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type MugshotResult<T> = std::result::Result<T, MugshotError>;

impl MugshotError {
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            code: status.as_u16(),
            status: status_line(status),
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::JsonDeserialize(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status code for [`MugshotError::Status`], `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Renders a status the way an HTTP status line does, e.g. `404 Not Found`.
fn status_line(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

pub(crate) fn map_deserialization_error(e: serde_json::Error, bytes: &[u8]) -> MugshotError {
    tracing::error!(
        "failed deserialization of: {}",
        String::from_utf8_lossy(bytes)
    );
    MugshotError::JsonDeserialize(e)
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> MugshotError {
    tracing::error!("failed serialization: {}", e);
    MugshotError::JsonSerialize(e)
}
