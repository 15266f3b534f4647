use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Random data generation failed: {0}")]
    Generate(String),

    #[error("Failed to write sample file: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read request body: {source}")]
    ReadBody {
        #[source]
        source: axum::Error,
    },

    #[error("Sample file not found: {source}")]
    SampleMissing {
        #[source]
        source: std::io::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<rand::Error> for AppError {
    fn from(err: rand::Error) -> Self {
        Self::Generate(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Generate(format!("generation task failed: {}", err))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Generate(_) | Self::Write { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::ReadBody { .. } => StatusCode::BAD_REQUEST,
            Self::SampleMissing { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Plain-text body sent to the client. Sources stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            Self::Generate(_) => "Error generating data",
            Self::Write { .. } => "Error saving file",
            Self::ReadBody { .. } => "Error reading body",
            Self::SampleMissing { .. } => "File not found. Run /init first.",
            Self::Internal(message) => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::SampleMissing { .. } => tracing::warn!(error = %self, "download rejected"),
            Self::ReadBody { .. } => tracing::warn!(error = %self, "upload aborted"),
            _ => tracing::error!(error = %self, "request failed"),
        }
        (self.status(), self.public_message().to_string()).into_response()
    }
}
