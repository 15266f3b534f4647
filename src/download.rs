use crate::{config::Config, error::AppError};
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::{io, sync::Arc};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

const CONTENT_DISPOSITION: &str = "attachment; filename=test.bin";

pub async fn stream_download(State(config): State<Arc<Config>>) -> Result<Response, AppError> {
    let path = config.sample_data_path.as_path();
    let file = File::open(path)
        .await
        .map_err(|source| AppError::SampleMissing { source })?;
    let metadata = file
        .metadata()
        .await
        .map_err(|source| AppError::SampleMissing { source })?;
    if !metadata.is_file() {
        return Err(AppError::SampleMissing {
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    let size = metadata.len();

    tracing::info!(path = %path.display(), bytes = size, "streaming sample file");
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static(CONTENT_DISPOSITION),
            ),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(size)),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}
