use crate::{config::Config, error::AppError};
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use rand::{rngs::OsRng, RngCore};
use serde::Serialize;
use std::{io, path::Path, sync::Arc};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

/// Creates the sample file if it is absent. An existing file is never
/// overwritten.
///
/// Two concurrent first calls can both pass the existence check and both
/// write the file. The second write wins; both produce a full-size file.
pub async fn init_sample_data(State(config): State<Arc<Config>>) -> Result<Response, AppError> {
    let path = config.sample_data_path.as_path();

    if tokio::fs::metadata(path).await.is_ok() {
        tracing::debug!(path = %path.display(), "sample file already present");
        return Ok(Json(Message {
            message: "File already exists",
        })
        .into_response());
    }

    let size = config.sample_size;
    let data = tokio::task::spawn_blocking(move || generate(size)).await??;
    write_sample(path, &data).await?;

    tracing::info!(path = %path.display(), bytes = data.len(), "sample file created");
    Ok("Initialization completed".into_response())
}

fn generate(size: usize) -> Result<Vec<u8>, rand::Error> {
    let mut data = vec![0u8; size];
    OsRng.try_fill_bytes(&mut data)?;
    Ok(data)
}

async fn write_sample(path: &Path, data: &[u8]) -> Result<(), AppError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options
        .open(path)
        .await
        .map_err(|source| AppError::Write { source })?;
    let written = match file.write_all(data).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    drop(file);

    discard_on_error(path, written).await
}

/// A partial sample would be reported as existing forever, so it is removed.
async fn discard_on_error(path: &Path, written: io::Result<()>) -> Result<(), AppError> {
    let Err(source) = written else {
        return Ok(());
    };

    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "failed to remove partial sample file"
        );
    }
    Err(AppError::Write { source })
}
