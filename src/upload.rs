use crate::error::AppError;
use axum::body::Body;
use futures_util::StreamExt;

/// Drains the request body and drops it. Nothing is stored or echoed.
pub async fn upload(body: Body) -> Result<&'static str, AppError> {
    let mut stream = body.into_data_stream();
    let mut received = 0usize;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|source| AppError::ReadBody { source })?;
        received += chunk.len();
    }

    tracing::debug!(bytes = received, "upload drained");
    Ok("Upload successful")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn accepts_empty_body() {
        assert_eq!(upload(Body::empty()).await.unwrap(), "Upload successful");
    }

    #[tokio::test]
    async fn accepts_multi_chunk_body() {
        let chunks = (0..8).map(|i| Ok::<_, io::Error>(vec![i as u8; 64 * 1024]));
        let body = Body::from_stream(futures_util::stream::iter(chunks));

        assert_eq!(upload(body).await.unwrap(), "Upload successful");
    }

    #[tokio::test]
    async fn broken_stream_is_a_read_error() {
        let chunks = vec![
            Ok(vec![1u8; 128]),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
        ];
        let body = Body::from_stream(futures_util::stream::iter(chunks));

        let error = upload(body).await.unwrap_err();
        assert!(matches!(error, AppError::ReadBody { .. }));
        assert_eq!(error.public_message(), "Error reading body");
    }
}
