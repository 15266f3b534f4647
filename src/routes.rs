use crate::{
    config::Config, cors::cors, download::stream_download, init::init_sample_data,
    upload::upload,
};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub const API_PREFIX: &str = "/api/speedtest";

pub fn create_router(config: Arc<Config>) -> Router {
    let speedtest = Router::new()
        .route("/init", get(init_sample_data))
        .route(
            "/upload",
            post(upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/stream-download", get(stream_download));

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn_with_state(config.clone(), cors));

    Router::new()
        .nest(API_PREFIX, speedtest)
        .fallback(not_found)
        .layer(middleware_stack)
        .with_state(config)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
