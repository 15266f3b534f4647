use crate::config::Config;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
const ALLOW_HEADERS: &str = "Accept, Content-Type, Content-Length, Accept-Encoding, \
X-CSRF-Token, Authorization, Cache-Control, Pragma";

/// Adds cross-origin headers to every response and answers preflight
/// requests with 204 without reaching the handlers.
pub async fn cors(State(config): State<Arc<Config>>, req: Request, next: Next) -> Response {
    let headers = cors_headers(&config, req.headers());

    if req.method() == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, headers).into_response();
    }

    let mut response = next.run(req).await;
    response.headers_mut().extend(headers);
    response
}

fn cors_headers(config: &Config, request_headers: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Some(origin) = request_headers
        .get(header::ORIGIN)
        .filter(|origin| config.is_allowed_origin(origin))
    {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    headers
}
