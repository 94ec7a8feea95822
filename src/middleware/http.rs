//! Transport-level middleware applied to every route.
//!
//! - `x-request-id`: generated (UUID v4) when the caller omits it, echoed on the response
//! - access tracing through `TraceLayer`
//! - per-request timeout, answered with 408
//! - request body cap of 1 MiB, answered with 413 in the usual JSON error shape

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::http::header::HeaderName;
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn apply(router: Router, timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(map_response(limit_rejection_as_json))
        // TimeoutLayer yields BoxError; the router needs an Infallible service.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                tracing::warn!("request timed out");
                AppError::Timeout
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                AppError::Internal
            }
        }))
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

    router.layer(layers)
}

/// `RequestBodyLimitLayer` rejects with a plain-text 413; no handler returns 413 itself.
async fn limit_rejection_as_json(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("request body over {BODY_LIMIT_BYTES} bytes rejected");
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
