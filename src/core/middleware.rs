//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件
///
/// 给每个响应加上 `x-request-id`。5xx 记 error，4xx 记 warn，其余记 info。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if status.is_server_error() {
        error!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else if status.is_client_error() {
        warn!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "request rejected");
    } else {
        info!(%request_id, %method, %path, status = status.as_u16(), latency_ms, "request handled");
    }

    response
}
