//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::infrastructure::store::StoreError;

/// 核心错误类型
///
/// 只有两类：请求校验失败（不会触达存储）和存储操作失败。
#[derive(Debug)]
pub enum CoreError {
    Validation(String),
    Store {
        message: &'static str,
        source: StoreError,
    },
}

impl CoreError {
    /// 用接口约定的提示语包装存储错误
    pub fn store(message: &'static str, source: StoreError) -> Self {
        CoreError::Store { message, source }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, kind, message, data) = match self {
            CoreError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
            }
            CoreError::Store { message, source } => {
                error!("Store error: {} ({})", message, source);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_ERROR",
                    message.to_string(),
                    Some(source.to_string()),
                )
            }
        };

        let error_response = ErrorResponse {
            status_code: status.as_u16(),
            error: kind.to_string(),
            message,
            data,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("\"{}\" is invalid", field))
                })
            })
            .collect();
        messages.sort();

        CoreError::Validation(messages.join(", "))
    }
}
