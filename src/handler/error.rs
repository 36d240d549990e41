use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::awesome_api::QuoteError;
use crate::services::fetch::FetchError;

/// 单个请求内的失败映射成 HTTP 状态码，不会拖垮整个进程
#[derive(Debug)]
pub enum AppError {
    UpstreamTimeout,
    UpstreamUnavailable(String),
    UpstreamStatus(u16),
    UpstreamDecode(String),
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({"error": "upstream timeout"})),
            )
                .into_response(),
            AppError::UpstreamUnavailable(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "upstream_unavailable",
                    "message": "无法连接汇率接口，请稍后重试或检查网络",
                    "detail": detail
                })),
            )
                .into_response(),
            AppError::UpstreamStatus(status) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "upstream error", "status": status})),
            )
                .into_response(),
            AppError::UpstreamDecode(detail) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "upstream_decode", "detail": detail})),
            )
                .into_response(),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal server error"})),
            )
                .into_response(),
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Fetch(FetchError::DeadlineExceeded(_)) => AppError::UpstreamTimeout,
            QuoteError::Fetch(FetchError::Transport(e)) => {
                AppError::UpstreamUnavailable(e.to_string())
            }
            QuoteError::BadStatus(status) => AppError::UpstreamStatus(status),
            QuoteError::Decode(e) => AppError::UpstreamDecode(e.to_string()),
        }
    }
}
