/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError → AppError の変換 (malformed の扱いは MalformedStatus に従う)
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::MalformedStatus;
use crate::services::auth::{API_KEY_SCHEME, ApiKeyError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("{code}: {message}")]
    Unauthorized { code: &'static str, message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }

    /// API キー取り出し失敗をレスポンス用のエラーに変換する
    ///
    /// - ヘッダ無しは常に 401
    /// - 形式不正は `policy` に従い 401 か 400
    pub fn from_api_key(err: ApiKeyError, policy: MalformedStatus) -> Self {
        match (err, policy) {
            (ApiKeyError::NoAuthHeader, _) => {
                AppError::unauthorized("NO_AUTH_HEADER", err.to_string())
            }
            (ApiKeyError::MalformedAuthHeader, MalformedStatus::Unauthorized) => {
                AppError::unauthorized("MALFORMED_AUTH_HEADER", err.to_string())
            }
            (ApiKeyError::MalformedAuthHeader, MalformedStatus::BadRequest) => {
                AppError::bad_request("MALFORMED_AUTH_HEADER", err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        res
    }
}
