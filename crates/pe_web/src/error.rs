use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

pub const LIST_FAILED: &str = "사설 목록을 가져오지 못했습니다.";
pub const DETAIL_FAILED: &str = "사설을 가져오거나 분석하지 못했습니다.";
pub const SAVED_FAILED: &str = "저장된 분석을 처리하지 못했습니다.";
pub const UNKNOWN_SOURCE: &str = "지원하지 않는 언론사입니다.";
pub const BAD_REQUEST: &str = "요청 형식이 올바르지 않습니다.";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    details: &'a str,
}

/// Uniform `{ error, details }` failure response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    details: String,
}

impl ApiError {
    pub fn internal(message: &'static str, err: pe_core::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            details: err.to_string(),
        }
    }

    pub fn unknown_source(err: pe_core::Error) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: UNKNOWN_SOURCE,
            details: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: BAD_REQUEST,
            details: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: BAD_REQUEST,
            details: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(status = %self.status, details = %self.details, "{}", self.message);
        let body = ErrorBody {
            error: self.message,
            details: &self.details,
        };
        (self.status, Json(body)).into_response()
    }
}
