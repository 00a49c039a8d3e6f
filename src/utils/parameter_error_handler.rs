use actix_web::{HttpRequest, HttpResponse, error, error::QueryPayloadError};

use crate::models::{ApiResponse, ErrorCode};

/// 查询参数解析失败时返回统一格式
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let message = format!("Invalid query parameters: {err}");
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}
