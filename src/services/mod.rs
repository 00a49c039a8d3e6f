pub mod catalog;
pub mod reports;

pub use catalog::CatalogService;
pub use reports::ReportService;

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::{error, warn};

use crate::errors::{Result, UniversityError};
use crate::models::{ApiResponse, ErrorCode};

/// 将存储层错误转换为统一的错误响应
pub(crate) fn error_response(err: &UniversityError) -> HttpResponse {
    let code = ErrorCode::from(err);
    match code {
        ErrorCode::InternalServerError | ErrorCode::DatabaseUnavailable => {
            error!("{}", err.format_simple())
        }
        _ => warn!("{}", err.format_simple()),
    }
    HttpResponse::build(code.status()).json(ApiResponse::error_empty(code, err.message()))
}

/// 成功时包装数据，失败时按错误类型选择状态码
pub(crate) fn respond<T: Serialize>(result: Result<T>, message: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(e) => error_response(&e),
    }
}
