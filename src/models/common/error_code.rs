use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::UniversityError;

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    NotFound = 1004,
    AmbiguousName = 1009,
    EmptyAggregate = 1022,
    InternalServerError = 5000,
    DatabaseUnavailable = 5003,
    QueryTimeout = 5004,
}

impl ErrorCode {
    /// 对应的 HTTP 状态码
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AmbiguousName => StatusCode::CONFLICT,
            ErrorCode::EmptyAggregate => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::QueryTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<&UniversityError> for ErrorCode {
    fn from(err: &UniversityError) -> Self {
        match err {
            UniversityError::Validation(_) => ErrorCode::BadRequest,
            UniversityError::NotFound(_) => ErrorCode::NotFound,
            UniversityError::Ambiguous(_) => ErrorCode::AmbiguousName,
            UniversityError::EmptyAggregate(_) => ErrorCode::EmptyAggregate,
            UniversityError::QueryTimeout(_) => ErrorCode::QueryTimeout,
            UniversityError::DatabaseConnection(_) => ErrorCode::DatabaseUnavailable,
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let code = ErrorCode::from(&UniversityError::not_found("x"));
        assert_eq!(code, ErrorCode::NotFound);
        assert_eq!(code.status(), StatusCode::NOT_FOUND);

        let code = ErrorCode::from(&UniversityError::empty_aggregate("x"));
        assert_eq!(code.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let code = ErrorCode::from(&UniversityError::database_connection("x"));
        assert_eq!(code.status(), StatusCode::SERVICE_UNAVAILABLE);

        let code = ErrorCode::from(&UniversityError::migration("x"));
        assert_eq!(code, ErrorCode::InternalServerError);
    }
}
