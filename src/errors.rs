//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_university_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum UniversityError {
            $($variant(String),)*
        }

        impl UniversityError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(UniversityError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(UniversityError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(UniversityError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl UniversityError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        UniversityError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_university_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Migration("E004", "Migration Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Ambiguous("E007", "Ambiguous Name"),
    EmptyAggregate("E008", "Empty Aggregate"),
    QueryTimeout("E009", "Query Timeout"),
    Serialization("E010", "Serialization Error"),
    Seeding("E011", "Seeding Error"),
}

impl UniversityError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for UniversityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UniversityError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for UniversityError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                UniversityError::DatabaseConnection(err.to_string())
            }
            _ => UniversityError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for UniversityError {
    fn from(err: serde_json::Error) -> Self {
        UniversityError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UniversityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(UniversityError::database_config("test").code(), "E001");
        assert_eq!(UniversityError::validation("test").code(), "E005");
        assert_eq!(UniversityError::not_found("test").code(), "E006");
        assert_eq!(UniversityError::empty_aggregate("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            UniversityError::ambiguous("test").error_type(),
            "Ambiguous Name"
        );
        assert_eq!(
            UniversityError::query_timeout("test").error_type(),
            "Query Timeout"
        );
    }

    #[test]
    fn test_error_message() {
        let err = UniversityError::not_found("Teacher 'Smith' not found");
        assert_eq!(err.message(), "Teacher 'Smith' not found");
    }

    #[test]
    fn test_format_simple() {
        let err = UniversityError::empty_aggregate("No grades recorded");
        let formatted = err.format_simple();
        assert!(formatted.contains("Empty Aggregate"));
        assert!(formatted.contains("No grades recorded"));
    }

    #[test]
    fn test_db_err_mapping() {
        let err: UniversityError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(matches!(err, UniversityError::DatabaseOperation(_)));
    }
}
