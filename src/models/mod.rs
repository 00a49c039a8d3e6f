//! 业务数据模型
//!
//! 与 entity 模块中的 SeaORM 实体分离，用于存储层返回值和 API 序列化。

pub mod common;
pub mod grades;
pub mod groups;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use common::{ApiResponse, EntityKind, ErrorCode};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
