use serde::Deserialize;

// 创建科目请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub teacher_id: i64,
}
