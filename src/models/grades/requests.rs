use serde::Deserialize;

// 创建成绩请求，未指定时间时使用当前时间
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub score: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
