use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    // 成绩ID
    pub id: i64,
    // 学生ID
    pub student_id: i64,
    // 科目ID
    pub subject_id: i64,
    // 分数 (0-100)
    pub score: f64,
    // 记录时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
