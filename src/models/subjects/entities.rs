use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    // 科目ID
    pub id: i64,
    // 科目名称（唯一）
    pub name: String,
    // 授课教师ID
    pub teacher_id: i64,
}
