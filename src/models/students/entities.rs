use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 学生姓名
    pub name: String,
    // 邮箱（唯一）
    pub email: String,
    // 所属班组ID
    pub group_id: i64,
}
