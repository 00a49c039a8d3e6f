use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    // 教师ID
    pub id: i64,
    // 教师姓名
    pub name: String,
    // 邮箱（唯一）
    pub email: String,
}
