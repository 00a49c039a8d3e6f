use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub group_id: i64,
}
