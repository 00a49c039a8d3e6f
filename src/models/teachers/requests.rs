use serde::Deserialize;

// 创建教师请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
}
