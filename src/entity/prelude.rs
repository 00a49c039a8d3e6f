//! 预导入模块，方便使用

pub use super::grades::Entity as Grades;
pub use super::groups::Entity as Groups;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::teachers::Entity as Teachers;
