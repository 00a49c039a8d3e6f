//! 学生存储操作

use super::resolve::find_unique_by_name;
use super::{SeaOrmStorage, db_error};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::Result;
use crate::models::{
    EntityKind,
    students::{entities::Student, requests::CreateStudentRequest},
};
use crate::utils::validate::{normalize_name, validate_email};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let name = normalize_name(EntityKind::Student, &req.name)?;
        validate_email(&req.email)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            email: Set(req.email),
            group_id: Set(req.group_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过姓名获取学生，重名时报错而不是任选一条
    pub async fn get_student_by_name_impl(&self, name: &str) -> Result<Option<Student>> {
        let model =
            find_unique_by_name::<Students, _>(&self.db, EntityKind::Student, Column::Name, name)
                .await?;

        Ok(model.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询学生列表失败"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}
