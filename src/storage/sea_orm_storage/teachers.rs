//! 教师存储操作

use super::resolve::find_unique_by_name;
use super::{SeaOrmStorage, db_error};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::Result;
use crate::models::{
    EntityKind,
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use crate::utils::validate::{normalize_name, validate_email};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let name = normalize_name(EntityKind::Teacher, &req.name)?;
        validate_email(&req.email)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            email: Set(req.email),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建教师失败"))?;

        Ok(result.into_teacher())
    }

    /// 通过姓名获取教师
    pub async fn get_teacher_by_name_impl(&self, name: &str) -> Result<Option<Teacher>> {
        let model =
            find_unique_by_name::<Teachers, _>(&self.db, EntityKind::Teacher, Column::Name, name)
                .await?;

        Ok(model.map(|m| m.into_teacher()))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询教师列表失败"))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }
}
