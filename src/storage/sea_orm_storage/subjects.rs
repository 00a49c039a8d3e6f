//! 科目存储操作

use super::resolve::find_unique_by_name;
use super::{SeaOrmStorage, db_error};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::Result;
use crate::models::{
    EntityKind,
    subjects::{entities::Subject, requests::CreateSubjectRequest},
};
use crate::utils::validate::normalize_name;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建科目，授课教师由外键约束保证存在
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let name = normalize_name(EntityKind::Subject, &req.name)?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            teacher_id: Set(req.teacher_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建科目失败"))?;

        Ok(result.into_subject())
    }

    /// 通过名称获取科目
    pub async fn get_subject_by_name_impl(&self, name: &str) -> Result<Option<Subject>> {
        let model =
            find_unique_by_name::<Subjects, _>(&self.db, EntityKind::Subject, Column::Name, name)
                .await?;

        Ok(model.map(|m| m.into_subject()))
    }

    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询科目列表失败"))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }
}
