//! 成绩存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::Result;
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use crate::utils::validate::validate_score;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 记录一次成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        validate_score(req.score)?;

        let created_at = req
            .created_at
            .unwrap_or_else(chrono::Utc::now)
            .timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            score: Set(req.score),
            created_at: Set(created_at),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建成绩失败"))?;

        Ok(result.into_grade())
    }

    /// 列出全部成绩
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩列表失败"))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 成绩总数
    pub async fn count_grades_impl(&self) -> Result<u64> {
        Grades::find()
            .count(&self.db)
            .await
            .map_err(db_error("查询成绩总数失败"))
    }
}
