//! 批量写入与清空

use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{Grades, Groups, Students, Subjects, Teachers};
use crate::entity::{grades, groups, students, subjects, teachers};
use crate::errors::Result;
use crate::seed::{SeedDataset, SeedSummary};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};
use tracing::debug;

// 单条 INSERT 的行数上限，避免超出 SQLite 绑定参数限制
const GRADE_BATCH_SIZE: usize = 500;

impl SeaOrmStorage {
    /// 按外键依赖的反向顺序删除全部数据
    async fn purge_on<C: ConnectionTrait>(conn: &C) -> Result<()> {
        let deleted = Grades::delete_many()
            .exec(conn)
            .await
            .map_err(db_error("清空成绩失败"))?;
        debug!("Deleted {} records from grades", deleted.rows_affected);

        let deleted = Students::delete_many()
            .exec(conn)
            .await
            .map_err(db_error("清空学生失败"))?;
        debug!("Deleted {} records from students", deleted.rows_affected);

        let deleted = Subjects::delete_many()
            .exec(conn)
            .await
            .map_err(db_error("清空科目失败"))?;
        debug!("Deleted {} records from subjects", deleted.rows_affected);

        let deleted = Teachers::delete_many()
            .exec(conn)
            .await
            .map_err(db_error("清空教师失败"))?;
        debug!("Deleted {} records from teachers", deleted.rows_affected);

        let deleted = Groups::delete_many()
            .exec(conn)
            .await
            .map_err(db_error("清空班组失败"))?;
        debug!("Deleted {} records from groups", deleted.rows_affected);

        Ok(())
    }

    /// 清空全部数据
    pub async fn purge_all_impl(&self) -> Result<()> {
        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;
        Self::purge_on(&txn).await?;
        txn.commit().await.map_err(db_error("提交事务失败"))?;
        Ok(())
    }

    /// 在一个事务中清空并写入整套数据，任一步失败则整体回滚
    pub async fn replace_all_impl(&self, dataset: SeedDataset) -> Result<SeedSummary> {
        dataset.validate()?;

        let txn = self.db.begin().await.map_err(db_error("开启事务失败"))?;
        Self::purge_on(&txn).await?;

        let mut group_ids = Vec::with_capacity(dataset.groups.len());
        for name in &dataset.groups {
            let model = groups::ActiveModel {
                name: Set(name.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("写入班组失败"))?;
            group_ids.push(model.id);
        }

        let mut teacher_ids = Vec::with_capacity(dataset.teachers.len());
        for teacher in &dataset.teachers {
            let model = teachers::ActiveModel {
                name: Set(teacher.name.clone()),
                email: Set(teacher.email.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("写入教师失败"))?;
            teacher_ids.push(model.id);
        }

        let mut subject_ids = Vec::with_capacity(dataset.subjects.len());
        for subject in &dataset.subjects {
            let model = subjects::ActiveModel {
                name: Set(subject.name.clone()),
                teacher_id: Set(teacher_ids[subject.teacher]),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("写入科目失败"))?;
            subject_ids.push(model.id);
        }

        let mut student_ids = Vec::with_capacity(dataset.students.len());
        for student in &dataset.students {
            let model = students::ActiveModel {
                name: Set(student.name.clone()),
                email: Set(student.email.clone()),
                group_id: Set(group_ids[student.group]),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("写入学生失败"))?;
            student_ids.push(model.id);
        }

        for batch in dataset.grades.chunks(GRADE_BATCH_SIZE) {
            let models = batch.iter().map(|grade| grades::ActiveModel {
                student_id: Set(student_ids[grade.student]),
                subject_id: Set(subject_ids[grade.subject]),
                score: Set(grade.score),
                created_at: Set(grade.created_at.timestamp()),
                ..Default::default()
            });

            Grades::insert_many(models)
                .exec(&txn)
                .await
                .map_err(db_error("写入成绩失败"))?;
        }

        txn.commit().await.map_err(db_error("提交事务失败"))?;

        Ok(SeedSummary {
            groups: group_ids.len(),
            teachers: teacher_ids.len(),
            subjects: subject_ids.len(),
            students: student_ids.len(),
            grades: dataset.grades.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::config::SeedConfig;
    use crate::seed::Seeder;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_populate_writes_everything() {
        let storage = memory_storage().await;
        let mut seeder = Seeder::with_seed(SeedConfig::default(), 11);
        let summary = seeder.populate(&storage).await.unwrap();

        assert_eq!(storage.list_groups().await.unwrap().len(), summary.groups);
        assert_eq!(storage.list_teachers().await.unwrap().len(), summary.teachers);
        assert_eq!(storage.list_subjects().await.unwrap().len(), summary.subjects);
        assert_eq!(storage.list_students().await.unwrap().len(), summary.students);
        assert_eq!(storage.count_grades().await.unwrap() as usize, summary.grades);
    }

    #[tokio::test]
    async fn test_populate_replaces_previous_data() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 1)
            .populate(&storage)
            .await
            .unwrap();
        let summary = Seeder::with_seed(SeedConfig::default(), 2)
            .populate(&storage)
            .await
            .unwrap();

        assert_eq!(storage.list_students().await.unwrap().len(), summary.students);
        assert_eq!(storage.count_grades().await.unwrap() as usize, summary.grades);
    }

    #[tokio::test]
    async fn test_purge_all() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 3)
            .populate(&storage)
            .await
            .unwrap();
        storage.purge_all().await.unwrap();

        assert!(storage.list_groups().await.unwrap().is_empty());
        assert_eq!(storage.count_grades().await.unwrap(), 0);
    }
}
