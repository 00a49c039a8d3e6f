//! 报表查询
//!
//! 每个报表在独立的只读事务中执行：先在事务内把名称解析为ID，
//! 再执行一条聚合语句，整个过程受查询超时约束。

use super::resolve::resolve_id_on;
use super::{SeaOrmStorage, db_error};
use crate::entity::{grades, groups, students, subjects};
use crate::errors::{Result, UniversityError};
use crate::models::EntityKind;
use crate::models::reports::responses::{
    GradeRecord, GroupAverage, StudentAverage, StudentItem, SubjectItem,
};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbBackend, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};
use std::future::Future;
use tracing::{debug, info, warn};

/// AVG(grades.score)
fn avg_score() -> Expr {
    Func::avg(Expr::col((grades::Entity, grades::Column::Score))).into()
}

// 成绩记录原始行，时间戳以秒存储
#[derive(Debug, FromQueryResult)]
struct GradeRecordRow {
    student_id: i64,
    student_name: String,
    score: f64,
    created_at: i64,
}

impl From<GradeRecordRow> for GradeRecord {
    fn from(row: GradeRecordRow) -> Self {
        GradeRecord {
            student_id: row.student_id,
            student_name: row.student_name,
            score: row.score,
            graded_at: chrono::DateTime::<chrono::Utc>::from_timestamp(row.created_at, 0)
                .unwrap_or_default(),
        }
    }
}

impl SeaOrmStorage {
    /// 开启只读事务
    ///
    /// SQLite 不支持事务级访问模式，仅在其他后端上声明只读；
    /// PostgreSQL 额外设置语句级超时。
    async fn begin_read_only(&self) -> Result<DatabaseTransaction> {
        let backend = self.db.get_database_backend();
        let access_mode = match backend {
            DbBackend::Sqlite => None,
            _ => Some(AccessMode::ReadOnly),
        };

        let txn = self
            .db
            .begin_with_config(None, access_mode)
            .await
            .map_err(db_error("开启只读事务失败"))?;

        if matches!(backend, DbBackend::Postgres) {
            txn.execute_unprepared(&format!(
                "SET LOCAL statement_timeout = {}",
                self.query_timeout.as_millis()
            ))
            .await
            .map_err(db_error("设置语句超时失败"))?;
        }

        Ok(txn)
    }

    /// 在查询超时内执行报表
    async fn with_timeout<T, F>(&self, report: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        info!("执行报表 {}", report);

        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "报表 {} 超过查询超时 {}ms",
                    report,
                    self.query_timeout.as_millis()
                );
                Err(UniversityError::query_timeout(format!(
                    "{report} exceeded {}ms",
                    self.query_timeout.as_millis()
                )))
            }
        }
    }

    /// 1. 平均分最高的 5 名学生
    pub async fn top_students_impl(&self) -> Result<Vec<StudentAverage>> {
        self.with_timeout("select-1", async {
            let txn = self.begin_read_only().await?;

            let rows = students::Entity::find()
                .select_only()
                .column_as(students::Column::Id, "student_id")
                .column_as(students::Column::Name, "student_name")
                .column_as(students::Column::Email, "student_email")
                .column_as(avg_score(), "avg_score")
                .join(JoinType::InnerJoin, students::Relation::Grades.def())
                .group_by(students::Column::Id)
                .group_by(students::Column::Name)
                .group_by(students::Column::Email)
                .order_by_desc(avg_score())
                .order_by_asc(students::Column::Id)
                .limit(5)
                .into_model::<StudentAverage>()
                .all(&txn)
                .await
                .map_err(db_error("查询学生平均分排名失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            if rows.is_empty() {
                warn!("没有任何成绩记录，排名为空");
            }
            debug!("select-1 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }

    /// 2. 某科目平均分最高的学生
    pub async fn best_student_in_subject_impl(&self, subject: &str) -> Result<StudentAverage> {
        self.with_timeout("select-2", async {
            let txn = self.begin_read_only().await?;
            let subject_id = resolve_id_on(&txn, EntityKind::Subject, subject).await?;

            let row = students::Entity::find()
                .select_only()
                .column_as(students::Column::Id, "student_id")
                .column_as(students::Column::Name, "student_name")
                .column_as(students::Column::Email, "student_email")
                .column_as(avg_score(), "avg_score")
                .join(JoinType::InnerJoin, students::Relation::Grades.def())
                .filter(grades::Column::SubjectId.eq(subject_id))
                .group_by(students::Column::Id)
                .group_by(students::Column::Name)
                .group_by(students::Column::Email)
                .order_by_desc(avg_score())
                .order_by_asc(students::Column::Id)
                .limit(1)
                .into_model::<StudentAverage>()
                .one(&txn)
                .await
                .map_err(db_error("查询科目最佳学生失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            row.ok_or_else(|| {
                warn!("科目 {} 没有成绩记录", subject.trim());
                UniversityError::empty_aggregate(format!(
                    "Subject '{}' has no grades",
                    subject.trim()
                ))
            })
        })
        .await
    }

    /// 3. 某科目各班组平均分
    pub async fn group_averages_in_subject_impl(&self, subject: &str) -> Result<Vec<GroupAverage>> {
        self.with_timeout("select-3", async {
            let txn = self.begin_read_only().await?;
            let subject_id = resolve_id_on(&txn, EntityKind::Subject, subject).await?;

            let rows = groups::Entity::find()
                .select_only()
                .column_as(groups::Column::Id, "group_id")
                .column_as(groups::Column::Name, "group_name")
                .column_as(avg_score(), "avg_score")
                .join(JoinType::InnerJoin, groups::Relation::Students.def())
                .join(JoinType::InnerJoin, students::Relation::Grades.def())
                .filter(grades::Column::SubjectId.eq(subject_id))
                .group_by(groups::Column::Id)
                .group_by(groups::Column::Name)
                .order_by_desc(avg_score())
                .order_by_asc(groups::Column::Id)
                .into_model::<GroupAverage>()
                .all(&txn)
                .await
                .map_err(db_error("查询班组平均分失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-3 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }

    /// 4. 全部成绩的平均分
    pub async fn overall_average_impl(&self) -> Result<f64> {
        self.with_timeout("select-4", async {
            let txn = self.begin_read_only().await?;

            let avg = grades::Entity::find()
                .select_only()
                .column_as(avg_score(), "avg_score")
                .into_tuple::<Option<f64>>()
                .one(&txn)
                .await
                .map_err(db_error("查询总平均分失败"))?
                .flatten();

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            avg.ok_or_else(|| {
                warn!("没有任何成绩记录，无法计算总平均分");
                UniversityError::empty_aggregate("No grades recorded")
            })
        })
        .await
    }

    /// 5. 教师所授科目
    pub async fn teacher_subjects_impl(&self, teacher: &str) -> Result<Vec<SubjectItem>> {
        self.with_timeout("select-5", async {
            let txn = self.begin_read_only().await?;
            let teacher_id = resolve_id_on(&txn, EntityKind::Teacher, teacher).await?;

            let rows = subjects::Entity::find()
                .select_only()
                .column_as(subjects::Column::Id, "subject_id")
                .column_as(subjects::Column::Name, "subject_name")
                .filter(subjects::Column::TeacherId.eq(teacher_id))
                .order_by_asc(subjects::Column::Name)
                .order_by_asc(subjects::Column::Id)
                .into_model::<SubjectItem>()
                .all(&txn)
                .await
                .map_err(db_error("查询教师科目失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-5 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }

    /// 6. 班组学生名单
    pub async fn group_students_impl(&self, group: &str) -> Result<Vec<StudentItem>> {
        self.with_timeout("select-6", async {
            let txn = self.begin_read_only().await?;
            let group_id = resolve_id_on(&txn, EntityKind::Group, group).await?;

            let rows = students::Entity::find()
                .select_only()
                .column_as(students::Column::Id, "student_id")
                .column_as(students::Column::Name, "student_name")
                .column_as(students::Column::Email, "student_email")
                .filter(students::Column::GroupId.eq(group_id))
                .order_by_asc(students::Column::Name)
                .order_by_asc(students::Column::Id)
                .into_model::<StudentItem>()
                .all(&txn)
                .await
                .map_err(db_error("查询班组学生失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-6 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }

    /// 7. 某班组在某科目的全部成绩
    pub async fn group_subject_grades_impl(
        &self,
        group: &str,
        subject: &str,
    ) -> Result<Vec<GradeRecord>> {
        self.with_timeout("select-7", async {
            let txn = self.begin_read_only().await?;
            let group_id = resolve_id_on(&txn, EntityKind::Group, group).await?;
            let subject_id = resolve_id_on(&txn, EntityKind::Subject, subject).await?;

            let rows = grades::Entity::find()
                .select_only()
                .column_as(grades::Column::StudentId, "student_id")
                .column_as(students::Column::Name, "student_name")
                .column_as(grades::Column::Score, "score")
                .column_as(grades::Column::CreatedAt, "created_at")
                .join(JoinType::InnerJoin, grades::Relation::Student.def())
                .filter(students::Column::GroupId.eq(group_id))
                .filter(grades::Column::SubjectId.eq(subject_id))
                .order_by_asc(grades::Column::StudentId)
                .order_by_asc(grades::Column::CreatedAt)
                .order_by_asc(grades::Column::Id)
                .into_model::<GradeRecordRow>()
                .all(&txn)
                .await
                .map_err(db_error("查询班组科目成绩失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-7 返回 {} 行", rows.len());
            Ok(rows.into_iter().map(GradeRecord::from).collect())
        })
        .await
    }

    /// 8. 教师所授科目的平均分
    pub async fn teacher_average_impl(&self, teacher: &str) -> Result<f64> {
        self.with_timeout("select-8", async {
            let txn = self.begin_read_only().await?;
            let teacher_id = resolve_id_on(&txn, EntityKind::Teacher, teacher).await?;

            let avg = grades::Entity::find()
                .select_only()
                .column_as(avg_score(), "avg_score")
                .join(JoinType::InnerJoin, grades::Relation::Subject.def())
                .filter(subjects::Column::TeacherId.eq(teacher_id))
                .into_tuple::<Option<f64>>()
                .one(&txn)
                .await
                .map_err(db_error("查询教师平均分失败"))?
                .flatten();

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            avg.ok_or_else(|| {
                warn!("教师 {} 没有任何成绩记录", teacher.trim());
                UniversityError::empty_aggregate(format!(
                    "Teacher '{}' has no grades",
                    teacher.trim()
                ))
            })
        })
        .await
    }

    /// 9. 学生修读的科目（去重）
    pub async fn student_subjects_impl(&self, student: &str) -> Result<Vec<SubjectItem>> {
        self.with_timeout("select-9", async {
            let txn = self.begin_read_only().await?;
            let student_id = resolve_id_on(&txn, EntityKind::Student, student).await?;

            let rows = subjects::Entity::find()
                .select_only()
                .column_as(subjects::Column::Id, "subject_id")
                .column_as(subjects::Column::Name, "subject_name")
                .join(JoinType::InnerJoin, subjects::Relation::Grades.def())
                .filter(grades::Column::StudentId.eq(student_id))
                .group_by(subjects::Column::Id)
                .group_by(subjects::Column::Name)
                .order_by_asc(subjects::Column::Name)
                .order_by_asc(subjects::Column::Id)
                .into_model::<SubjectItem>()
                .all(&txn)
                .await
                .map_err(db_error("查询学生科目失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-9 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }

    /// 10. 学生从某位教师处修读的科目
    pub async fn student_teacher_subjects_impl(
        &self,
        student: &str,
        teacher: &str,
    ) -> Result<Vec<SubjectItem>> {
        self.with_timeout("select-10", async {
            let txn = self.begin_read_only().await?;
            let student_id = resolve_id_on(&txn, EntityKind::Student, student).await?;
            let teacher_id = resolve_id_on(&txn, EntityKind::Teacher, teacher).await?;

            let rows = subjects::Entity::find()
                .select_only()
                .column_as(subjects::Column::Id, "subject_id")
                .column_as(subjects::Column::Name, "subject_name")
                .join(JoinType::InnerJoin, subjects::Relation::Grades.def())
                .filter(grades::Column::StudentId.eq(student_id))
                .filter(subjects::Column::TeacherId.eq(teacher_id))
                .group_by(subjects::Column::Id)
                .group_by(subjects::Column::Name)
                .order_by_asc(subjects::Column::Name)
                .order_by_asc(subjects::Column::Id)
                .into_model::<SubjectItem>()
                .all(&txn)
                .await
                .map_err(db_error("查询学生教师科目失败"))?;

            txn.commit().await.map_err(db_error("提交只读事务失败"))?;

            debug!("select-10 返回 {} 行", rows.len());
            Ok(rows)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::SeaOrmStorage;
    use super::super::test_support::memory_storage;
    use crate::config::SeedConfig;
    use crate::errors::UniversityError;
    use crate::models::grades::requests::CreateGradeRequest;
    use crate::models::reports::entities::ReportKind;
    use crate::models::reports::responses::ReportOutput;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::subjects::requests::CreateSubjectRequest;
    use crate::models::teachers::requests::CreateTeacherRequest;
    use crate::seed::Seeder;
    use crate::storage::Storage;
    use std::time::Duration;

    /// 班组 A：Alice 与 Bob；Smith 教授 Math；Alice 90 分，Bob 70 分
    async fn scenario() -> SeaOrmStorage {
        let storage = memory_storage().await;
        let group = storage.create_group("A").await.unwrap();
        let smith = storage
            .create_teacher(CreateTeacherRequest {
                name: "Smith".to_string(),
                email: "smith@example.com".to_string(),
            })
            .await
            .unwrap();
        storage
            .create_teacher(CreateTeacherRequest {
                name: "Jones".to_string(),
                email: "jones@example.com".to_string(),
            })
            .await
            .unwrap();
        let math = storage
            .create_subject(CreateSubjectRequest {
                name: "Math".to_string(),
                teacher_id: smith.id,
            })
            .await
            .unwrap();

        for (name, score) in [("Alice", 90.0), ("Bob", 70.0)] {
            let student = storage
                .create_student(CreateStudentRequest {
                    name: name.to_string(),
                    email: format!("{}@example.com", name.to_lowercase()),
                    group_id: group.id,
                })
                .await
                .unwrap();
            storage
                .create_grade(CreateGradeRequest {
                    student_id: student.id,
                    subject_id: math.id,
                    score,
                    created_at: None,
                })
                .await
                .unwrap();
        }

        storage
    }

    #[tokio::test]
    async fn test_scenario_group_averages() {
        let storage = scenario().await;
        let rows = storage.group_averages_in_subject("Math").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group_name, "A");
        assert!((rows[0].avg_score - 80.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_scenario_teacher_average_and_subjects() {
        let storage = scenario().await;
        let avg = storage.teacher_average("Smith").await.unwrap();
        assert!((avg - 80.0).abs() < 1e-9);

        let subjects = storage.teacher_subjects("Smith").await.unwrap();
        let names: Vec<_> = subjects.iter().map(|s| s.subject_name.as_str()).collect();
        assert_eq!(names, vec!["Math"]);
    }

    #[tokio::test]
    async fn test_scenario_best_student() {
        let storage = scenario().await;
        let best = storage.best_student_in_subject("Math").await.unwrap();
        assert_eq!(best.student_name, "Alice");
        assert!((best.avg_score - 90.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_scenario_group_subject_grades() {
        let storage = scenario().await;
        let records = storage.group_subject_grades("A", "Math").await.unwrap();
        let scores: Vec<_> = records.iter().map(|r| (r.student_name.as_str(), r.score)).collect();
        assert_eq!(scores, vec![("Alice", 90.0), ("Bob", 70.0)]);
    }

    #[tokio::test]
    async fn test_teacher_without_grades_is_empty_aggregate() {
        let storage = scenario().await;
        let err = storage.teacher_average("Jones").await.unwrap_err();
        assert!(matches!(err, UniversityError::EmptyAggregate(_)));

        // 没有科目的教师返回空列表而不是错误
        assert!(storage.teacher_subjects("Jones").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_database_aggregates() {
        let storage = memory_storage().await;
        let err = storage.overall_average().await.unwrap_err();
        assert!(matches!(err, UniversityError::EmptyAggregate(_)));
        assert!(storage.top_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_names_are_not_found() {
        let storage = scenario().await;

        let err = storage.teacher_average("Nobody").await.unwrap_err();
        assert!(matches!(err, UniversityError::NotFound(_)));

        let err = storage.group_students("Z").await.unwrap_err();
        assert!(matches!(err, UniversityError::NotFound(_)));

        let err = storage
            .student_teacher_subjects("Alice", "Nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_overall_average_is_mean_of_grades() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 42)
            .populate(&storage)
            .await
            .unwrap();

        let grades = storage.list_grades().await.unwrap();
        let mean = grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64;
        let avg = storage.overall_average().await.unwrap();
        assert!((avg - mean).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_top_students_ordering() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 7)
            .populate(&storage)
            .await
            .unwrap();

        let top = storage.top_students().await.unwrap();
        assert!(top.len() <= 5);
        assert!(top.windows(2).all(|w| w[0].avg_score >= w[1].avg_score));

        // 未入选学生的平均分不高于最后一名
        let last = top.last().unwrap().avg_score;
        let grades = storage.list_grades().await.unwrap();
        for student in storage.list_students().await.unwrap() {
            if top.iter().any(|row| row.student_id == student.id) {
                continue;
            }
            let scores: Vec<f64> = grades
                .iter()
                .filter(|g| g.student_id == student.id)
                .map(|g| g.score)
                .collect();
            if scores.is_empty() {
                continue;
            }
            let avg = scores.iter().sum::<f64>() / scores.len() as f64;
            assert!(avg <= last + 1e-9);
        }
    }

    #[tokio::test]
    async fn test_group_students_matches_membership() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 5)
            .populate(&storage)
            .await
            .unwrap();

        let group = storage.list_groups().await.unwrap().remove(0);
        let mut expected: Vec<i64> = storage
            .list_students()
            .await
            .unwrap()
            .into_iter()
            .filter(|s| s.group_id == group.id)
            .map(|s| s.id)
            .collect();
        let mut actual: Vec<i64> = storage
            .group_students(&group.name)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.student_id)
            .collect();

        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_student_subjects_are_distinct() {
        let storage = memory_storage().await;
        Seeder::with_seed(SeedConfig::default(), 9)
            .populate(&storage)
            .await
            .unwrap();

        for student in storage.list_students().await.unwrap().into_iter().take(5) {
            let subjects = storage.student_subjects(&student.name).await.unwrap();
            let mut ids: Vec<i64> = subjects.iter().map(|s| s.subject_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), subjects.len());
        }
    }

    #[tokio::test]
    async fn test_run_report_checks_arity() {
        let storage = scenario().await;

        let err = storage
            .run_report(ReportKind::TeacherAverage, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::Validation(_)));

        let output = storage
            .run_report(ReportKind::TeacherSubjects, &["Smith".to_string()])
            .await
            .unwrap();
        assert!(matches!(output, ReportOutput::Subjects(ref rows) if rows.len() == 1));
    }

    #[tokio::test]
    async fn test_student_teacher_subjects_filters_by_both() {
        let storage = memory_storage().await;
        let group = storage.create_group("B").await.unwrap();

        let mut teacher_ids = Vec::new();
        for name in ["Smith", "Jones"] {
            let teacher = storage
                .create_teacher(CreateTeacherRequest {
                    name: name.to_string(),
                    email: format!("{}@example.com", name.to_lowercase()),
                })
                .await
                .unwrap();
            teacher_ids.push(teacher.id);
        }

        let mut subject_ids = Vec::new();
        for (name, teacher_id) in [
            ("Math", teacher_ids[0]),
            ("Art", teacher_ids[0]),
            ("Physics", teacher_ids[1]),
        ] {
            let subject = storage
                .create_subject(CreateSubjectRequest {
                    name: name.to_string(),
                    teacher_id,
                })
                .await
                .unwrap();
            subject_ids.push(subject.id);
        }

        let carol = storage
            .create_student(CreateStudentRequest {
                name: "Carol".to_string(),
                email: "carol@example.com".to_string(),
                group_id: group.id,
            })
            .await
            .unwrap();

        // Math 两次、Physics 一次，Art 没有成绩
        for (subject_id, score) in [
            (subject_ids[0], 60.0),
            (subject_ids[0], 75.0),
            (subject_ids[2], 88.0),
        ] {
            storage
                .create_grade(CreateGradeRequest {
                    student_id: carol.id,
                    subject_id,
                    score,
                    created_at: None,
                })
                .await
                .unwrap();
        }

        let rows = storage
            .student_teacher_subjects("Carol", "Smith")
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|s| s.subject_name.as_str()).collect();
        assert_eq!(names, vec!["Math"]);

        let rows = storage
            .student_teacher_subjects("Carol", "Jones")
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|s| s.subject_name.as_str()).collect();
        assert_eq!(names, vec!["Physics"]);
    }

    #[tokio::test]
    async fn test_ambiguous_student_fails_report() {
        let storage = memory_storage().await;
        let group = storage.create_group("A").await.unwrap();
        for email in ["jd1@example.com", "jd2@example.com"] {
            storage
                .create_student(CreateStudentRequest {
                    name: "John Doe".to_string(),
                    email: email.to_string(),
                    group_id: group.id,
                })
                .await
                .unwrap();
        }

        let err = storage.student_subjects("John Doe").await.unwrap_err();
        assert!(matches!(err, UniversityError::Ambiguous(_)));
    }

    #[tokio::test]
    async fn test_stalled_report_times_out() {
        let storage = memory_storage().await;
        let slow = SeaOrmStorage {
            db: storage.db.clone(),
            query_timeout: Duration::from_millis(20),
        };

        let err = slow
            .with_timeout("select-4", std::future::pending::<crate::errors::Result<f64>>())
            .await
            .unwrap_err();
        assert!(matches!(err, UniversityError::QueryTimeout(_)));
        assert!(err.message().contains("select-4"));
    }
}
