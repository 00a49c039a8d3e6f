use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::{Result, UniversityError};
use crate::models::{
    EntityKind,
    grades::{entities::Grade, requests::CreateGradeRequest},
    groups::entities::Group,
    reports::{
        entities::ReportKind,
        responses::{
            AverageScore, GradeRecord, GroupAverage, ReportOutput, StudentAverage, StudentItem,
            SubjectItem,
        },
    },
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use crate::seed::{SeedDataset, SeedSummary};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 名称解析
    // 将名称解析为实体ID，未找到返回 NotFound，多条匹配返回 Ambiguous
    async fn resolve_id(&self, kind: EntityKind, name: &str) -> Result<i64>;

    /// 班组管理方法
    async fn create_group(&self, name: &str) -> Result<Group>;
    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>>;
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_name(&self, name: &str) -> Result<Option<Teacher>>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_name(&self, name: &str) -> Result<Option<Student>>;
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// 成绩管理方法
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    async fn count_grades(&self) -> Result<u64>;

    /// 数据填充
    // 清空全部数据
    async fn purge_all(&self) -> Result<()>;
    // 在同一事务中清空并写入整套数据
    async fn replace_all(&self, dataset: SeedDataset) -> Result<SeedSummary>;

    /// 报表查询（只读）
    // 1. 平均分最高的 5 名学生
    async fn top_students(&self) -> Result<Vec<StudentAverage>>;
    // 2. 某科目平均分最高的学生
    async fn best_student_in_subject(&self, subject: &str) -> Result<StudentAverage>;
    // 3. 某科目各班组平均分
    async fn group_averages_in_subject(&self, subject: &str) -> Result<Vec<GroupAverage>>;
    // 4. 全部成绩平均分
    async fn overall_average(&self) -> Result<f64>;
    // 5. 教师所授科目
    async fn teacher_subjects(&self, teacher: &str) -> Result<Vec<SubjectItem>>;
    // 6. 班组学生名单
    async fn group_students(&self, group: &str) -> Result<Vec<StudentItem>>;
    // 7. 某班组在某科目的全部成绩
    async fn group_subject_grades(&self, group: &str, subject: &str) -> Result<Vec<GradeRecord>>;
    // 8. 教师给出的平均分
    async fn teacher_average(&self, teacher: &str) -> Result<f64>;
    // 9. 学生修读的科目
    async fn student_subjects(&self, student: &str) -> Result<Vec<SubjectItem>>;
    // 10. 学生从某教师处修读的科目
    async fn student_teacher_subjects(
        &self,
        student: &str,
        teacher: &str,
    ) -> Result<Vec<SubjectItem>>;

    /// 按位置参数执行报表
    async fn run_report(&self, kind: ReportKind, args: &[String]) -> Result<ReportOutput> {
        let params = kind.params();
        if args.len() != params.len() {
            return Err(UniversityError::validation(format!(
                "{kind} expects {} argument(s) ({}), got {}",
                params.len(),
                params.join(", "),
                args.len()
            )));
        }

        let output = match kind {
            ReportKind::TopStudents => ReportOutput::StudentAverages(self.top_students().await?),
            ReportKind::BestStudentInSubject => {
                ReportOutput::StudentAverage(self.best_student_in_subject(&args[0]).await?)
            }
            ReportKind::GroupAveragesInSubject => {
                ReportOutput::GroupAverages(self.group_averages_in_subject(&args[0]).await?)
            }
            ReportKind::OverallAverage => ReportOutput::Average(AverageScore {
                avg_score: self.overall_average().await?,
            }),
            ReportKind::TeacherSubjects => {
                ReportOutput::Subjects(self.teacher_subjects(&args[0]).await?)
            }
            ReportKind::GroupStudents => ReportOutput::Students(self.group_students(&args[0]).await?),
            ReportKind::GroupSubjectGrades => {
                ReportOutput::GradeRecords(self.group_subject_grades(&args[0], &args[1]).await?)
            }
            ReportKind::TeacherAverage => ReportOutput::Average(AverageScore {
                avg_score: self.teacher_average(&args[0]).await?,
            }),
            ReportKind::StudentSubjects => {
                ReportOutput::Subjects(self.student_subjects(&args[0]).await?)
            }
            ReportKind::StudentTeacherSubjects => {
                ReportOutput::Subjects(self.student_teacher_subjects(&args[0], &args[1]).await?)
            }
        };

        Ok(output)
    }
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
