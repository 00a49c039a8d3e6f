//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod grades;
mod groups;
mod reports;
mod resolve;
mod seed;
mod students;
mod subjects;
mod teachers;

use crate::config::DatabaseConfig;
use crate::errors::{Result, UniversityError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// 保留连接类错误的分类，附加上下文信息
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(DbErr) -> UniversityError {
    move |err| match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            UniversityError::database_connection(format!("{context}: {err}"))
        }
        _ => UniversityError::database_operation(format!("{context}: {err}")),
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
    pub(crate) query_timeout: Duration,
}

impl SeaOrmStorage {
    /// 根据配置建立连接池，按需执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.connection_url())?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        if config.auto_migrate {
            Migrator::up(&db, None)
                .await
                .map_err(|e| UniversityError::migration(format!("数据库迁移失败: {e}")))?;
        }

        info!("SeaORM 存储初始化完成，数据库: {}", Self::redact(&db_url));

        Ok(Self {
            db,
            query_timeout: config.query_timeout(),
        })
    }

    /// 底层连接，供迁移命令使用
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| UniversityError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000");
        }

        // 内存数据库只存在于单个连接中，连接池必须固定为 1 且不回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size.max(1))
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| UniversityError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(config.echo)
            .sqlx_logging_level(tracing::log::LevelFilter::Info);

        Database::connect(opt)
            .await
            .map_err(|e| UniversityError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(UniversityError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 日志中隐藏密码
    fn redact(url: &str) -> String {
        match (url.find("://"), url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &url[scheme_end + 3..at];
                match credentials.find(':') {
                    Some(colon) => format!(
                        "{}{}:***{}",
                        &url[..scheme_end + 3],
                        &credentials[..colon],
                        &url[at..]
                    ),
                    None => url.to_string(),
                }
            }
            _ => url.to_string(),
        }
    }
}

// Storage trait 实现
use crate::models::{
    EntityKind,
    grades::{entities::Grade, requests::CreateGradeRequest},
    groups::entities::Group,
    reports::responses::{GradeRecord, GroupAverage, StudentAverage, StudentItem, SubjectItem},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use crate::seed::{SeedDataset, SeedSummary};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn resolve_id(&self, kind: EntityKind, name: &str) -> Result<i64> {
        resolve::resolve_id_on(&self.db, kind, name).await
    }

    // 班组模块
    async fn create_group(&self, name: &str) -> Result<Group> {
        self.create_group_impl(name).await
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        self.get_group_by_name_impl(name).await
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.list_groups_impl().await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_name(&self, name: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_name_impl(name).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>> {
        self.get_subject_by_name_impl(name).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_name(&self, name: &str) -> Result<Option<Student>> {
        self.get_student_by_name_impl(name).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn count_grades(&self) -> Result<u64> {
        self.count_grades_impl().await
    }

    // 数据填充
    async fn purge_all(&self) -> Result<()> {
        self.purge_all_impl().await
    }

    async fn replace_all(&self, dataset: SeedDataset) -> Result<SeedSummary> {
        self.replace_all_impl(dataset).await
    }

    // 报表模块
    async fn top_students(&self) -> Result<Vec<StudentAverage>> {
        self.top_students_impl().await
    }

    async fn best_student_in_subject(&self, subject: &str) -> Result<StudentAverage> {
        self.best_student_in_subject_impl(subject).await
    }

    async fn group_averages_in_subject(&self, subject: &str) -> Result<Vec<GroupAverage>> {
        self.group_averages_in_subject_impl(subject).await
    }

    async fn overall_average(&self) -> Result<f64> {
        self.overall_average_impl().await
    }

    async fn teacher_subjects(&self, teacher: &str) -> Result<Vec<SubjectItem>> {
        self.teacher_subjects_impl(teacher).await
    }

    async fn group_students(&self, group: &str) -> Result<Vec<StudentItem>> {
        self.group_students_impl(group).await
    }

    async fn group_subject_grades(&self, group: &str, subject: &str) -> Result<Vec<GradeRecord>> {
        self.group_subject_grades_impl(group, subject).await
    }

    async fn teacher_average(&self, teacher: &str) -> Result<f64> {
        self.teacher_average_impl(teacher).await
    }

    async fn student_subjects(&self, student: &str) -> Result<Vec<SubjectItem>> {
        self.student_subjects_impl(student).await
    }

    async fn student_teacher_subjects(
        &self,
        student: &str,
        teacher: &str,
    ) -> Result<Vec<SubjectItem>> {
        self.student_teacher_subjects_impl(student, teacher).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;
    use crate::config::DatabaseConfig;

    /// 已迁移的内存 SQLite 存储
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        SeaOrmStorage::connect(&config)
            .await
            .expect("in-memory storage should connect")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("data/university.db").unwrap(),
            "sqlite://data/university.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("oracle://nope").is_err());
    }

    #[test]
    fn test_redact_password() {
        assert_eq!(
            SeaOrmStorage::redact("postgres://admin:secret@db:5432/university_db"),
            "postgres://admin:***@db:5432/university_db"
        );
        assert_eq!(
            SeaOrmStorage::redact("sqlite::memory:"),
            "sqlite::memory:"
        );
    }
}
