use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "University Reports".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub cors_max_age: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 0,
            max_workers: 8,
            timeouts: TimeoutConfig::default(),
            cors_max_age: 3600,
        }
    }
}

/// 超时配置（毫秒，keep_alive 为秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            client_request: 5000,
            client_disconnect: 1000,
            keep_alive: 75,
        }
    }
}

/// 数据库配置
///
/// `url` 非空时直接使用；否则在设置了 `user` 时由分项拼出 PostgreSQL URL，
/// 两者都没有时回落到本地 SQLite 文件。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub pool_size: u32,        // 连接池大小
    pub timeout: u64,          // 连接超时 (秒)
    pub query_timeout_ms: u64, // 单个报表查询超时 (毫秒)
    pub auto_migrate: bool,    // 连接后自动执行迁移
    pub echo: bool,            // 输出 SQL 日志
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: "localhost".to_string(),
            port: 5432,
            user: String::new(),
            password: String::new(),
            name: "university_db".to_string(),
            pool_size: 10,
            timeout: 30,
            query_timeout_ms: 10_000,
            auto_migrate: true,
            echo: false,
        }
    }
}

/// 随机数据填充配置，区间均为闭区间
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub groups: usize,
    pub teachers_min: usize,
    pub teachers_max: usize,
    pub subjects_min: usize,
    pub subjects_max: usize,
    pub students_min: usize,
    pub students_max: usize,
    pub grades_min: usize,
    pub grades_max: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            groups: 3,
            teachers_min: 3,
            teachers_max: 5,
            subjects_min: 5,
            subjects_max: 8,
            students_min: 30,
            students_max: 50,
            grades_min: 5,
            grades_max: 20,
        }
    }
}
