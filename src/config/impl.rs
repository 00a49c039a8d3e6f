use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, DatabaseConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 解析布尔型环境变量（1/true/yes/on）
fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// 加载配置，`environment` 优先于 APP_ENV
    pub fn load_with_env(environment: Option<&str>) -> Result<Self, ConfigError> {
        let environment = environment
            .map(str::to_string)
            .or_else(|| std::env::var("APP_ENV").ok());

        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    environment.as_deref().unwrap_or("development")
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，例如 UNIVERSITY_DATABASE__POOL_SIZE
            .add_source(
                Environment::with_prefix("UNIVERSITY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", environment.clone())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.user", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASSWORD").ok())?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.port", std::env::var("DB_PORT").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?
            .set_override_option(
                "database.echo",
                env_flag("DB_ECHO").or_else(|| env_flag("SQLALCHEMY_ECHO")),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 以指定环境初始化配置
    pub fn init_with_env(environment: Option<&str>) -> Result<(), ConfigError> {
        let config = Self::load_with_env(environment)?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// 计算最终使用的连接 URL
    pub fn connection_url(&self) -> String {
        if !self.url.trim().is_empty() {
            return self.url.trim().to_string();
        }

        if self.user.is_empty() {
            return format!("sqlite://{}.db?mode=rwc", self.name);
        }

        if self.password.is_empty() {
            format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            )
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            )
        }
    }

    /// 报表查询超时
    pub fn query_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.query_timeout_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = DatabaseConfig {
            url: " postgres://u:p@db:5432/x ".to_string(),
            user: "ignored".to_string(),
            ..Default::default()
        };
        assert_eq!(config.connection_url(), "postgres://u:p@db:5432/x");
    }

    #[test]
    fn test_url_from_parts() {
        let config = DatabaseConfig {
            user: "postgres".to_string(),
            password: "secret".to_string(),
            host: "db".to_string(),
            port: 5433,
            ..Default::default()
        };
        assert_eq!(
            config.connection_url(),
            "postgres://postgres:secret@db:5433/university_db"
        );
    }

    #[test]
    fn test_sqlite_fallback() {
        let config = DatabaseConfig::default();
        assert_eq!(config.connection_url(), "sqlite://university_db.db?mode=rwc");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.is_development());
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
        assert_eq!(config.database.query_timeout().as_millis(), 10_000);
        assert_eq!(config.seed.groups, 3);
    }
}
