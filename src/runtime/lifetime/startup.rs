use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::{Storage, create_storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 检查数据是否为空，空库时提示先执行 seed
async fn check_dataset(storage: &Arc<dyn Storage>) {
    match storage.count_grades().await {
        Ok(0) => {
            warn!("==========================================================");
            warn!("  NO GRADES FOUND - AVERAGE REPORTS WILL FAIL");
            warn!("  Run `university-reports seed` to populate sample data");
            warn!("==========================================================");
        }
        Ok(count) => {
            debug!("Database already has {} grade(s)", count);
        }
        Err(e) => {
            warn!("Failed to count grades: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = create_storage(&config.database).await?;
    info!("Storage backend initialized");

    check_dataset(&storage).await;

    Ok(StartupContext { storage })
}
