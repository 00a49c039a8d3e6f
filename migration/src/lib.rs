//! 数据库迁移
//!
//! 按版本顺序注册的迁移列表，应用层只依赖最终的表结构。

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_tables::Migration)]
    }
}
