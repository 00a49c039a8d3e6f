//! University Reports - 大学成绩库报表服务
//!
//! 基于 SeaORM 的成绩库模式、随机数据填充与十个固定报表查询，
//! 提供命令行与 Actix Web 两种访问方式。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `seed`: 随机数据填充
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod seed;
pub mod services;
pub mod storage;
pub mod utils;
