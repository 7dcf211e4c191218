//! Bible - 终端经文查询
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Reference Context: 引用解析、选择范围
//! - Markup: 经文标记清理
//!
//! 应用层 (application/):
//! - Ports: VerseStore 端口
//! - Queries: 经文、书卷、译本查询处理器
//! - Registry: 译本注册表
//!
//! 基础设施层 (infrastructure/):
//! - CLI: 参数解析与输出渲染
//! - Persistence: SQLite 译本数据库
//! - Memory: 内存经文存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
