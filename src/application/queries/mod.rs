//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：经文存储只读，所有操作都是查询

mod verse_queries;

pub mod handlers;

pub use verse_queries::*;
