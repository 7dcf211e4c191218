//! Persistence Layer - 数据持久化
//!
//! 每个译本对应一个只读 SQLite 数据库

pub mod sqlite;

pub use self::sqlite::SqliteVerseStore;
