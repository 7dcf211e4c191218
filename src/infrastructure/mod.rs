//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod cli;
pub mod memory;
pub mod persistence;

pub use cli::{Args, CliRunner};
pub use memory::InMemoryVerseStore;
pub use persistence::sqlite::SqliteVerseStore;
