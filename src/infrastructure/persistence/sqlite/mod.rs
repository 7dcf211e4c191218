//! SQLite Persistence - 译本数据库

mod database;
mod verse_store;

pub use database::*;
pub use verse_store::*;
