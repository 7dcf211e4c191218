//! Memory Layer - In-Memory Verse Store
//!
//! 不依赖数据库的经文存储实现，用于测试和嵌入

mod verse_store;

pub use verse_store::InMemoryVerseStore;
