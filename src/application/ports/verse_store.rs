//! Verse Store Port - 出站端口
//!
//! 定义经文存储的抽象接口，每个实例绑定一个译本。
//! 具体实现在 infrastructure 层（SQLite、内存）。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::VerseSelection;

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 经文实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub chapter: u32,
    /// 章内节号
    pub number: u32,
    /// 原始文本，可能包含内联标签和换行
    pub text: String,
}

impl VerseRecord {
    pub fn new(chapter: u32, number: u32, text: impl Into<String>) -> Self {
        Self {
            chapter,
            number,
            text: text.into(),
        }
    }
}

/// Verse Store Port
#[async_trait]
pub trait VerseStorePort: Send + Sync {
    /// 列出所有书卷名（去重，按首次出现的顺序）
    async fn list_books(&self) -> Result<Vec<String>, StoreError>;

    /// 按书卷和选择范围查询经文，按章、节升序返回
    async fn select_verses(
        &self,
        book: &str,
        selection: &VerseSelection,
    ) -> Result<Vec<VerseRecord>, StoreError>;
}
