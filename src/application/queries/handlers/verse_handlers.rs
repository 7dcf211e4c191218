//! Verse Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{VerseRecord, VerseStorePort};
use crate::application::queries::{GetPassage, ListBooks};
use crate::application::registry::TranslationRegistry;
use crate::domain::{parse_reference, strip_markup, Reference};

// ============================================================================
// Response DTOs
// ============================================================================

/// 经文响应（文本已清理标记）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseResponse {
    pub chapter: u32,
    pub number: u32,
    pub text: String,
}

impl From<VerseRecord> for VerseResponse {
    fn from(record: VerseRecord) -> Self {
        Self {
            chapter: record.chapter,
            number: record.number,
            text: strip_markup(&record.text),
        }
    }
}

/// 经文段落响应
#[derive(Debug, Clone)]
pub struct PassageResponse {
    pub translation: String,
    pub book: String,
    pub reference: Reference,
    /// 按章、节升序；可能为空
    pub verses: Vec<VerseResponse>,
}

impl PassageResponse {
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// 书卷是否存在于译本中（精确匹配，区分大小写）
pub async fn book_exists(store: &dyn VerseStorePort, book: &str) -> Result<bool, ApplicationError> {
    let books = store.list_books().await?;
    Ok(books.iter().any(|b| b == book))
}

fn resolve_store(
    registry: &TranslationRegistry,
    translation: &str,
) -> Result<Arc<dyn VerseStorePort>, ApplicationError> {
    registry
        .get(translation)
        .ok_or_else(|| ApplicationError::unknown_translation(translation))
}

// ============================================================================
// Handlers
// ============================================================================

/// GetPassage Handler
pub struct GetPassageHandler {
    registry: Arc<TranslationRegistry>,
}

impl GetPassageHandler {
    pub fn new(registry: Arc<TranslationRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetPassage) -> Result<PassageResponse, ApplicationError> {
        let reference = parse_reference(&query.reference)?;

        let store = resolve_store(&self.registry, &query.translation)?;
        if !book_exists(store.as_ref(), &query.book).await? {
            return Err(ApplicationError::unknown_book(&query.book, &query.translation));
        }

        let records = store
            .select_verses(&query.book, &reference.selection())
            .await?;

        Ok(PassageResponse {
            translation: query.translation,
            book: query.book,
            reference,
            verses: records.into_iter().map(VerseResponse::from).collect(),
        })
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    registry: Arc<TranslationRegistry>,
}

impl ListBooksHandler {
    pub fn new(registry: Arc<TranslationRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: ListBooks) -> Result<Vec<String>, ApplicationError> {
        let store = resolve_store(&self.registry, &query.translation)?;
        Ok(store.list_books().await?)
    }
}
