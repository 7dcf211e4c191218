//! In-Memory Verse Store Implementation

use async_trait::async_trait;

use crate::application::ports::{StoreError, VerseRecord, VerseStorePort};
use crate::domain::VerseSelection;

/// 内存经文存储
///
/// 按插入顺序保存，查询结果按章、节排序。
#[derive(Debug, Default, Clone)]
pub struct InMemoryVerseStore {
    verses: Vec<(String, VerseRecord)>,
}

impl InMemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, book: impl Into<String>, record: VerseRecord) {
        self.verses.push((book.into(), record));
    }

    pub fn with_verse(
        mut self,
        book: impl Into<String>,
        chapter: u32,
        number: u32,
        text: impl Into<String>,
    ) -> Self {
        self.insert(book, VerseRecord::new(chapter, number, text));
        self
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

#[async_trait]
impl VerseStorePort for InMemoryVerseStore {
    async fn list_books(&self) -> Result<Vec<String>, StoreError> {
        let mut books: Vec<String> = Vec::new();
        for (book, _) in &self.verses {
            if !books.contains(book) {
                books.push(book.clone());
            }
        }
        Ok(books)
    }

    async fn select_verses(
        &self,
        book: &str,
        selection: &VerseSelection,
    ) -> Result<Vec<VerseRecord>, StoreError> {
        let mut records: Vec<VerseRecord> = self
            .verses
            .iter()
            .filter(|(b, record)| b == book && selection.contains(record.chapter, record.number))
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by_key(|record| (record.chapter, record.number));
        Ok(records)
    }
}
