//! SQLite Verse Store

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{StoreError, VerseRecord, VerseStorePort};
use crate::domain::VerseSelection;

/// SQLite Verse Store，绑定一个译本数据库
pub struct SqliteVerseStore {
    pool: DbPool,
    translation: String,
}

impl SqliteVerseStore {
    pub fn new(pool: DbPool, translation: impl Into<String>) -> Self {
        Self {
            pool,
            translation: translation.into(),
        }
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(FromRow)]
struct VerseRow {
    chapter: i64,
    verse: i64,
    content: String,
}

impl TryFrom<VerseRow> for VerseRecord {
    type Error = StoreError;

    fn try_from(row: VerseRow) -> Result<Self, Self::Error> {
        Ok(VerseRecord {
            chapter: u32::try_from(row.chapter)
                .map_err(|e| StoreError::SerializationError(format!("chapter {}: {}", row.chapter, e)))?,
            number: u32::try_from(row.verse)
                .map_err(|e| StoreError::SerializationError(format!("verse {}: {}", row.verse, e)))?,
            text: row.content,
        })
    }
}

#[async_trait]
impl VerseStorePort for SqliteVerseStore {
    async fn list_books(&self) -> Result<Vec<String>, StoreError> {
        // 按首次出现的行号排序，保持经卷的正典顺序
        let books: Vec<String> = sqlx::query_scalar(
            "SELECT book FROM bible GROUP BY book ORDER BY MIN(rowid)",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(translation = %self.translation, books = books.len(), "Listed books");
        Ok(books)
    }

    async fn select_verses(
        &self,
        book: &str,
        selection: &VerseSelection,
    ) -> Result<Vec<VerseRecord>, StoreError> {
        let query = match *selection {
            VerseSelection::Book => sqlx::query_as::<_, VerseRow>(
                "SELECT chapter, verse, content FROM bible WHERE book = ? ORDER BY chapter, verse",
            )
            .bind(book),
            VerseSelection::Chapter(chapter) => sqlx::query_as::<_, VerseRow>(
                "SELECT chapter, verse, content FROM bible WHERE book = ? AND chapter = ? ORDER BY verse",
            )
            .bind(book)
            .bind(chapter as i64),
            VerseSelection::Range {
                chapter,
                start,
                end,
            } => sqlx::query_as::<_, VerseRow>(
                "SELECT chapter, verse, content FROM bible WHERE book = ? AND chapter = ? AND verse BETWEEN ? AND ? ORDER BY verse",
            )
            .bind(book)
            .bind(chapter as i64)
            .bind(start as i64)
            .bind(end as i64),
        };

        let rows: Vec<VerseRow> = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(
            translation = %self.translation,
            book = %book,
            selection = ?selection,
            rows = rows.len(),
            "Selected verses"
        );

        rows.into_iter().map(VerseRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn insert_verse(pool: &DbPool, book: &str, chapter: i64, verse: i64, content: &str) {
        sqlx::query("INSERT INTO bible (book, chapter, verse, content) VALUES (?, ?, ?, ?)")
            .bind(book)
            .bind(chapter)
            .bind(verse)
            .bind(content)
            .execute(pool)
            .await
            .unwrap();
    }

    async fn seed(pool: &DbPool) {
        run_migrations(pool).await.unwrap();
        insert_verse(pool, "Gen", 1, 1, "<v>In the beginning").await;
        insert_verse(pool, "Gen", 1, 2, "And the earth").await;
        insert_verse(pool, "Gen", 1, 3, "And God said").await;
        insert_verse(pool, "Gen", 2, 1, "Thus the heavens").await;
        insert_verse(pool, "Exo", 1, 1, "Now these are the names").await;
        insert_verse(pool, "Lev", 1, 1, "And the LORD called").await;
    }

    async fn seeded_store() -> SqliteVerseStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        seed(&pool).await;
        SqliteVerseStore::new(pool, "kjv-en")
    }

    fn numbers(records: &[VerseRecord]) -> Vec<(u32, u32)> {
        records.iter().map(|r| (r.chapter, r.number)).collect()
    }

    #[tokio::test]
    async fn test_list_books_in_canonical_order() {
        let store = seeded_store().await;
        assert_eq!(store.list_books().await.unwrap(), vec!["Gen", "Exo", "Lev"]);
    }

    #[tokio::test]
    async fn test_select_range() {
        let store = seeded_store().await;
        let records = store
            .select_verses(
                "Gen",
                &VerseSelection::Range {
                    chapter: 1,
                    start: 1,
                    end: 2,
                },
            )
            .await
            .unwrap();

        assert_eq!(numbers(&records), vec![(1, 1), (1, 2)]);
        // 存储层返回原始文本
        assert_eq!(records[0].text, "<v>In the beginning");
    }

    #[tokio::test]
    async fn test_select_chapter() {
        let store = seeded_store().await;
        let records = store
            .select_verses("Gen", &VerseSelection::Chapter(1))
            .await
            .unwrap();
        assert_eq!(numbers(&records), vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[tokio::test]
    async fn test_select_whole_book() {
        let store = seeded_store().await;
        let records = store
            .select_verses("Gen", &VerseSelection::Book)
            .await
            .unwrap();
        assert_eq!(numbers(&records), vec![(1, 1), (1, 2), (1, 3), (2, 1)]);
    }

    #[tokio::test]
    async fn test_select_missing_chapter_is_empty() {
        let store = seeded_store().await;
        let records = store
            .select_verses("Gen", &VerseSelection::Chapter(51))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_book_name_is_bound_not_interpolated() {
        let store = seeded_store().await;
        let records = store
            .select_verses("Gen' OR '1'='1", &VerseSelection::Book)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let store = SqliteVerseStore::new(pool, "empty");
        assert!(matches!(
            store.list_books().await,
            Err(StoreError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_read_only_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kjv.db");

        let writable = create_pool(&DatabaseConfig::writable(&path)).await.unwrap();
        seed(&writable).await;
        writable.close().await;

        let pool = create_pool(&DatabaseConfig::read_only(&path)).await.unwrap();
        let store = SqliteVerseStore::new(pool, "kjv-en");
        assert_eq!(store.translation(), "kjv-en");

        let records = store
            .select_verses("Exo", &VerseSelection::Chapter(1))
            .await
            .unwrap();
        assert_eq!(records, vec![VerseRecord::new(1, 1, "Now these are the names")]);

        let write = sqlx::query("DELETE FROM bible").execute(store.pool()).await;
        assert!(write.is_err());
    }
}
