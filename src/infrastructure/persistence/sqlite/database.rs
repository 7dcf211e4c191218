//! SQLite Database - 数据库连接和建表

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 默认锁等待时间
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 以只读方式打开
    pub read_only: bool,
    /// 遇到锁时的等待时间（毫秒）
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::read_only("./data/kjv.db")
    }
}

impl DatabaseConfig {
    /// 只读打开已有的译本数据库
    pub fn read_only(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}", path.as_ref().display()),
            max_connections: 1,
            read_only: true,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// 读写打开，文件不存在时创建
    pub fn writable(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 1,
            read_only: false,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            read_only: false,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_busy_timeout_ms(mut self, busy_timeout_ms: u64) -> Self {
        self.busy_timeout_ms = busy_timeout_ms;
        self
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 只读模式下数据库文件必须已存在，否则连接失败。
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .read_only(config.read_only)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    // 内存数据库每个连接各自独立，连接不能被回收
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    tracing::debug!(
        url = %config.database_url,
        read_only = config.read_only,
        "SQLite pool created"
    );

    Ok(pool)
}

/// 创建经文表
///
/// 表结构与 ebible 导出的数据库一致：`bible(book, chapter, verse, content)`
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bible (
            book TEXT NOT NULL,
            chapter INTEGER NOT NULL,
            verse INTEGER NOT NULL,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bible_book_chapter_verse
        ON bible(book, chapter, verse)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Database migrations completed");
    Ok(())
}
