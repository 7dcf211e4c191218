//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 可用译本
    #[serde(default = "default_translations")]
    pub translations: Vec<TranslationConfig>,

    /// 命令行缺省值
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseSettings,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translations: default_translations(),
            defaults: DefaultsConfig::default(),
            database: DatabaseSettings::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn translation(&self, id: &str) -> Option<&TranslationConfig> {
        self.translations.iter().find(|t| t.id == id)
    }
}

/// 译本配置
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslationConfig {
    /// 译本 ID（如 `kjv-en`）
    pub id: String,

    /// 显示名称，缺省时使用 ID
    #[serde(default)]
    pub name: Option<String>,

    /// SQLite 数据库文件路径
    pub path: PathBuf,
}

impl TranslationConfig {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn default_translations() -> Vec<TranslationConfig> {
    vec![TranslationConfig {
        id: default_translation(),
        name: Some("King James Version (English)".to_string()),
        path: PathBuf::from("data/kjv.db"),
    }]
}

/// 命令行缺省值
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// 缺省译本
    #[serde(default = "default_translation")]
    pub translation: String,

    /// 缺省书卷
    #[serde(default = "default_book")]
    pub book: String,

    /// 缺省引用（`0` 表示整卷书）
    #[serde(default = "default_reference")]
    pub reference: String,
}

fn default_translation() -> String {
    "kjv-en".to_string()
}

fn default_book() -> String {
    "Gen".to_string()
}

fn default_reference() -> String {
    "0".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            translation: default_translation(),
            book: default_book(),
            reference: default_reference(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 每个译本的最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// 锁等待时间（毫秒）
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_max_connections() -> u32 {
    1
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
