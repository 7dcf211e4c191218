//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（bible.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["bible", "bible.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `BIBLE_DEFAULTS__TRANSLATION=kjv-en`
/// - `BIBLE_DEFAULTS__BOOK=John`
/// - `BIBLE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（译本列表由 serde 默认值提供）
    builder = builder
        .set_default("defaults.translation", "kjv-en")?
        .set_default("defaults.book", "Gen")?
        .set_default("defaults.reference", "0")?
        .set_default("database.max_connections", 1)?
        .set_default("database.busy_timeout_ms", 5000)?
        .set_default("log.level", "warn")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: BIBLE_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("BIBLE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.translations.is_empty() {
        return Err(ConfigError::ValidationError(
            "At least one translation must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for translation in &config.translations {
        if translation.id.is_empty() {
            return Err(ConfigError::ValidationError(
                "Translation id cannot be empty".to_string(),
            ));
        }
        if translation.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Database path for translation '{}' cannot be empty",
                translation.id
            )));
        }
        if !seen.insert(translation.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate translation id '{}'",
                translation.id
            )));
        }
    }

    if config.translation(&config.defaults.translation).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "Default translation '{}' is not configured",
            config.defaults.translation
        )));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    for translation in &config.translations {
        tracing::debug!(
            "Translation: {} ({}) -> {}",
            translation.display_name(),
            translation.id,
            translation.path.display()
        );
    }
    tracing::debug!("Default Translation: {}", config.defaults.translation);
    tracing::debug!("Default Book: {}", config.defaults.book);
    tracing::debug!("Default Reference: {}", config.defaults.reference);
    tracing::debug!("Database Max Connections: {}", config.database.max_connections);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}
