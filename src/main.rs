//! bible - 在终端阅读圣经
//!
//! 启动流程：解析参数 → 加载配置 → 初始化日志 → 打开译本数据库 → 执行命令

use std::sync::Arc;

use clap::Parser;

use bible::application::TranslationRegistry;
use bible::config::{load_config_from_path, print_config};
use bible::{load_config, AppConfig};
use bible::infrastructure::cli::{Args, CliRunner};
use bible::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig, SqliteVerseStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Some(path)),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志，输出到 stderr，stdout 只留给经文
    let log_filter = format!("{},bible={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let registry = open_translations(&config).await?;
    let runner = CliRunner::new(registry, config.defaults.clone());

    let output = runner.run(&args).await?;
    print!("{}", output);

    Ok(())
}

/// 打开所有译本数据库，任何一个打不开都视为致命错误
async fn open_translations(config: &AppConfig) -> anyhow::Result<Arc<TranslationRegistry>> {
    let mut registry = TranslationRegistry::new();

    for translation in &config.translations {
        let db_config = DatabaseConfig::read_only(&translation.path)
            .with_max_connections(config.database.max_connections)
            .with_busy_timeout_ms(config.database.busy_timeout_ms);

        let pool = create_pool(&db_config).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to open translation '{}' at {}: {}",
                translation.id,
                translation.path.display(),
                e
            )
        })?;

        tracing::info!(translation = %translation.id, path = %translation.path.display(), "Translation opened");
        registry.register(
            translation.id.clone(),
            translation.display_name(),
            Arc::new(SqliteVerseStore::new(pool, translation.id.clone())),
        );
    }

    Ok(registry.arc())
}
