//! CLI Runner - 命令分发
//!
//! 将命令行参数转换为查询，并把结果渲染为文本。
//! 用户输入错误渲染为提示信息，存储错误向上返回。

use std::sync::Arc;

use super::args::Args;
use super::render::{render_books, render_passage, render_translations};
use crate::application::{
    ApplicationError, GetPassage, GetPassageHandler, ListBooks, ListBooksHandler,
    ListTranslations, ListTranslationsHandler, TranslationRegistry,
};
use crate::config::DefaultsConfig;

/// 结果为空时的提示
pub const EMPTY_PASSAGE_MESSAGE: &str = "invalid: unknown verse range";

/// 命令行应用
pub struct CliRunner {
    registry: Arc<TranslationRegistry>,
    defaults: DefaultsConfig,
}

impl CliRunner {
    pub fn new(registry: Arc<TranslationRegistry>, defaults: DefaultsConfig) -> Self {
        Self { registry, defaults }
    }

    /// 执行一次命令，返回要写到标准输出的文本
    pub async fn run(&self, args: &Args) -> Result<String, ApplicationError> {
        match self.execute(args).await {
            Ok(output) => Ok(output),
            Err(err) if err.is_user_error() => Ok(format!("{}\n", err)),
            Err(err) => Err(err),
        }
    }

    async fn execute(&self, args: &Args) -> Result<String, ApplicationError> {
        let translation = args
            .translation
            .clone()
            .unwrap_or_else(|| self.defaults.translation.clone());

        if args.list_books {
            let books = ListBooksHandler::new(self.registry.clone())
                .handle(ListBooks { translation })
                .await?;
            return Ok(render_books(&books));
        }

        if args.list_translations {
            let translations =
                ListTranslationsHandler::new(self.registry.clone()).handle(ListTranslations);
            return Ok(render_translations(&translations));
        }

        let query = GetPassage {
            translation,
            book: args
                .book
                .clone()
                .unwrap_or_else(|| self.defaults.book.clone()),
            reference: args
                .reference
                .clone()
                .unwrap_or_else(|| self.defaults.reference.clone()),
        };

        let passage = GetPassageHandler::new(self.registry.clone())
            .handle(query)
            .await?;

        if passage.is_empty() {
            return Ok(format!("{}\n", EMPTY_PASSAGE_MESSAGE));
        }

        Ok(render_passage(&passage, args.show_numbers))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::application::{StoreError, VerseRecord, VerseStorePort};
    use crate::domain::VerseSelection;
    use crate::infrastructure::memory::InMemoryVerseStore;

    struct OfflineStore;

    #[async_trait]
    impl VerseStorePort for OfflineStore {
        async fn list_books(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::DatabaseError("unable to open database file".to_string()))
        }

        async fn select_verses(
            &self,
            _book: &str,
            _selection: &VerseSelection,
        ) -> Result<Vec<VerseRecord>, StoreError> {
            Err(StoreError::DatabaseError("unable to open database file".to_string()))
        }
    }

    fn runner() -> CliRunner {
        let store = InMemoryVerseStore::new()
            .with_verse("Gen", 1, 1, "<v> In the beginning God created the heaven and the earth.")
            .with_verse("Gen", 1, 2, "And the earth was without form, and void;")
            .with_verse("Gen", 1, 3, "And God said, Let there be light: and there was light.")
            .with_verse("Exo", 1, 1, "Now these are the names of the children of Israel.");
        let registry = TranslationRegistry::new()
            .with("kjv-en", "King James Version (English)", Arc::new(store))
            .with("offline", "Offline", Arc::new(OfflineStore))
            .arc();
        CliRunner::new(registry, DefaultsConfig::default())
    }

    fn args(book: &str, reference: &str) -> Args {
        Args {
            book: Some(book.to_string()),
            reference: Some(reference.to_string()),
            ..Args::default()
        }
    }

    #[tokio::test]
    async fn test_prints_range() {
        let output = runner().run(&args("Gen", "1:1-2")).await.unwrap();
        assert_eq!(
            output,
            "In the beginning God created the heaven and the earth.\n\
             And the earth was without form, and void;\n"
        );
    }

    #[tokio::test]
    async fn test_prints_numbers() {
        let mut args = args("Gen", "1:2-3");
        args.show_numbers = true;
        let output = runner().run(&args).await.unwrap();
        assert_eq!(
            output,
            "1:2 And the earth was without form, and void;\n\
             1:3 And God said, Let there be light: and there was light.\n"
        );
    }

    #[tokio::test]
    async fn test_defaults_to_whole_first_book() {
        let output = runner().run(&Args::default()).await.unwrap();
        assert_eq!(output.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_empty_passage_message() {
        let output = runner().run(&args("Gen", "9")).await.unwrap();
        assert_eq!(output, "invalid: unknown verse range\n");
    }

    #[tokio::test]
    async fn test_parse_error_is_reported() {
        let output = runner().run(&args("Gen", "1-2:3")).await.unwrap();
        assert_eq!(output, "invalid: can't reach end stage before start stage\n");
    }

    #[tokio::test]
    async fn test_unknown_book_is_reported() {
        let output = runner().run(&args("Genesis", "1")).await.unwrap();
        assert!(output.starts_with("invalid: book 'Genesis'"));
    }

    #[tokio::test]
    async fn test_unknown_translation_is_reported() {
        let mut args = args("Gen", "1");
        args.translation = Some("web-en".to_string());
        let output = runner().run(&args).await.unwrap();
        assert!(output.starts_with("invalid: translation 'web-en'"));
    }

    #[tokio::test]
    async fn test_list_books() {
        let args = Args {
            list_books: true,
            ..Args::default()
        };
        assert_eq!(runner().run(&args).await.unwrap(), "Gen, Exo\n");
    }

    #[tokio::test]
    async fn test_list_translations() {
        let args = Args {
            list_translations: true,
            ..Args::default()
        };
        assert_eq!(
            runner().run(&args).await.unwrap(),
            "King James Version (English) (kjv-en)\nOffline (offline)\n"
        );
    }

    #[tokio::test]
    async fn test_store_error_is_returned() {
        let mut args = args("Gen", "1");
        args.translation = Some("offline".to_string());
        let err = runner().run(&args).await.unwrap_err();
        assert!(matches!(err, ApplicationError::StoreError(_)));
    }
}
