//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（VerseStore）
//! - queries: CQRS 查询及处理器
//! - registry: 译本注册表
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;
pub mod registry;

pub use error::ApplicationError;

pub use ports::{StoreError, VerseRecord, VerseStorePort};

pub use queries::{
    GetPassage,
    ListBooks,
    ListTranslations,
    // Handlers
    handlers::{
        book_exists, GetPassageHandler, ListBooksHandler, ListTranslationsHandler,
        PassageResponse, VerseResponse,
    },
};

pub use registry::{TranslationInfo, TranslationRegistry};
