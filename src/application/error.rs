//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::ReferenceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 译本未注册
    #[error("invalid: translation '{0}' doesn't exist...try '--lt' or '--help'")]
    UnknownTranslation(String),

    /// 书卷在该译本中不存在
    #[error("invalid: book '{book}' doesn't exist for translation '{translation}'")]
    UnknownBook { book: String, translation: String },

    /// 引用格式错误
    #[error(transparent)]
    InvalidReference(#[from] ReferenceError),

    /// 存储错误
    #[error("Store error: {0}")]
    StoreError(String),
}

impl ApplicationError {
    pub fn unknown_translation(translation: impl Into<String>) -> Self {
        Self::UnknownTranslation(translation.into())
    }

    pub fn unknown_book(book: impl Into<String>, translation: impl Into<String>) -> Self {
        Self::UnknownBook {
            book: book.into(),
            translation: translation.into(),
        }
    }

    /// 是否为用户输入导致的错误（可恢复，只需提示）
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::StoreError(_))
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::StoreError(err.to_string())
    }
}
