//! Verse Queries

/// 获取经文段落查询
#[derive(Debug, Clone)]
pub struct GetPassage {
    pub translation: String,
    pub book: String,
    /// `chapter[:start[-end]]` 形式的引用
    pub reference: String,
}

/// 列出译本中所有书卷
#[derive(Debug, Clone)]
pub struct ListBooks {
    pub translation: String,
}

/// 列出所有译本
#[derive(Debug, Clone)]
pub struct ListTranslations;
