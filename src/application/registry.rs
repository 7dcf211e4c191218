//! Translation Registry - 译本注册表
//!
//! 启动时构建一次，之后只读。替代全局的 "译本 ID → 连接" 映射，
//! 作为显式依赖传给各个查询处理器。

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::ports::VerseStorePort;

/// 译本信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationInfo {
    /// 译本 ID（如 `kjv-en`）
    pub id: String,
    /// 显示名称
    pub name: String,
}

struct TranslationEntry {
    info: TranslationInfo,
    store: Arc<dyn VerseStorePort>,
}

/// 译本注册表
#[derive(Default)]
pub struct TranslationRegistry {
    entries: BTreeMap<String, TranslationEntry>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册译本；同一 ID 重复注册时覆盖旧值
    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        store: Arc<dyn VerseStorePort>,
    ) {
        let id = id.into();
        let info = TranslationInfo {
            id: id.clone(),
            name: name.into(),
        };
        self.entries.insert(id, TranslationEntry { info, store });
    }

    pub fn with(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        store: Arc<dyn VerseStorePort>,
    ) -> Self {
        self.register(id, name, store);
        self
    }

    /// 译本是否存在
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn VerseStorePort>> {
        self.entries.get(id).map(|entry| Arc::clone(&entry.store))
    }

    /// 所有译本，按 ID 排序
    pub fn list(&self) -> Vec<TranslationInfo> {
        self.entries.values().map(|entry| entry.info.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryVerseStore;

    #[test]
    fn test_register_and_lookup() {
        assert!(TranslationRegistry::new().is_empty());

        let registry = TranslationRegistry::new()
            .with("kjv-en", "King James Version", Arc::new(InMemoryVerseStore::new()))
            .with("asv-en", "American Standard Version", Arc::new(InMemoryVerseStore::new()));

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains("kjv-en"));
        assert!(!registry.contains("KJV-EN"));
        assert!(registry.get("asv-en").is_some());
        assert!(registry.get("web-en").is_none());
    }

    #[test]
    fn test_list_sorted_by_id() {
        let registry = TranslationRegistry::new()
            .with("kjv-en", "King James Version", Arc::new(InMemoryVerseStore::new()))
            .with("asv-en", "American Standard Version", Arc::new(InMemoryVerseStore::new()));

        let ids: Vec<String> = registry.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["asv-en", "kjv-en"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = TranslationRegistry::new();
        registry.register("kjv-en", "old", Arc::new(InMemoryVerseStore::new()));
        registry.register("kjv-en", "new", Arc::new(InMemoryVerseStore::new()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list()[0].name, "new");
    }
}
