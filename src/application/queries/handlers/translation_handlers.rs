//! Translation Query Handlers

use std::sync::Arc;

use crate::application::queries::ListTranslations;
use crate::application::registry::{TranslationInfo, TranslationRegistry};

/// ListTranslations Handler
pub struct ListTranslationsHandler {
    registry: Arc<TranslationRegistry>,
}

impl ListTranslationsHandler {
    pub fn new(registry: Arc<TranslationRegistry>) -> Self {
        Self { registry }
    }

    pub fn handle(&self, _query: ListTranslations) -> Vec<TranslationInfo> {
        self.registry.list()
    }
}
