//! Site Context
//!
//! Shared state and configuration provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::contact::Notice;
use crate::i18n::{self, Lang};
use crate::storage;
use crate::store::{store_dismiss_notice, store_push_notice, SiteStateStoreFields, SiteStore};

/// Site-wide handles provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub store: SiteStore,
    config: StoredValue<SiteConfig>,
}

impl SiteContext {
    pub fn new(store: SiteStore, config: SiteConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Current language (tracked)
    pub fn lang(&self) -> Lang {
        self.store.language().get()
    }

    /// Translate in the current language (tracked)
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::t(self.lang(), key)
    }

    /// Switch language, persist it and close the dropdown
    pub fn set_language(&self, lang: Lang) {
        log::info!("[i18n] language set to {}", lang.code());
        self.store.language().set(lang);
        self.store.lang_menu_open().set(false);
        let key = self.config.with_value(|c| c.language_storage_key.clone());
        storage::save_language(&key, lang);
        apply_document_language(lang);
    }

    /// Show a notice that disappears after the configured duration
    pub fn notify(&self, notice: Notice) {
        let store = self.store;
        let id = store_push_notice(&store, notice);
        let duration = self.config.with_value(|c| c.notice_duration_ms);
        Timeout::new(duration, move || store_dismiss_notice(&store, id)).forget();
    }
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}

/// Sync `<html lang>` and the document title with the language
pub fn apply_document_language(lang: Lang) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(root) = doc.document_element() {
        if let Err(e) = root.set_attribute("lang", lang.code()) {
            log::warn!("[i18n] failed to set html lang: {:?}", e);
        }
    }
    doc.set_title(i18n::t(lang, "title"));
}
