//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::contact::Notice;
use crate::i18n::Lang;

/// A notice currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct PostedNotice {
    pub id: u32,
    pub notice: Notice,
}

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Selected UI language
    pub language: Lang,
    /// Language dropdown expanded
    pub lang_menu_open: bool,
    /// Mobile navigation expanded
    pub nav_menu_open: bool,
    /// Id of the section currently scrolled into
    pub active_section: Option<String>,
    /// Visible notices, oldest first
    pub notices: Vec<PostedNotice>,
    /// Id for the next notice
    pub next_notice_id: u32,
}

impl SiteState {
    pub fn new(language: Lang) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

// ========================
// Store Helper Functions
// ========================

/// Append a notice and return its id
pub fn store_push_notice(store: &SiteStore, notice: Notice) -> u32 {
    let next = store.next_notice_id();
    next.update(|n| *n += 1);
    let id = next.get_untracked();
    store.notices().write().push(PostedNotice { id, notice });
    id
}

/// Remove a notice by id
pub fn store_dismiss_notice(store: &SiteStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Field, FieldError};

    fn ids(store: &SiteStore) -> Vec<u32> {
        store.notices().get_untracked().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_push_notices_oldest_first() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(SiteState::new(Lang::Ru));

        let first = store_push_notice(&store, Notice::Success("Спасибо!".to_string()));
        let second = store_push_notice(&store, Notice::Error("offline".to_string()));
        let third = store_push_notice(
            &store,
            Notice::Validation(vec![FieldError { field: Field::Email }]),
        );

        assert!(first < second && second < third);
        assert_eq!(ids(&store), vec![first, second, third]);
        assert_eq!(store.next_notice_id().get_untracked(), third);
        assert_eq!(
            store.notices().get_untracked()[0].notice,
            Notice::Success("Спасибо!".to_string())
        );
    }

    #[test]
    fn test_dismiss_leaves_other_notices() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(SiteState::new(Lang::En));

        let first = store_push_notice(&store, Notice::Error("a".to_string()));
        let second = store_push_notice(&store, Notice::Error("b".to_string()));
        let third = store_push_notice(&store, Notice::Error("c".to_string()));

        store_dismiss_notice(&store, second);
        assert_eq!(ids(&store), vec![first, third]);

        // Unknown ids are ignored
        store_dismiss_notice(&store, 99);
        assert_eq!(ids(&store), vec![first, third]);

        store_dismiss_notice(&store, first);
        store_dismiss_notice(&store, third);
        assert!(store.notices().get_untracked().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(SiteState::default());

        let first = store_push_notice(&store, Notice::Error("a".to_string()));
        store_dismiss_notice(&store, first);
        let second = store_push_notice(&store, Notice::Error("b".to_string()));
        assert_ne!(first, second);
        assert_eq!(ids(&store), vec![second]);
    }
}
