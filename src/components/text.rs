//! Localized Text Component

use leptos::prelude::*;

use crate::context::use_site_context;

/// Text for `key` in the current language, updated on language change
#[component]
pub fn Tr(key: &'static str) -> impl IntoView {
    let ctx = use_site_context();
    move || ctx.t(key)
}
