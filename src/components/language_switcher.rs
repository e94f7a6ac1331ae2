//! Language Switcher Component
//!
//! Dropdown of page languages; closes on selection or on any outside click.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_site_context;
use crate::i18n::Lang;
use crate::store::SiteStateStoreFields;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_site_context();
    let store = ctx.store;

    // Outside clicks close the dropdown
    let handle = window_event_listener(leptos::ev::click, move |ev: web_sys::MouseEvent| {
        if !store.lang_menu_open().get_untracked() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".language-switcher").ok().flatten())
            .is_some();
        if !inside {
            store.lang_menu_open().set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="language-switcher" class:active=move || store.lang_menu_open().get()>
            <button
                type="button"
                class="lang-button"
                on:click=move |_| store.lang_menu_open().update(|open| *open = !*open)
            >
                <i class="fas fa-globe"></i>
                <span class="current-lang">{move || ctx.lang().label()}</span>
                <i class="fas fa-chevron-down"></i>
            </button>
            <div class="lang-dropdown">
                {Lang::ALL.into_iter().map(|lang| view! {
                    <a
                        href="#"
                        class="lang-option"
                        class:selected=move || ctx.lang() == lang
                        data-lang=lang.code()
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            ctx.set_language(lang);
                        }
                    >
                        {move || ctx.t(lang.name_key())}
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
