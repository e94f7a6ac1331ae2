//! Site Header Component
//!
//! Fixed navigation bar with scroll state, active section highlighting,
//! mobile menu and language switcher.

use leptos::prelude::*;
use leptos_scroll_fx::{active_section, is_scrolled, make_on_anchor_click, section_offsets, use_scroll_y};

use super::{LanguageSwitcher, Tr};
use crate::context::use_site_context;
use crate::store::SiteStateStoreFields;

/// Navigation targets and their label keys
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "nav.about"),
    ("#programs", "nav.programs"),
    ("#achievements", "nav.achievements"),
    ("#teachers", "nav.teachers"),
    ("#news", "nav.news"),
    ("#contact", "nav.contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_site_context();
    let store = ctx.store;
    let config = ctx.config();
    let threshold = config.header_scroll_threshold_px;
    let margin = config.section_activation_margin_px;

    let scroll_y = use_scroll_y();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get(), threshold));

    // Section offsets are re-read on every scroll since late images shift layout
    Effect::new(move |_| {
        let y = scroll_y.get();
        let sections = section_offsets("section[id]");
        let active = active_section(&sections, y, margin).map(str::to_string);
        if store.active_section().get_untracked() != active {
            store.active_section().set(active);
        }
    });

    let toggle_menu = move |_| store.nav_menu_open().update(|open| *open = !*open);

    view! {
        <header id="main-header" class="site-header" class:scrolled=move || scrolled.get()>
            <div class="container header-inner">
                <a href="#" class="logo">
                    <i class="fas fa-graduation-cap"></i>
                    <span><Tr key="hero.title" /></span>
                </a>

                <nav class="nav-menu" class:active=move || store.nav_menu_open().get()>
                    {NAV_LINKS.iter().map(|&(href, key)| {
                        let on_anchor = make_on_anchor_click(href);
                        let is_active = move || {
                            store.active_section().get().as_deref() == Some(&href[1..])
                        };
                        view! {
                            <a
                                href=href
                                class="nav-link"
                                class:active=is_active
                                on:click=move |ev| {
                                    on_anchor(ev);
                                    store.nav_menu_open().set(false);
                                }
                            >
                                <Tr key=key />
                            </a>
                        }
                    }).collect_view()}
                    <a href="#contact" class="btn btn-primary nav-cta" on:click=make_on_anchor_click("#contact")>
                        <Tr key="nav.apply" />
                    </a>
                </nav>

                <LanguageSwitcher />

                <button type="button" class="mobile-menu-toggle" on:click=toggle_menu>
                    <i class=move || if store.nav_menu_open().get() { "fas fa-times" } else { "fas fa-bars" }></i>
                </button>
            </div>
        </header>
    }
}
