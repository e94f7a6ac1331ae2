//! Akademia Site App
//!
//! Root component: builds the page state and lays out all sections.

use leptos::prelude::*;
use leptos_scroll_fx::VisibilityObserver;
use reactive_stores::Store;

use crate::components::{
    About, Achievements, ContactSection, Footer, Hero, NewsSection, NoticeHost, Programs, SiteHeader, Teachers,
};
use crate::config::SiteConfig;
use crate::context::{apply_document_language, SiteContext};
use crate::storage;
use crate::store::SiteState;

/// Visible fraction that reveals a `.fade-in` block
const REVEAL_THRESHOLD: f64 = 0.1;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::default();
    let language = storage::load_language(&config.language_storage_key, config.default_language);
    log::info!("[APP] starting with language {}", language.code());

    // Provide state to all children
    let store = Store::new(SiteState::new(language));
    provide_context(SiteContext::new(store, config));
    apply_document_language(language);

    // Reveal-on-scroll once the sections are in the DOM
    let reveal = StoredValue::new_local(None::<VisibilityObserver>);
    Effect::new(move |_| {
        if reveal.with_value(Option::is_some) {
            return;
        }
        match VisibilityObserver::observe_selector(".fade-in", REVEAL_THRESHOLD, "visible") {
            Ok(observer) => reveal.set_value(Some(observer)),
            Err(e) => log::warn!("[APP] scroll animations disabled: {:?}", e),
        }
    });
    on_cleanup(move || {
        let _ = reveal.try_update_value(|observer| observer.take());
    });

    view! {
        <SiteHeader />
        <main>
            <Hero />
            <About />
            <Programs />
            <Achievements />
            <Teachers />
            <NewsSection />
            <ContactSection />
        </main>
        <Footer />
        <NoticeHost />
    }
}
