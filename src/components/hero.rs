//! Hero Section

use leptos::prelude::*;
use leptos_scroll_fx::make_on_anchor_click;

use super::Tr;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-content fade-in">
                <h1 class="hero-title"><Tr key="hero.title" /></h1>
                <p class="hero-subtitle"><Tr key="hero.subtitle" /></p>
                <div class="hero-buttons">
                    <a href="#programs" class="btn btn-primary" on:click=make_on_anchor_click("#programs")>
                        <Tr key="hero.btnPrograms" />
                    </a>
                    <a href="#about" class="btn btn-secondary" on:click=make_on_anchor_click("#about")>
                        <Tr key="hero.btnAbout" />
                    </a>
                </div>
            </div>
        </section>
    }
}
