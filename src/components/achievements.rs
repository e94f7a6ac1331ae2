//! Achievements Section

use leptos::prelude::*;

use super::Tr;

/// (icon, title key, text key)
const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("fas fa-trophy", "achievements.math.title", "achievements.math.text"),
    ("fas fa-feather-alt", "achievements.abay.title", "achievements.abay.text"),
    ("fas fa-star", "achievements.akbota.title", "achievements.akbota.text"),
    ("fas fa-medal", "achievements.kangaroo.title", "achievements.kangaroo.text"),
];

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="achievements-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="achievements.title" /></h2>
                <p class="section-subtitle fade-in"><Tr key="achievements.subtitle" /></p>
                <div class="achievements-grid">
                    {ACHIEVEMENTS.into_iter().map(|(icon, title, text)| view! {
                        <div class="achievement-card fade-in">
                            <div class="achievement-icon"><i class=icon></i></div>
                            <h3><Tr key=title /></h3>
                            <p><Tr key=text /></p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
