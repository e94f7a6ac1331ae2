//! Programs Section

use leptos::prelude::*;

use super::Tr;

/// (icon, title key, text key)
const PROGRAMS: [(&str, &str, &str); 3] = [
    ("fas fa-calculator", "programs.card1.title", "programs.card1.text"),
    ("fas fa-brain", "programs.card2.title", "programs.card2.text"),
    ("fas fa-book-open", "programs.card3.title", "programs.card3.text"),
];

/// (icon, label key)
const ACTIVITIES: [(&str, &str); 6] = [
    ("fas fa-chess", "programs.activities.chess"),
    ("fas fa-robot", "programs.activities.robotics"),
    ("fas fa-music", "programs.activities.vocal"),
    ("fas fa-child", "programs.activities.dance"),
    ("fas fa-abacus", "programs.activities.mental"),
    ("fas fa-theater-masks", "programs.activities.acting"),
];

#[component]
pub fn Programs() -> impl IntoView {
    view! {
        <section id="programs" class="programs-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="programs.title" /></h2>
                <p class="section-subtitle fade-in"><Tr key="programs.subtitle" /></p>
                <div class="programs-grid">
                    {PROGRAMS.into_iter().map(|(icon, title, text)| view! {
                        <div class="program-card fade-in">
                            <div class="program-icon"><i class=icon></i></div>
                            <h3><Tr key=title /></h3>
                            <p><Tr key=text /></p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="activities fade-in">
                    <h3><Tr key="programs.activities.title" /></h3>
                    <div class="activities-grid">
                        {ACTIVITIES.into_iter().map(|(icon, key)| view! {
                            <div class="activity-item">
                                <i class=icon></i>
                                <span><Tr key=key /></span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
