//! About Section
//!
//! Mission, values and animated school statistics.

use leptos::prelude::*;

use super::{StatCounter, Tr};

const VALUES: [&str; 5] = [
    "about.values.v1",
    "about.values.v2",
    "about.values.v3",
    "about.values.v4",
    "about.values.v5",
];

/// (target, label key)
const STATS: [(u32, &str); 4] = [
    (4, "about.stat1"),
    (120, "about.stat2"),
    (12, "about.stat3"),
    (15, "about.stat4"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="about.title" /></h2>
                <div class="about-grid">
                    <div class="about-text fade-in">
                        <p class="about-mission"><Tr key="about.mission" /></p>
                        <h3><Tr key="about.values.title" /></h3>
                        <ul class="values-list">
                            {VALUES.into_iter().map(|key| view! {
                                <li><i class="fas fa-check-circle"></i> <Tr key=key /></li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="stats-grid fade-in">
                        {STATS.into_iter().map(|(target, label_key)| view! {
                            <StatCounter target=target label_key=label_key />
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
