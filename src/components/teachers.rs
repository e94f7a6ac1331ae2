//! Teachers Section

use leptos::prelude::*;

use super::Tr;

/// Translation keys of one teacher card
struct TeacherKeys {
    name: &'static str,
    position: &'static str,
    experience: &'static str,
    achievements: &'static str,
}

const TEACHERS: [TeacherKeys; 4] = [
    TeacherKeys {
        name: "teachers.t1.name",
        position: "teachers.t1.position",
        experience: "teachers.t1.experience",
        achievements: "teachers.t1.achievements",
    },
    TeacherKeys {
        name: "teachers.t2.name",
        position: "teachers.t2.position",
        experience: "teachers.t2.experience",
        achievements: "teachers.t2.achievements",
    },
    TeacherKeys {
        name: "teachers.t3.name",
        position: "teachers.t3.position",
        experience: "teachers.t3.experience",
        achievements: "teachers.t3.achievements",
    },
    TeacherKeys {
        name: "teachers.t4.name",
        position: "teachers.t4.position",
        experience: "teachers.t4.experience",
        achievements: "teachers.t4.achievements",
    },
];

#[component]
pub fn Teachers() -> impl IntoView {
    view! {
        <section id="teachers" class="teachers-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="teachers.title" /></h2>
                <p class="section-subtitle fade-in"><Tr key="teachers.subtitle" /></p>
                <div class="teachers-grid">
                    {TEACHERS.into_iter().map(|teacher| view! {
                        <div class="teacher-card fade-in">
                            <div class="teacher-avatar"><i class="fas fa-user-tie"></i></div>
                            <h3 class="teacher-name"><Tr key=teacher.name /></h3>
                            <p class="teacher-position"><Tr key=teacher.position /></p>
                            <p class="teacher-experience"><Tr key=teacher.experience /></p>
                            <p class="teacher-achievements"><Tr key=teacher.achievements /></p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
