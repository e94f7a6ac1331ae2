//! Notice Host Component
//!
//! Fixed-position success, error and validation notices.

use leptos::prelude::*;

use super::Tr;
use crate::contact::{validation_lines, Notice};
use crate::context::use_site_context;
use crate::store::SiteStateStoreFields;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let ctx = use_site_context();
    let store = ctx.store;

    view! {
        <div class="notice-host">
            <For
                each=move || store.notices().get()
                key=|posted| posted.id
                children=move |posted| match posted.notice {
                    Notice::Success(message) => view! {
                        <div class="notice notice-success">{message}</div>
                    }.into_any(),
                    Notice::Error(message) => view! {
                        <div class="notice notice-error">{message}</div>
                    }.into_any(),
                    Notice::Validation(errors) => view! {
                        <div class="notice notice-error notice-validation">
                            <strong><Tr key="contact.form.fixErrors" /></strong>
                            <ul>
                                {move || {
                                    validation_lines(&errors, ctx.lang())
                                        .into_iter()
                                        .map(|line| view! { <li>{line}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    }.into_any(),
                }
            />
        </div>
    }
}
