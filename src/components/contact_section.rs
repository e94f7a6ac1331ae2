//! Contact Section Component
//!
//! School contacts and the validated question form posting to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Tr;
use crate::api;
use crate::contact::{ContactForm, Field, Notice};
use crate::context::use_site_context;
use crate::store::SiteStateStoreFields;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="contact.title" /></h2>
                <div class="contact-grid">
                    <div class="contact-info fade-in">
                        <h3><Tr key="contact.info.title" /></h3>
                        <p><Tr key="contact.info.text" /></p>
                        <ul class="contact-details">
                            <li><i class="fas fa-map-marker-alt"></i> <Tr key="contact.info.address" /></li>
                            <li><i class="fas fa-clock"></i> <Tr key="contact.info.hours" /></li>
                        </ul>
                        <h4><Tr key="contact.social.title" /></h4>
                        <p class="contact-license"><Tr key="contact.license" /></p>
                    </div>
                    <ContactFormPanel />
                </div>
            </div>
        </section>
    }
}

/// The question form
#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let ctx = use_site_context();
    let form = RwSignal::new(ContactForm::default());
    let (invalid, set_invalid) = signal(Vec::<Field>::new());
    let (sending, set_sending) = signal(false);

    let is_invalid = move |field: Field| invalid.get().contains(&field);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let current = form.get_untracked();

        let errors = current.validate();
        set_invalid.set(errors.iter().map(|e| e.field).collect());
        if !errors.is_empty() {
            ctx.notify(Notice::Validation(errors));
            return;
        }

        let lang = ctx.store.language().get_untracked();

        set_sending.set(true);
        let endpoint = ctx.config().contact_endpoint;
        spawn_local(async move {
            let result = api::submit_contact(&endpoint, &current.payload()).await;
            if let Some(notice) = form.try_update(|f| f.finish(result, lang)) {
                ctx.notify(notice);
            }
            set_sending.set(false);
        });
    };

    view! {
        <form id="main-contact-form" class="contact-form fade-in" on:submit=on_submit novalidate=true>
            <h3><Tr key="contact.form.title" /></h3>
            <input
                type="text"
                id="name"
                class:invalid=move || is_invalid(Field::Name)
                placeholder=move || ctx.t("contact.form.name")
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.name = value);
                }
            />
            <input
                type="email"
                id="email"
                class:invalid=move || is_invalid(Field::Email)
                placeholder=move || ctx.t("contact.form.email")
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.email = value);
                }
            />
            <input
                type="tel"
                id="phone"
                class:invalid=move || is_invalid(Field::Phone)
                placeholder=move || ctx.t("contact.form.phone")
                prop:value=move || form.with(|f| f.phone.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.phone = value);
                }
            />
            <textarea
                id="message"
                rows="5"
                class:invalid=move || is_invalid(Field::Message)
                placeholder=move || ctx.t("contact.form.message")
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.message = value);
                }
            ></textarea>
            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || {
                    if sending.get() {
                        ctx.t("contact.form.sending")
                    } else {
                        ctx.t("contact.form.submit")
                    }
                }}
            </button>
        </form>
    }
}
