//! Footer Component

use leptos::prelude::*;
use leptos_scroll_fx::make_on_anchor_click;

use super::{site_header::NAV_LINKS, Tr};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <h3><Tr key="hero.title" /></h3>
                    <p><Tr key="footer.description" /></p>
                    <p class="footer-founded"><Tr key="footer.founded" /></p>
                </div>
                <div class="footer-links">
                    <h4><Tr key="footer.links.title" /></h4>
                    <ul>
                        {NAV_LINKS.iter().map(|&(href, key)| view! {
                            <li><a href=href on:click=make_on_anchor_click(href)><Tr key=key /></a></li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="footer-social">
                    <h4><Tr key="footer.social.title" /></h4>
                    <div class="social-links">
                        <a href="https://www.instagram.com/" target="_blank" rel="noopener"><i class="fab fa-instagram"></i></a>
                        <a href="https://wa.me/" target="_blank" rel="noopener"><i class="fab fa-whatsapp"></i></a>
                        <a href="https://t.me/" target="_blank" rel="noopener"><i class="fab fa-telegram"></i></a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p><Tr key="footer.copy" /></p>
            </div>
        </footer>
    }
}
