//! News Card Component

use chrono::Local;
use leptos::prelude::*;

use crate::context::use_site_context;
use crate::i18n::format_date;
use crate::models::NewsItem;
use crate::news::{article_href, display_title, excerpt};

/// Card linking to the full article
#[component]
pub fn NewsCard(item: NewsItem) -> impl IntoView {
    let ctx = use_site_context();
    let excerpt_chars = ctx.config().excerpt_chars;
    let href = article_href(&item);
    let image = item.image().map(str::to_string);
    let date = item.created_at.with_timezone(&Local).date_naive();
    let content = item.content.clone();

    let title = move || display_title(&item, ctx.lang());

    view! {
        <a class="news-card" href=href>
            {match image {
                Some(src) => view! {
                    <img src=src alt=title.clone() class="news-card-image" loading="lazy" />
                }.into_any(),
                None => view! {
                    <div class="news-card-image news-card-image-placeholder">
                        <i class="fas fa-newspaper"></i>
                    </div>
                }.into_any(),
            }}
            <div class="news-card-content">
                <h3 class="news-card-title">{title}</h3>
                <p class="news-card-excerpt">{move || excerpt(&content, excerpt_chars, ctx.lang())}</p>
                <div class="news-card-date">{move || format_date(ctx.lang(), date)}</div>
            </div>
        </a>
    }
}
