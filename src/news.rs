//! News Feed
//!
//! Remote news with a static fallback list, plus card text helpers.

use chrono::{DateTime, Duration, Utc};

use crate::api::ApiError;
use crate::i18n::{t, Lang};
use crate::models::NewsItem;

/// Where the displayed news came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsOrigin {
    Remote,
    Fallback,
}

/// News ready for the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct NewsFeed {
    pub items: Vec<NewsItem>,
    pub origin: NewsOrigin,
}

/// Pick the remote list when it loaded and is non-empty, else the fallback list.
///
/// Errors are only logged; readers always get news.
pub fn resolve_feed(fetched: Result<Vec<NewsItem>, ApiError>, now: DateTime<Utc>) -> NewsFeed {
    match fetched {
        Ok(items) if !items.is_empty() => {
            log::info!("[news] loaded {} articles", items.len());
            NewsFeed { items, origin: NewsOrigin::Remote }
        }
        Ok(_) => {
            log::info!("[news] remote list is empty, using static news");
            NewsFeed { items: fallback_news(now), origin: NewsOrigin::Fallback }
        }
        Err(e) => {
            log::warn!("[news] error loading news: {}", e);
            NewsFeed { items: fallback_news(now), origin: NewsOrigin::Fallback }
        }
    }
}

const FALLBACK: [(&str, &str, &str); 6] = [
    (
        "Открытие нового учебного года",
        "Начальная школа Академия с радостью открывает двери для новых и вернувшихся учеников. Мы готовы к новому учебному году с обновленными программами и свежими идеями.",
        "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?q=80&w=2073&auto=format&fit=crop",
    ),
    (
        "Победа в городской олимпиаде",
        "Наш ученик Скорняков Всеволод занял 2 место на городской олимпиаде по математике. Поздравляем с выдающимся достижением!",
        "https://images.unsplash.com/photo-1567427017947-545c5f8d16ad?q=80&w=2053&auto=format&fit=crop",
    ),
    (
        "День открытых дверей",
        "Приглашаем родителей и будущих учеников познакомиться с нашей школой, встретиться с педагогами и узнать о наших образовательных программах.",
        "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?q=80&w=2022&auto=format&fit=crop",
    ),
    (
        "Занятия по робототехнике",
        "В школе стартовали занятия по робототехнике для учеников всех классов. Дети с энтузиазмом осваивают новые технологии.",
        "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?q=80&w=2070&auto=format&fit=crop",
    ),
    (
        "Шахматный турнир",
        "Состоялся школьный шахматный турнир, в котором приняли участие ученики всех классов. Победители получили дипломы и призы.",
        "https://images.unsplash.com/photo-1529699211952-734e80c4d42b?q=80&w=2071&auto=format&fit=crop",
    ),
    (
        "Концерт ко Дню учителя",
        "Ученики подготовили праздничный концерт для наших любимых учителей. Спасибо за ваш труд и преданность!",
        "https://images.unsplash.com/photo-1511578314322-379afb476865?q=80&w=2069&auto=format&fit=crop",
    ),
];

/// Static news, one per day going back from `now`
pub fn fallback_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    FALLBACK
        .iter()
        .enumerate()
        .map(|(i, (title, content, image))| NewsItem {
            id: i as i64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now - Duration::days(i as i64),
            image_url: Some(image.to_string()),
        })
        .collect()
}

/// Card excerpt: at most `max_chars` characters, then "..."
pub fn excerpt(content: &str, max_chars: usize, lang: Lang) -> String {
    if content.is_empty() {
        return t(lang, "news.readMore").to_string();
    }
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn display_title(item: &NewsItem, lang: Lang) -> String {
    if item.title.trim().is_empty() {
        t(lang, "news.untitled").to_string()
    } else {
        item.title.clone()
    }
}

/// Link to the full article page
pub fn article_href(item: &NewsItem) -> String {
    format!("news_article.html?id={}", item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn remote(n: i64) -> Vec<NewsItem> {
        (1..=n)
            .map(|id| NewsItem {
                id,
                title: format!("News {}", id),
                content: String::new(),
                created_at: now(),
                image_url: None,
            })
            .collect()
    }

    #[test]
    fn test_failed_fetch_uses_fallback() {
        let feed = resolve_feed(Err(ApiError::Status(503)), now());
        assert_eq!(feed.origin, NewsOrigin::Fallback);
        assert_eq!(feed.items.len(), 6);
    }

    #[test]
    fn test_empty_fetch_uses_fallback() {
        let feed = resolve_feed(Ok(Vec::new()), now());
        assert_eq!(feed.origin, NewsOrigin::Fallback);
        assert_eq!(feed.items.len(), 6);
    }

    #[test]
    fn test_remote_news_used_as_is() {
        let feed = resolve_feed(Ok(remote(4)), now());
        assert_eq!(feed.origin, NewsOrigin::Remote);
        assert_eq!(feed.items, remote(4));
    }

    #[test]
    fn test_fallback_dates_go_back_one_day_each() {
        let items = fallback_news(now());
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(items[0].created_at, now());
        assert_eq!(items[5].created_at, now() - Duration::days(5));
        assert!(items.iter().all(|i| i.image().is_some()));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = "ж".repeat(150);
        let short = excerpt(&content, 100, Lang::Ru);
        assert_eq!(short.chars().count(), 103);
        assert!(short.ends_with("..."));
        assert_eq!(excerpt("Коротко", 100, Lang::Ru), "Коротко");
        assert_eq!(excerpt(&"a".repeat(100), 100, Lang::En), "a".repeat(100));
    }

    #[test]
    fn test_empty_texts_are_localized() {
        assert_eq!(excerpt("", 100, Lang::En), "Read more...");
        let mut item = remote(1).remove(0);
        item.title = "  ".to_string();
        assert_eq!(display_title(&item, Lang::Ru), "Без заголовка");
        assert_eq!(article_href(&item), "news_article.html?id=1");
    }
}
