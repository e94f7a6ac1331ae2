//! Frontend Models
//!
//! Data structures exchanged with the site backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// News article (matches `/api/news` records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewsItem {
    /// Image URL, treating an empty string as absent
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Body posted to `/api/contact`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Successful `/api/contact` acknowledgment
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw HTTP outcome of a contact submission
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResponse {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_news_item_from_backend_json() {
        let json = r#"{"id":7,"title":"Концерт","content":"Текст","image_url":"","created_at":"2024-09-01T10:00:00.5+06:00"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Концерт");
        assert_eq!(item.image(), None);
        let expected = Utc.with_ymd_and_hms(2024, 9, 1, 4, 0, 0).unwrap() + Duration::milliseconds(500);
        assert_eq!(item.created_at, expected);
    }

    #[test]
    fn test_news_item_missing_optional_fields() {
        let json = r#"{"id":1,"created_at":"2024-09-01T10:00:00Z"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert!(item.title.is_empty());
        assert!(item.content.is_empty());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_contact_reply_without_message() {
        let reply: ContactReply = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(reply.message.is_none());
    }
}
