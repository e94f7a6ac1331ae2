//! Site Configuration
//!
//! Endpoints, timings and limits used across the page.

use crate::i18n::Lang;

/// Site-wide settings, built once at startup and shared via context
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// News list endpoint (GET)
    pub news_endpoint: String,
    /// Contact form endpoint (POST)
    pub contact_endpoint: String,
    /// Carousel autoplay period
    pub autoplay_interval_ms: u32,
    /// News cards per carousel slide
    pub news_per_slide: usize,
    /// localStorage key for the selected language
    pub language_storage_key: String,
    /// Language used when nothing is stored
    pub default_language: Lang,
    /// How long notices stay on screen
    pub notice_duration_ms: u32,
    /// Scroll offset after which the header is compacted
    pub header_scroll_threshold_px: f64,
    /// How far above a section its nav link becomes active
    pub section_activation_margin_px: f64,
    /// Counter animation divisor (frames to reach the target)
    pub counter_speed: u32,
    /// Counter animation frame interval
    pub counter_tick_ms: u32,
    /// Max characters in a news card excerpt
    pub excerpt_chars: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_endpoint: "/api/news".to_string(),
            contact_endpoint: "/api/contact".to_string(),
            autoplay_interval_ms: 5000,
            news_per_slide: 3,
            language_storage_key: "language".to_string(),
            default_language: Lang::Ru,
            notice_duration_ms: 5000,
            header_scroll_threshold_px: 50.0,
            section_activation_margin_px: 150.0,
            counter_speed: 200,
            counter_tick_ms: 10,
            excerpt_chars: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.news_endpoint, "/api/news");
        assert_eq!(config.contact_endpoint, "/api/contact");
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.news_per_slide, 3);
        assert_eq!(config.language_storage_key, "language");
        assert_eq!(config.default_language, Lang::Ru);
    }
}
