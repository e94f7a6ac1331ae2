//! UI Components
//!
//! Page sections and reusable Leptos components.

mod about;
mod achievements;
mod contact_section;
mod footer;
mod hero;
mod language_switcher;
mod news_card;
mod news_carousel;
mod notice_host;
mod programs;
mod site_header;
mod stat_counter;
mod teachers;
mod text;

pub use about::About;
pub use achievements::Achievements;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use language_switcher::LanguageSwitcher;
pub use news_card::NewsCard;
pub use news_carousel::NewsSection;
pub use notice_host::NoticeHost;
pub use programs::Programs;
pub use site_header::SiteHeader;
pub use stat_counter::StatCounter;
pub use teachers::Teachers;
pub use text::Tr;
