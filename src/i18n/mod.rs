//! Page Texts
//!
//! Static translation tables for Russian, Kazakh and English.

mod en;
mod kz;
mod ru;

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported page languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Ru,
    Kz,
    En,
}

impl Lang {
    /// Languages in switcher order
    pub const ALL: [Lang; 3] = [Lang::Ru, Lang::Kz, Lang::En];

    /// Code used for storage and the `<html lang>` attribute
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Kz => "kz",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Some(Lang::Ru),
            "kz" | "kk" | "kk-kz" => Some(Lang::Kz),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Short label shown on the switcher button
    pub fn label(self) -> &'static str {
        match self {
            Lang::Ru => "РУС",
            Lang::Kz => "ҚАЗ",
            Lang::En => "ENG",
        }
    }

    /// Translation key of the language's own name
    pub fn name_key(self) -> &'static str {
        match self {
            Lang::Ru => "lang.ru",
            Lang::Kz => "lang.kz",
            Lang::En => "lang.en",
        }
    }

    fn texts(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::Ru => ru::TEXTS,
            Lang::Kz => kz::TEXTS,
            Lang::En => en::TEXTS,
        }
    }
}

type TextMap = HashMap<&'static str, &'static str>;

static RU_MAP: OnceLock<TextMap> = OnceLock::new();
static KZ_MAP: OnceLock<TextMap> = OnceLock::new();
static EN_MAP: OnceLock<TextMap> = OnceLock::new();

fn table(lang: Lang) -> &'static TextMap {
    let cell = match lang {
        Lang::Ru => &RU_MAP,
        Lang::Kz => &KZ_MAP,
        Lang::En => &EN_MAP,
    };
    cell.get_or_init(|| lang.texts().iter().copied().collect())
}

/// Translate `key`.
///
/// Missing keys fall back to Russian, then to the key itself.
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    table(lang)
        .get(key)
        .or_else(|| table(Lang::Ru).get(key))
        .copied()
        .unwrap_or(key)
}

const RU_MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

const KZ_MONTHS: [&str; 12] = [
    "қаңтар", "ақпан", "наурыз", "сәуір", "мамыр", "маусым",
    "шілде", "тамыз", "қыркүйек", "қазан", "қараша", "желтоқсан",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Long-form date, e.g. "19 октября 2026 г."
pub fn format_date(lang: Lang, date: NaiveDate) -> String {
    let month = date.month0() as usize;
    match lang {
        Lang::Ru => format!("{} {} {} г.", date.day(), RU_MONTHS[month], date.year()),
        Lang::Kz => format!("{} ж. {} {}", date.year(), date.day(), KZ_MONTHS[month]),
        Lang::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys(lang: Lang) -> HashSet<&'static str> {
        lang.texts().iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_all_languages_share_keys() {
        let ru = keys(Lang::Ru);
        assert_eq!(keys(Lang::Kz), ru);
        assert_eq!(keys(Lang::En), ru);
    }

    #[test]
    fn test_no_duplicate_keys() {
        for lang in Lang::ALL {
            assert_eq!(keys(lang).len(), lang.texts().len(), "{:?}", lang);
        }
    }

    #[test]
    fn test_translate() {
        assert_eq!(t(Lang::Ru, "nav.news"), "Новости");
        assert_eq!(t(Lang::Kz, "nav.news"), "Жаңалықтар");
        assert_eq!(t(Lang::En, "nav.news"), "News");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Lang::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_lang_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("KK"), Some(Lang::Kz));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::Kz.label(), "ҚАЗ");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_date(Lang::Ru, date), "19 октября 2026 г.");
        assert_eq!(format_date(Lang::Kz, date), "2026 ж. 19 қазан");
        assert_eq!(format_date(Lang::En, date), "October 19, 2026");
    }
}
