//! Language Persistence
//!
//! Remembers the selected language in `localStorage`.

use crate::i18n::Lang;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Interpret a stored value, falling back to `default` when missing or unknown
pub fn parse_saved(saved: Option<&str>, default: Lang) -> Lang {
    saved.and_then(Lang::from_code).unwrap_or(default)
}

pub fn load_language(key: &str, default: Lang) -> Lang {
    let saved = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
    parse_saved(saved.as_deref(), default)
}

pub fn save_language(key: &str, lang: Lang) {
    let Some(storage) = local_storage() else {
        log::warn!("[storage] localStorage unavailable, language not saved");
        return;
    };
    if let Err(e) = storage.set_item(key, lang.code()) {
        log::warn!("[storage] failed to save language: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved() {
        assert_eq!(parse_saved(Some("kz"), Lang::Ru), Lang::Kz);
        assert_eq!(parse_saved(Some("en"), Lang::Ru), Lang::En);
        assert_eq!(parse_saved(Some("fr"), Lang::Ru), Lang::Ru);
        assert_eq!(parse_saved(None, Lang::En), Lang::En);
    }
}
