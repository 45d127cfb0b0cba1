// Fluent-based localization with embedded resources. English is the fallback;
// the current language comes from settings or the system locale.

use std::cell::RefCell;
use std::collections::HashMap;

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const FALLBACK: SupportedLang = SupportedLang::English;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum SupportedLang {
    #[default]
    #[serde(rename = "en")]
    #[strum(to_string = "English")]
    English,
    #[serde(rename = "ru")]
    #[strum(to_string = "Русский")]
    Russian,
}

impl SupportedLang {
    pub fn code(self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Russian => "ru",
        }
    }

    fn ftl_source(self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Russian => include_str!("resources/ru.ftl"),
        }
    }

    fn from_locale(code: &str) -> Option<Self> {
        let mut code = code.to_ascii_lowercase();
        if let Some(sep) = code.find(['-', '_']) {
            code.truncate(sep);
        }
        match code.as_str() {
            "en" => Some(SupportedLang::English),
            "ru" => Some(SupportedLang::Russian),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("failed to parse embedded FTL for {0}")]
    BadResource(&'static str),
}

struct Manager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl Manager {
    fn new() -> Result<Self, LocalizationError> {
        let mut bundles = HashMap::new();
        for lang in [SupportedLang::English, SupportedLang::Russian] {
            let langid: LanguageIdentifier = lang
                .code()
                .parse()
                .map_err(|_| LocalizationError::BadResource(lang.code()))?;
            let mut bundle: Bundle = FluentBundle::new(vec![langid]);
            let res = FluentResource::try_new(lang.ftl_source().to_string())
                .map_err(|_| LocalizationError::BadResource(lang.code()))?;
            bundle
                .add_resource(res)
                .map_err(|_| LocalizationError::BadResource(lang.code()))?;
            bundles.insert(lang, bundle);
        }
        Ok(Self {
            current: FALLBACK,
            bundles,
        })
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for lang in [self.current, FALLBACK] {
            if let Some(bundle) = self.bundles.get(&lang) {
                if let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) {
                    let mut errors = vec![];
                    return bundle.format_pattern(pattern, args, &mut errors).to_string();
                }
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<Option<Manager>> = const { RefCell::new(None) };
}

fn with_manager<R>(f: impl FnOnce(&mut Manager) -> R) -> Result<R, LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(Manager::new()?);
        }
        Ok(f(slot.as_mut().unwrap()))
    })
}

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .as_deref()
        .and_then(SupportedLang::from_locale)
        .unwrap_or(FALLBACK)
}

/// Initialize with an explicit language, or the system locale when `None`.
pub fn initialize(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    with_manager(|m| m.current = lang)
}

/// Switch language at runtime; `None` re-detects from the system locale.
pub fn set_language(preferred: Option<SupportedLang>) {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    if let Err(e) = with_manager(|m| m.current = lang) {
        log::error!("localization switch failed: {e}");
    }
}

/// Translate a message id without arguments.
pub fn translate(id: &str) -> String {
    with_manager(|m| m.format(id, None)).unwrap_or_else(|_| format!("[missing: {}]", id))
}

/// Translate a message id with (&str, String) argument pairs.
pub fn translate_with(id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    with_manager(|m| m.format(id, Some(&fargs))).unwrap_or_else(|_| format!("[missing: {}]", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_map_to_supported_langs() {
        assert_eq!(SupportedLang::from_locale("en-US"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_locale("ru_RU"), Some(SupportedLang::Russian));
        assert_eq!(SupportedLang::from_locale("RU"), Some(SupportedLang::Russian));
        assert_eq!(SupportedLang::from_locale("de-DE"), None);
    }

    #[test]
    fn english_resource_resolves_known_ids() {
        set_language(Some(SupportedLang::English));
        assert_eq!(translate("app-window-title"), "Portfolio Projects");
        assert!(!translate("card-live-link").starts_with("[missing"));
    }

    #[test]
    fn unknown_id_is_marked_missing() {
        set_language(Some(SupportedLang::English));
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }

    #[test]
    fn russian_falls_back_to_english_for_absent_ids() {
        set_language(Some(SupportedLang::Russian));
        // Every id present in en.ftl must resolve even if ru.ftl misses it.
        assert!(!translate("app-window-title").starts_with("[missing"));
        set_language(Some(SupportedLang::English));
    }
}
