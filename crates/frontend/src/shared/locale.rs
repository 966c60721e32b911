use contracts::domain::a001_recipe::dto::LocalesResponse;
use contracts::shared::locale::{
    locale_prefix, localized_path, split_locale, DEFAULT_LOCALE, SUPPORTED_LOCALES,
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::domain::a001_recipe::api;

/// Locales the site serves, as reported by `/api/locales`.
///
/// Until the server answers the built-in list is used, so links render on
/// the first frame and get corrected once the response lands.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locales: SUPPORTED_LOCALES.iter().map(|l| l.to_string()).collect(),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl From<LocalesResponse> for LocaleSettings {
    fn from(response: LocalesResponse) -> Self {
        if response.locales.is_empty() {
            return Self::default();
        }
        Self {
            locales: response.locales,
            default_locale: response.default_locale,
        }
    }
}

impl LocaleSettings {
    /// Locale of a site path; paths without a known prefix are default-locale
    pub fn locale_of(&self, path: &str) -> String {
        split_locale(path, &self.locales, &self.default_locale).0
    }

    /// `path` (locale-free, `/`-rooted) under the given locale
    pub fn href(&self, locale: &str, path: &str) -> String {
        let prefix = locale_prefix(locale, &self.default_locale);
        match (prefix.is_empty(), path) {
            (true, _) => path.to_string(),
            (false, "/") => prefix,
            (false, _) => format!("{}{}", prefix, path),
        }
    }

    /// Current page moved to `target`
    pub fn switch_href(&self, current_path: &str, target: &str) -> String {
        localized_path(current_path, target, &self.locales, &self.default_locale)
    }
}

/// Provide the locale settings context and load it from the server once
pub fn provide_locale_settings() {
    let settings = RwSignal::new(LocaleSettings::default());
    provide_context(settings);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_locales().await {
            Ok(response) => settings.set(response.into()),
            Err(e) => log::warn!("Failed to load locales, keeping built-in list: {}", e),
        }
    });
}

pub fn use_locale_settings() -> RwSignal<LocaleSettings> {
    use_context::<RwSignal<LocaleSettings>>()
        .unwrap_or_else(|| RwSignal::new(LocaleSettings::default()))
}

/// Active locale, read from the first path segment
pub fn use_locale() -> Memo<String> {
    let pathname = use_location().pathname;
    let settings = use_locale_settings();
    Memo::new(move |_| {
        let path = pathname.get();
        settings.with(|s| s.locale_of(&path))
    })
}
