//! Locale codes and URL prefixing.
//!
//! The default locale lives at the site root; every other locale gets a
//! `/<locale>` path segment in front of the page path.

pub const DEFAULT_LOCALE: &str = "en";

pub const SUPPORTED_LOCALES: [&str; 3] = ["en", "es", "fr"];

/// Path prefix for `locale`: empty for the default locale, `/<locale>`
/// otherwise
pub fn locale_prefix(locale: &str, default_locale: &str) -> String {
    if locale == default_locale {
        String::new()
    } else {
        format!("/{}", locale)
    }
}

/// Locale code expected by the CMS. English content is stored under
/// `en-US`, the other locales under their bare code.
pub fn cms_locale(locale: &str) -> String {
    match locale {
        "en" => "en-US".to_string(),
        other => other.to_string(),
    }
}

pub fn is_supported<S: AsRef<str>>(locale: &str, locales: &[S]) -> bool {
    locales.iter().any(|l| l.as_ref() == locale)
}

/// Split a site path into its locale and the locale-free remainder.
///
/// `"/fr/recipes/soup"` becomes `("fr", "/recipes/soup")`; a path without a
/// known locale segment belongs to the default locale. The remainder is
/// always `/`-rooted.
pub fn split_locale<S: AsRef<str>>(
    path: &str,
    locales: &[S],
    default_locale: &str,
) -> (String, String) {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, format!("/{}", rest)),
        None => (trimmed, "/".to_string()),
    };

    if first != default_locale && is_supported(first, locales) {
        return (first.to_string(), rest);
    }

    let rest = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    (default_locale.to_string(), rest)
}

/// Same page as `path`, moved under `target_locale`
pub fn localized_path<S: AsRef<str>>(
    path: &str,
    target_locale: &str,
    locales: &[S],
    default_locale: &str,
) -> String {
    let (_, rest) = split_locale(path, locales, default_locale);
    let prefix = locale_prefix(target_locale, default_locale);
    if prefix.is_empty() {
        return rest;
    }
    if rest == "/" {
        prefix
    } else {
        format!("{}{}", prefix, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_prefix() {
        assert_eq!(locale_prefix("en", "en"), "");
        assert_eq!(locale_prefix("fr", "en"), "/fr");
    }

    #[test]
    fn test_cms_locale() {
        assert_eq!(cms_locale("en"), "en-US");
        assert_eq!(cms_locale("es"), "es");
    }

    #[test]
    fn test_split_locale() {
        let locales = SUPPORTED_LOCALES;
        assert_eq!(
            split_locale("/fr/recipes/soup", &locales, "en"),
            ("fr".to_string(), "/recipes/soup".to_string())
        );
        assert_eq!(
            split_locale("/es", &locales, "en"),
            ("es".to_string(), "/".to_string())
        );
        assert_eq!(
            split_locale("/recipes", &locales, "en"),
            ("en".to_string(), "/recipes".to_string())
        );
        // the default locale has no prefix, so "/en/..." is an ordinary path
        assert_eq!(
            split_locale("/en/recipes", &locales, "en"),
            ("en".to_string(), "/en/recipes".to_string())
        );
        assert_eq!(
            split_locale("/de/recipes", &locales, "en"),
            ("en".to_string(), "/de/recipes".to_string())
        );
    }

    #[test]
    fn test_localized_path() {
        let locales = SUPPORTED_LOCALES;
        assert_eq!(localized_path("/recipes/soup", "fr", &locales, "en"), "/fr/recipes/soup");
        assert_eq!(localized_path("/fr/recipes/soup", "es", &locales, "en"), "/es/recipes/soup");
        assert_eq!(localized_path("/fr/recipes", "en", &locales, "en"), "/recipes");
        assert_eq!(localized_path("/", "es", &locales, "en"), "/es");
        assert_eq!(localized_path("/es", "en", &locales, "en"), "/");
    }
}
