use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::enums::change_frequency::ChangeFrequency;
use crate::shared::locale::locale_prefix;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const STATIC_PRIORITY: f32 = 0.7;
const RECIPE_PRIORITY: f32 = 0.8;

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub locale: String,
    /// Site path including the locale prefix
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    pub fn loc(&self, site_url: &str) -> String {
        format!("{}{}", site_url, self.path)
    }
}

/// Entries for every (static path, locale) followed by every (slug, locale).
///
/// The first locale is the default one and gets no path prefix. Empty
/// slugs are skipped so no entry ends in a bare `/recipes/`.
pub fn sitemap_entries<P, R, L>(static_paths: &[P], recipe_slugs: &[R], locales: &[L]) -> Vec<SitemapEntry>
where
    P: AsRef<str>,
    R: AsRef<str>,
    L: AsRef<str>,
{
    let Some(default_locale) = locales.first().map(AsRef::as_ref) else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity((static_paths.len() + recipe_slugs.len()) * locales.len());

    for page in static_paths {
        for locale in locales {
            let locale = locale.as_ref();
            entries.push(SitemapEntry {
                locale: locale.to_string(),
                path: format!("{}{}", locale_prefix(locale, default_locale), page.as_ref()),
                change_frequency: ChangeFrequency::Daily,
                priority: STATIC_PRIORITY,
            });
        }
    }

    for slug in recipe_slugs.iter().map(AsRef::as_ref).filter(|s| !s.is_empty()) {
        for locale in locales {
            let locale = locale.as_ref();
            entries.push(SitemapEntry {
                locale: locale.to_string(),
                path: format!("{}/recipes/{}", locale_prefix(locale, default_locale), slug),
                change_frequency: ChangeFrequency::Weekly,
                priority: RECIPE_PRIORITY,
            });
        }
    }

    entries
}

/// Render the sitemap XML document
pub fn build_sitemap<P, R, L>(
    static_paths: &[P],
    recipe_slugs: &[R],
    locales: &[L],
    site_url: &str,
) -> String
where
    P: AsRef<str>,
    R: AsRef<str>,
    L: AsRef<str>,
{
    let entries = sitemap_entries(static_paths, recipe_slugs, locales);
    render(&entries, site_url)
}

/// Serialize already computed entries
pub fn render(entries: &[SitemapEntry], site_url: &str) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.loc(site_url))));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_frequency));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn locs(xml: &str) -> Vec<String> {
        xml.lines()
            .filter_map(|l| {
                let l = l.trim();
                l.strip_prefix("<loc>")
                    .and_then(|rest| rest.strip_suffix("</loc>"))
                    .map(str::to_string)
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_valid_document() {
        let xml = build_sitemap(&NONE, &NONE, &["en"], "http://x");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(&format!("<urlset xmlns=\"{}\">", SITEMAP_NAMESPACE)));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 0);
    }

    #[test]
    fn test_cross_product_order_and_prefixes() {
        let xml = build_sitemap(&["/"], &["soup"], &["en", "fr"], "http://x");
        assert_eq!(
            locs(&xml),
            vec![
                "http://x/",
                "http://x/fr/",
                "http://x/recipes/soup",
                "http://x/fr/recipes/soup",
            ]
        );
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[test]
    fn test_frequencies_and_priorities() {
        let entries = sitemap_entries(&["", "/recipes"], &["soup"], &["en", "es", "fr"]);
        assert_eq!(entries.len(), 9);

        let (pages, recipes) = entries.split_at(6);
        assert!(pages
            .iter()
            .all(|e| e.change_frequency == ChangeFrequency::Daily && e.priority == 0.7));
        assert!(recipes
            .iter()
            .all(|e| e.change_frequency == ChangeFrequency::Weekly && e.priority == 0.8));

        let xml = render(&entries, "http://localhost:3000");
        assert!(xml.contains("<changefreq>daily</changefreq>\n    <priority>0.7</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>\n    <priority>0.8</priority>"));
        assert_eq!(locs(&xml)[0], "http://localhost:3000");
        assert_eq!(locs(&xml)[1], "http://localhost:3000/es");
        assert_eq!(locs(&xml)[3], "http://localhost:3000/recipes");
    }

    #[test]
    fn test_static_paths_outer_locales_inner() {
        let entries = sitemap_entries(&["/a", "/b"], &NONE, &["en", "fr"]);
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/fr/a", "/b", "/fr/b"]);
    }

    #[test]
    fn test_empty_slugs_and_locales() {
        assert!(sitemap_entries(&["/"], &["soup"], &NONE).is_empty());
        let entries = sitemap_entries(&NONE, &["", "stew"], &["en"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/recipes/stew");
    }

    #[test]
    fn test_loc_is_escaped() {
        let xml = build_sitemap(&NONE, &["mac&cheese"], &["en"], "http://x");
        assert!(xml.contains("<loc>http://x/recipes/mac&amp;cheese</loc>"));
    }

    #[test]
    fn test_loc_escapes_markup_and_quotes() {
        let xml = build_sitemap(&NONE, &["<b>\"mom's\""], &["en"], "http://x");
        assert!(xml.contains("<loc>http://x/recipes/&lt;b&gt;&quot;mom&apos;s&quot;</loc>"));
    }
}
