use anyhow::Context;
use contracts::shared::sitemap::builder::render as render_xml;
use contracts::shared::sitemap::{extract_slugs, sitemap_entries};
use contracts::usecases::u501_generate_sitemap::response::SitemapReport;
use std::path::Path;

use crate::domain::a001_recipe::source::RecipeSource;
use crate::shared::config::SiteConfig;

/// Build the sitemap XML for the configured pages and every recipe slug the
/// CMS knows about.
///
/// A failed recipe fetch is logged and leaves only the static pages in the
/// document; it is never an error.
pub async fn render(source: &dyn RecipeSource, site: &SiteConfig) -> (String, SitemapReport) {
    let (slugs, recipe_fetch_failed) = match source.raw_recipe_entries().await {
        Ok(raw) => (extract_slugs(&raw), false),
        Err(e) => {
            tracing::error!("Error fetching recipes for sitemap: {}", e);
            (Vec::new(), true)
        }
    };

    let entries = sitemap_entries(&site.static_pages, &slugs, &site.locales);
    let static_entries = site.static_pages.len() * site.locales.len();
    let report = SitemapReport {
        static_entries,
        recipe_entries: entries.len() - static_entries,
        recipe_fetch_failed,
        output_path: None,
    };

    (render_xml(&entries, &site.url), report)
}

/// Render the sitemap and write it to `output_path`, creating parent
/// directories as needed
pub async fn execute(
    source: &dyn RecipeSource,
    site: &SiteConfig,
    output_path: &Path,
) -> anyhow::Result<SitemapReport> {
    tracing::info!("Generating sitemap...");
    let (xml, mut report) = render(source, site).await;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Cannot create directory {}", parent.display()))?;
    }
    tokio::fs::write(output_path, xml)
        .await
        .with_context(|| format!("Cannot write {}", output_path.display()))?;

    report.output_path = Some(output_path.display().to_string());
    tracing::info!(
        "sitemap.xml generated in {} ({} urls, {} recipe urls)",
        output_path.display(),
        report.total_entries(),
        report.recipe_entries
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_recipe::fixtures::{sample_recipes, InMemorySource};

    fn site() -> SiteConfig {
        SiteConfig {
            url: "http://localhost:3000".to_string(),
            locales: vec!["en".to_string(), "es".to_string(), "fr".to_string()],
            static_pages: vec![String::new(), "/recipes".to_string()],
        }
    }

    #[tokio::test]
    async fn test_render_includes_every_slug_per_locale() {
        let source = InMemorySource::new(sample_recipes());
        let (xml, report) = render(&source, &site()).await;

        assert_eq!(report.static_entries, 6);
        assert_eq!(report.recipe_entries, 12);
        assert!(!report.recipe_fetch_failed);
        assert_eq!(xml.matches("<url>").count(), 18);
        assert!(xml.contains("<loc>http://localhost:3000/es/recipes/beef-stew</loc>"));
        // the draft entry without a slug is skipped
        assert!(!xml.contains("/recipes/</loc>"));
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_static_pages() {
        let source = InMemorySource::failing();
        let (xml, report) = render(&source, &site()).await;

        assert!(report.recipe_fetch_failed);
        assert_eq!(report.recipe_entries, 0);
        assert_eq!(xml.matches("<url>").count(), 6);
        assert!(xml.contains("<loc>http://localhost:3000/fr/recipes</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[tokio::test]
    async fn test_execute_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("sitemap.xml");
        let source = InMemorySource::new(sample_recipes());

        let report = execute(&source, &site(), &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
        assert_eq!(written.matches("<url>").count(), report.total_entries());
        assert_eq!(report.output_path, Some(path.display().to_string()));
    }
}
