//! Writes sitemap.xml for the static build.
//!
//! Recipe slugs come from the CMS; when it is unreachable the sitemap still
//! lists every static page.

use std::path::PathBuf;

use backend::shared::config::load_config;
use backend::shared::contentful::ContentfulClient;
use backend::system;
use backend::usecases::u501_generate_sitemap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize("generate_sitemap")?;

    let config = load_config()?;
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.sitemap.output_path));

    let client = ContentfulClient::new(&config.contentful)?;
    let report = u501_generate_sitemap::execute(&client, &config.site, &output_path).await?;

    if report.recipe_fetch_failed {
        tracing::warn!("Recipe pages were left out of the sitemap");
    }
    Ok(())
}
