//! Sitemap generation: every static page and every recipe, once per locale.

pub mod builder;
pub mod slugs;

pub use builder::{build_sitemap, sitemap_entries, SitemapEntry, SITEMAP_NAMESPACE};
pub use slugs::extract_slugs;
