use serde::{Deserialize, Serialize};

/// Outcome of one sitemap generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapReport {
    pub static_entries: usize,
    pub recipe_entries: usize,
    /// The recipe fetch failed and only static pages were written
    pub recipe_fetch_failed: bool,
    /// Where the file was written; `None` when rendered for HTTP only
    pub output_path: Option<String>,
}

impl SitemapReport {
    pub fn total_entries(&self) -> usize {
        self.static_entries + self.recipe_entries
    }
}
