use async_trait::async_trait;
use contracts::domain::a001_recipe::aggregate::Recipe;
use serde_json::Value;

use crate::shared::contentful::ContentfulError;

/// Where recipes come from.
///
/// `locale` is always a site locale (`en`, `fr`, ...); implementations map
/// it to whatever their backend expects.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Every recipe, in CMS order
    async fn list_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError>;

    /// Recipes flagged for the home page
    async fn featured_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError>;

    async fn recipe_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<Recipe>, ContentfulError>;

    /// Unmapped entries response, used by the sitemap to read slugs
    async fn raw_recipe_entries(&self) -> Result<Value, ContentfulError>;
}
