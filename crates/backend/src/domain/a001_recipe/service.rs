use contracts::domain::a001_recipe::aggregate::Recipe;
use contracts::domain::a001_recipe::catalog::{extract_categories, filter_catalog};
use contracts::domain::a001_recipe::dto::{
    LocalesResponse, RecipeListQuery, RecipeListResponse, RecipeSummary,
};
use contracts::shared::locale::is_supported;
use std::sync::Arc;
use thiserror::Error;

use super::source::RecipeSource;
use crate::shared::config::SiteConfig;
use crate::shared::contentful::ContentfulError;

#[derive(Debug, Error)]
pub enum RecipeServiceError {
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),

    #[error(transparent)]
    Source(#[from] ContentfulError),
}

/// Recipe queries behind the HTTP API
pub struct RecipeService {
    source: Arc<dyn RecipeSource>,
    site: SiteConfig,
}

impl RecipeService {
    pub fn new(source: Arc<dyn RecipeSource>, site: SiteConfig) -> Self {
        Self { source, site }
    }

    /// Requested locale, or the default one when none was given
    pub fn resolve_locale(&self, requested: Option<&str>) -> Result<String, RecipeServiceError> {
        match requested.map(str::trim).filter(|l| !l.is_empty()) {
            None => Ok(self.site.default_locale().to_string()),
            Some(locale) if is_supported(locale, &self.site.locales) => Ok(locale.to_string()),
            Some(locale) => Err(RecipeServiceError::UnknownLocale(locale.to_string())),
        }
    }

    /// Filtered catalog plus the category list of the whole collection
    pub async fn list(
        &self,
        query: &RecipeListQuery,
    ) -> Result<RecipeListResponse, RecipeServiceError> {
        let locale = self.resolve_locale(query.locale.as_deref())?;
        let recipes = self.source.list_recipes(&locale).await?;

        let categories = extract_categories(&recipes);
        let visible = filter_catalog(
            &recipes,
            query.q.as_deref().unwrap_or(""),
            query.category.as_deref().unwrap_or(""),
        );

        Ok(RecipeListResponse {
            recipes: visible.iter().map(RecipeSummary::from).collect(),
            categories,
        })
    }

    /// Featured recipes for the home page. A CMS failure yields an empty
    /// list so the page still renders.
    pub async fn featured(
        &self,
        locale: Option<&str>,
    ) -> Result<Vec<RecipeSummary>, RecipeServiceError> {
        let locale = self.resolve_locale(locale)?;
        match self.source.featured_recipes(&locale).await {
            Ok(recipes) => Ok(recipes.iter().map(RecipeSummary::from).collect()),
            Err(e) => {
                tracing::error!("Error fetching featured recipes for locale {}: {}", locale, e);
                Ok(Vec::new())
            }
        }
    }

    pub async fn by_slug(
        &self,
        slug: &str,
        locale: Option<&str>,
    ) -> Result<Option<Recipe>, RecipeServiceError> {
        let locale = self.resolve_locale(locale)?;
        let recipe = self.source.recipe_by_slug(slug, &locale).await?;

        if let Some(recipe) = &recipe {
            let mismatches = recipe.tag_reference_mismatches();
            if !mismatches.is_empty() {
                tracing::debug!(
                    "Recipe {} has tag references missing from its tag list: {:?}",
                    recipe.slug,
                    mismatches
                );
            }
        }
        Ok(recipe)
    }

    pub fn locales(&self) -> LocalesResponse {
        LocalesResponse {
            locales: self.site.locales.clone(),
            default_locale: self.site.default_locale().to_string(),
        }
    }
}
