use async_trait::async_trait;
use contracts::domain::a001_recipe::aggregate::Recipe;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::source::RecipeSource;
use crate::shared::contentful::ContentfulError;

/// One locale's recipe list and when it was fetched
struct CachedList {
    fetched_at: Instant,
    recipes: Vec<Recipe>,
}

/// Reuses recipe listings for a revalidation window.
///
/// Only the per-locale lists are cached; single recipes and the raw
/// entries for the sitemap always go to the inner source. Failures are
/// never cached.
pub struct CachedSource {
    inner: Arc<dyn RecipeSource>,
    ttl: Duration,
    lists: RwLock<HashMap<String, CachedList>>,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn RecipeSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            lists: RwLock::new(HashMap::new()),
        }
    }

    async fn cached(&self, key: &str) -> Option<Vec<Recipe>> {
        let lists = self.lists.read().await;
        lists
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.recipes.clone())
    }

    async fn store(&self, key: String, recipes: &[Recipe]) {
        let mut lists = self.lists.write().await;
        lists.insert(
            key,
            CachedList {
                fetched_at: Instant::now(),
                recipes: recipes.to_vec(),
            },
        );
    }
}

#[async_trait]
impl RecipeSource for CachedSource {
    async fn list_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        let key = format!("list:{}", locale);
        if let Some(recipes) = self.cached(&key).await {
            return Ok(recipes);
        }
        let recipes = self.inner.list_recipes(locale).await?;
        self.store(key, &recipes).await;
        Ok(recipes)
    }

    async fn featured_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        let key = format!("featured:{}", locale);
        if let Some(recipes) = self.cached(&key).await {
            return Ok(recipes);
        }
        let recipes = self.inner.featured_recipes(locale).await?;
        self.store(key, &recipes).await;
        Ok(recipes)
    }

    async fn recipe_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<Recipe>, ContentfulError> {
        self.inner.recipe_by_slug(slug, locale).await
    }

    async fn raw_recipe_entries(&self) -> Result<Value, ContentfulError> {
        self.inner.raw_recipe_entries().await
    }
}
