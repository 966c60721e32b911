use async_trait::async_trait;
use contracts::domain::a001_recipe::aggregate::Recipe;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::source::RecipeSource;
use crate::shared::contentful::ContentfulError;

/// In-memory recipe source for tests. Every locale sees the same recipes,
/// with the locale code appended to the titles of non-English ones.
pub struct InMemorySource {
    pub recipes: Vec<Recipe>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl InMemorySource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ContentfulError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ContentfulError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn localized(&self, locale: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .cloned()
            .map(|mut r| {
                if locale != "en" {
                    r.title = format!("{} ({})", r.title, locale);
                }
                r
            })
            .collect()
    }
}

#[async_trait]
impl RecipeSource for InMemorySource {
    async fn list_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        self.check()?;
        Ok(self.localized(locale))
    }

    async fn featured_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        self.check()?;
        Ok(self
            .localized(locale)
            .into_iter()
            .filter(|r| r.is_featured)
            .collect())
    }

    async fn recipe_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<Recipe>, ContentfulError> {
        self.check()?;
        Ok(self.localized(locale).into_iter().find(|r| r.slug == slug))
    }

    async fn raw_recipe_entries(&self) -> Result<Value, ContentfulError> {
        self.check()?;
        let mut items: Vec<Value> = self
            .recipes
            .iter()
            .map(|r| json!({ "sys": { "id": r.id }, "fields": { "slug": r.slug, "title": r.title } }))
            .collect();
        // one draft without a slug, as the CMS returns them
        items.push(json!({ "sys": { "id": "draft" }, "fields": { "title": "Draft" } }));
        Ok(json!({ "items": items }))
    }
}

pub fn sample_recipes() -> Vec<Recipe> {
    let mut soup = Recipe::new("r1", "Tomato Soup", "tomato-soup").with_tags(["Soup", "Vegan"]);
    soup.is_featured = true;
    let stew = Recipe::new("r2", "Beef Stew", "beef-stew").with_tags(["Dinner"]);
    let salad = Recipe::new("r3", "Green Salad", "green-salad");
    let mut curry = Recipe::new("r4", "Vegan Curry", "vegan-curry").with_tags(["Vegan", "Dinner"]);
    curry.is_featured = true;
    vec![soup, stew, salad, curry]
}
