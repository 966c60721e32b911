use serde::{Deserialize, Serialize};

use super::aggregate::{ImageAsset, Recipe};
use crate::enums::difficulty::Difficulty;

/// Card-sized view of a recipe, used by listings and the catalog filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    /// Missing titles are tolerated and never match a non-empty search
    pub title: Option<String>,
    pub slug: String,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<ImageAsset>,
    pub cooking_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<&Recipe> for RecipeSummary {
    fn from(r: &Recipe) -> Self {
        Self {
            id: r.id.clone(),
            title: if r.title.trim().is_empty() {
                None
            } else {
                Some(r.title.clone())
            },
            slug: r.slug.clone(),
            tags: r.tags.clone(),
            featured_image: r.featured_image.clone(),
            cooking_time: r.cooking_time,
            difficulty: r.difficulty.clone(),
            is_featured: r.is_featured,
        }
    }
}

impl From<Recipe> for RecipeSummary {
    fn from(r: Recipe) -> Self {
        RecipeSummary::from(&r)
    }
}

/// Query string of `GET /api/recipes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeListQuery {
    pub locale: Option<String>,
    /// Title search
    pub q: Option<String>,
    /// Exact tag; empty means all
    pub category: Option<String>,
}

/// Query string of the single-locale endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

/// Response of `GET /api/recipes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeSummary>,
    /// Computed from the whole collection, not from the filtered subset
    pub categories: Vec<String>,
}

/// Response of `GET /api/locales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResponse {
    pub locales: Vec<String>,
    pub default_locale: String,
}
