use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::difficulty::Difficulty;

// ============================================================================
// Referenced entries
// ============================================================================

/// Image asset attached to a recipe or an author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    /// Absolute URL (`https://...`)
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
}

/// Cuisine category referenced from a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// Structured tag entry.
///
/// Lives next to the flat `Recipe::tags` list; the catalog filter only
/// looks at the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub bio_html: Option<String>,
    pub avatar: Option<ImageAsset>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Full recipe record as served to the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// CMS entry id (`sys.id`)
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub slug: String,

    // Rich text fields, already rendered and sanitized
    pub description_html: Option<String>,
    pub ingredients_html: Option<String>,
    pub instructions_html: Option<String>,

    pub featured_image: Option<ImageAsset>,
    pub video_url: Option<String>,

    /// Minutes
    pub cooking_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub is_featured: bool,

    pub cuisine: Option<CategoryRef>,
    pub author: Option<Author>,

    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub tag_references: Vec<TagRef>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Minimal record, used by fixtures and by the CMS mapper before the
    /// optional fields are filled in
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            description_html: None,
            ingredients_html: None,
            instructions_html: None,
            featured_image: None,
            video_url: None,
            cooking_time: None,
            difficulty: None,
            is_featured: false,
            cuisine: None,
            author: None,
            tags: None,
            tag_references: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Names of structured tag references that are missing from the flat
    /// `tags` list. Both lists are edited separately in the CMS and can
    /// drift apart; the filter ignores the structured one.
    pub fn tag_reference_mismatches(&self) -> Vec<&str> {
        let flat = self.tags.as_deref().unwrap_or(&[]);
        self.tag_references
            .iter()
            .map(|t| t.name.as_str())
            .filter(|name| !flat.iter().any(|tag| tag == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_reference_mismatches() {
        let mut recipe = Recipe::new("1", "Soup", "soup").with_tags(["Vegan"]);
        recipe.tag_references = vec![
            TagRef {
                name: "Vegan".into(),
                slug: "vegan".into(),
            },
            TagRef {
                name: "Quick".into(),
                slug: "quick".into(),
            },
        ];

        assert_eq!(recipe.tag_reference_mismatches(), vec!["Quick"]);
    }

    #[test]
    fn test_recipe_json_is_camel_case() {
        let mut recipe = Recipe::new("abc", "Pancakes", "pancakes");
        recipe.cooking_time = Some(20);
        recipe.difficulty = Some(Difficulty::Easy);

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["cookingTime"], 20);
        assert_eq!(value["difficulty"], "Easy");
        assert_eq!(value["isFeatured"], false);
        assert!(value.get("tagReferences").is_some());
    }
}
