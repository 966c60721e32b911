//! Catalog search and category filtering.
//!
//! Both functions are pure and cheap enough to run on every keystroke:
//! filtering is O(n·m) over recipe count and title length, category
//! extraction is O(n·k) over recipe count and tags per recipe.

use super::aggregate::Recipe;
use super::dto::RecipeSummary;

/// Record that can be shown in the recipe catalog
pub trait CatalogEntry {
    /// `None` when the record has no usable title
    fn title(&self) -> Option<&str>;

    /// Flat tag list, `None` when the field is absent
    fn tags(&self) -> Option<&[String]>;

    /// Case-insensitive substring match on the title. An empty query
    /// matches everything, a missing title matches nothing else.
    fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        match self.title() {
            Some(title) => title.to_lowercase().contains(&query.to_lowercase()),
            None => false,
        }
    }

    /// Exact, case-sensitive tag membership. An empty category matches
    /// everything, including records without tags.
    fn matches_category(&self, category: &str) -> bool {
        if category.is_empty() {
            return true;
        }
        self.tags()
            .map(|tags| tags.iter().any(|t| t == category))
            .unwrap_or(false)
    }
}

impl CatalogEntry for Recipe {
    fn title(&self) -> Option<&str> {
        if self.title.is_empty() {
            None
        } else {
            Some(&self.title)
        }
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

impl CatalogEntry for RecipeSummary {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }
}

/// Visible subset of `recipes` for the given search and category, in input
/// order
pub fn filter_catalog<T: CatalogEntry + Clone>(
    recipes: &[T],
    search_query: &str,
    selected_category: &str,
) -> Vec<T> {
    // lowercase the query once instead of per recipe
    let query = search_query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.matches_search(&query) && r.matches_category(selected_category))
        .cloned()
        .collect()
}

/// Distinct tags across the collection, in first-seen order
pub fn extract_categories<T: CatalogEntry>(recipes: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for tags in recipes.iter().filter_map(|r| r.tags()) {
        for tag in tags {
            if !categories.iter().any(|c| c == tag) {
                categories.push(tag.clone());
            }
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: Option<&str>, slug: &str, tags: Option<&[&str]>) -> RecipeSummary {
        RecipeSummary {
            id: slug.to_string(),
            title: title.map(str::to_string),
            slug: slug.to_string(),
            tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
            featured_image: None,
            cooking_time: None,
            difficulty: None,
            is_featured: false,
        }
    }

    fn sample() -> Vec<RecipeSummary> {
        vec![
            summary(Some("Tomato Soup"), "tomato-soup", Some(&["Vegan", "Soup"])),
            summary(Some("Beef Stew"), "beef-stew", Some(&["Dinner"])),
            summary(Some("Pea soup"), "pea-soup", None),
            summary(None, "untitled", Some(&["Soup"])),
            summary(Some("Vegan Curry"), "vegan-curry", Some(&["Vegan", "Dinner", "Vegan"])),
        ]
    }

    fn slugs(items: &[RecipeSummary]) -> Vec<&str> {
        items.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_empty_inputs_are_identity() {
        let recipes = sample();
        assert_eq!(filter_catalog(&recipes, "", ""), recipes);
        assert!(filter_catalog::<RecipeSummary>(&[], "soup", "Vegan").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let recipes = sample();
        let found = filter_catalog(&recipes, "SOUP", "");
        assert_eq!(slugs(&found), vec!["tomato-soup", "pea-soup"]);

        for r in &recipes {
            let included = found.iter().any(|f| f.slug == r.slug);
            let matches = r
                .title
                .as_deref()
                .map(|t| t.to_lowercase().contains("soup"))
                .unwrap_or(false);
            assert_eq!(included, matches, "{}", r.slug);
        }
    }

    #[test]
    fn test_missing_title_never_matches_search() {
        let recipes = sample();
        let found = filter_catalog(&recipes, "u", "");
        assert!(!slugs(&found).contains(&"untitled"));
    }

    #[test]
    fn test_category_is_exact_and_excludes_untagged() {
        let recipes = sample();
        let found = filter_catalog(&recipes, "", "Soup");
        assert_eq!(slugs(&found), vec!["tomato-soup", "untitled"]);

        assert!(filter_catalog(&recipes, "", "soup").is_empty());
        for r in filter_catalog(&recipes, "", "Dinner") {
            assert!(r.tags.unwrap().contains(&"Dinner".to_string()));
        }
    }

    #[test]
    fn test_search_and_category_combine() {
        let recipes = sample();
        let found = filter_catalog(&recipes, "curry", "Vegan");
        assert_eq!(slugs(&found), vec!["vegan-curry"]);
        assert!(filter_catalog(&recipes, "stew", "Vegan").is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let recipes = sample();
        assert_eq!(
            filter_catalog(&recipes, "o", "Vegan"),
            filter_catalog(&recipes, "o", "Vegan")
        );
    }

    #[test]
    fn test_extract_categories_first_seen_without_duplicates() {
        let recipes = sample();
        let categories = extract_categories(&recipes);
        assert_eq!(categories, vec!["Vegan", "Soup", "Dinner"]);

        for r in &recipes {
            for tag in r.tags.iter().flatten() {
                assert!(categories.contains(tag));
            }
        }
    }

    #[test]
    fn test_extract_categories_skips_missing_tags() {
        let recipes = vec![summary(Some("A"), "a", None), summary(Some("B"), "b", Some(&[]))];
        assert!(extract_categories(&recipes).is_empty());
    }

    #[test]
    fn test_works_on_full_recipes() {
        let recipes = vec![
            Recipe::new("1", "Lemon Tart", "lemon-tart").with_tags(["Dessert"]),
            Recipe::new("2", "", "no-title").with_tags(["Dessert"]),
        ];
        assert_eq!(filter_catalog(&recipes, "tart", "Dessert").len(), 1);
        assert_eq!(filter_catalog(&recipes, "", "Dessert").len(), 2);
        assert_eq!(extract_categories(&recipes), vec!["Dessert"]);
    }
}
