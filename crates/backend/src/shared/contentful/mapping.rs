use chrono::{DateTime, Utc};
use contracts::domain::a001_recipe::aggregate::{Author, CategoryRef, ImageAsset, Recipe, TagRef};
use contracts::enums::difficulty::Difficulty;
use serde_json::Value;

use super::includes::{sys_id, Includes};
use crate::shared::rich_text::render_html;

/// Map every recipe item of an entries response.
///
/// Items without an id or a slug cannot be linked to and are skipped.
pub fn recipes_from_response(response: &Value) -> Vec<Recipe> {
    let includes = Includes::from_response(response);
    let Some(items) = response.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let recipe = recipe_from_entry(item, &includes);
            if recipe.is_none() {
                tracing::warn!(
                    "Skipping recipe entry without id or slug: {}",
                    sys_id(item).unwrap_or("<no id>")
                );
            }
            recipe
        })
        .collect()
}

pub fn recipe_from_entry<'a>(entry: &'a Value, includes: &Includes<'a>) -> Option<Recipe> {
    let id = sys_id(entry)?;
    let fields = entry.get("fields")?;
    let slug = str_field(fields, "slug").filter(|s| !s.trim().is_empty())?;

    let mut recipe = Recipe::new(id, str_field(fields, "title").unwrap_or_default(), slug);

    recipe.description_html = fields.get("description").and_then(render_html);
    recipe.ingredients_html = fields.get("ingredients").and_then(render_html);
    recipe.instructions_html = fields.get("instructions").and_then(render_html);

    recipe.featured_image = fields
        .get("featuredImage")
        .and_then(|link| includes.resolve_asset(link))
        .and_then(image_from_asset);
    recipe.video_url = str_field(fields, "videoUrl").filter(|s| !s.trim().is_empty());

    recipe.cooking_time = fields
        .get("cookingTime")
        .and_then(Value::as_f64)
        .filter(|m| *m >= 0.0)
        .map(|m| m.round() as u32);
    recipe.difficulty = str_field(fields, "difficulty")
        .filter(|s| !s.trim().is_empty())
        .map(Difficulty::from);
    recipe.is_featured = fields
        .get("isFeatured")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    recipe.cuisine = fields
        .get("cuisine")
        .and_then(|link| includes.resolve_entry(link))
        .and_then(category_from_entry);
    recipe.author = fields
        .get("author")
        .and_then(|link| includes.resolve_entry(link))
        .and_then(|author| author_from_entry(author, includes));

    recipe.tags = fields.get("tags").and_then(Value::as_array).map(|tags| {
        tags.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });
    recipe.tag_references = fields
        .get("tagReferences")
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(|link| includes.resolve_entry(link))
                .filter_map(tag_from_entry)
                .collect()
        })
        .unwrap_or_default();

    let sys = entry.get("sys");
    recipe.created_at = sys.and_then(|s| timestamp(s, "createdAt"));
    recipe.updated_at = sys.and_then(|s| timestamp(s, "updatedAt"));

    Some(recipe)
}

/// Asset URLs come protocol-relative (`//images.ctfassets.net/...`)
pub fn absolute_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

fn image_from_asset(asset: &Value) -> Option<ImageAsset> {
    let fields = asset.get("fields")?;
    let file = fields.get("file")?;
    let url = str_field(file, "url").filter(|u| !u.is_empty())?;
    let image = file.get("details").and_then(|d| d.get("image"));
    let dimension = |key: &str| {
        image
            .and_then(|i| i.get(key))
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    };

    Some(ImageAsset {
        url: absolute_asset_url(&url),
        width: dimension("width"),
        height: dimension("height"),
        alt: str_field(fields, "description")
            .or_else(|| str_field(fields, "title"))
            .filter(|s| !s.is_empty()),
    })
}

fn category_from_entry(entry: &Value) -> Option<CategoryRef> {
    let fields = entry.get("fields")?;
    Some(CategoryRef {
        name: str_field(fields, "name")?,
        slug: str_field(fields, "slug").unwrap_or_default(),
    })
}

fn tag_from_entry(entry: &Value) -> Option<TagRef> {
    let fields = entry.get("fields")?;
    Some(TagRef {
        name: str_field(fields, "name")?,
        slug: str_field(fields, "slug").unwrap_or_default(),
    })
}

fn author_from_entry<'a>(entry: &'a Value, includes: &Includes<'a>) -> Option<Author> {
    let fields = entry.get("fields")?;
    Some(Author {
        name: str_field(fields, "name")?,
        bio_html: fields.get("bio").and_then(render_html),
        avatar: fields
            .get("avatar")
            .and_then(|link| includes.resolve_asset(link))
            .and_then(image_from_asset),
    })
}

fn str_field(fields: &Value, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn timestamp(sys: &Value, key: &str) -> Option<DateTime<Utc>> {
    let raw = sys.get(key).and_then(Value::as_str)?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
