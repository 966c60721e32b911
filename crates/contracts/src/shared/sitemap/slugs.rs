use serde_json::Value;

/// Recipe slugs from a raw CMS entries response (`items[*].fields.slug`).
///
/// Items whose slug is missing, empty or not a string are skipped; a
/// response without `items` yields nothing.
pub fn extract_slugs(raw: &Value) -> Vec<String> {
    let Some(items) = raw.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| item.get("fields")?.get("slug")?.as_str())
        .filter(|slug| !slug.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_without_slug_are_skipped() {
        let raw = json!({
            "items": [
                { "fields": { "slug": "soup", "title": "Soup" } },
                { "fields": { "title": "Draft without slug" } },
                { "fields": { "slug": "" } },
                { "fields": { "slug": 42 } },
                { "sys": { "id": "no-fields" } },
                { "fields": { "slug": "stew" } }
            ]
        });
        assert_eq!(extract_slugs(&raw), vec!["soup", "stew"]);
    }

    #[test]
    fn test_missing_items_is_empty() {
        assert!(extract_slugs(&json!({ "sys": { "type": "Error" } })).is_empty());
        assert!(extract_slugs(&json!(null)).is_empty());
        assert!(extract_slugs(&json!({ "items": {} })).is_empty());
    }
}
