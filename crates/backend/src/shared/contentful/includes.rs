use serde_json::Value;
use std::collections::HashMap;

/// Index of the linked entries and assets shipped with an entries response.
///
/// Contentful returns references as `{"sys": {"type": "Link", ...}}` stubs
/// and puts the targets into `includes.Entry` / `includes.Asset`. Top-level
/// items are indexed too since they are not repeated in `includes`.
#[derive(Debug, Default)]
pub struct Includes<'a> {
    entries: HashMap<&'a str, &'a Value>,
    assets: HashMap<&'a str, &'a Value>,
}

impl<'a> Includes<'a> {
    pub fn from_response(response: &'a Value) -> Self {
        let mut index = Includes::default();

        let items = response.get("items").and_then(Value::as_array);
        let included = response
            .get("includes")
            .and_then(|i| i.get("Entry"))
            .and_then(Value::as_array);
        for entry in items.into_iter().chain(included).flatten() {
            if let Some(id) = sys_id(entry) {
                index.entries.insert(id, entry);
            }
        }

        let assets = response
            .get("includes")
            .and_then(|i| i.get("Asset"))
            .and_then(Value::as_array);
        for asset in assets.into_iter().flatten() {
            if let Some(id) = sys_id(asset) {
                index.assets.insert(id, asset);
            }
        }

        index
    }

    pub fn resolve_entry(&self, link: &'a Value) -> Option<&'a Value> {
        self.resolve(link, "Entry", &self.entries)
    }

    pub fn resolve_asset(&self, link: &'a Value) -> Option<&'a Value> {
        self.resolve(link, "Asset", &self.assets)
    }

    fn resolve(
        &self,
        link: &'a Value,
        link_type: &str,
        index: &HashMap<&'a str, &'a Value>,
    ) -> Option<&'a Value> {
        // already resolved (e.g. the SDK-style shape with inline fields)
        if link.get("fields").is_some() {
            return Some(link);
        }

        let sys = link.get("sys")?;
        if sys.get("type").and_then(Value::as_str) != Some("Link")
            || sys.get("linkType").and_then(Value::as_str) != Some(link_type)
        {
            return None;
        }
        let id = sys.get("id").and_then(Value::as_str)?;
        index.get(id).copied()
    }
}

pub fn sys_id(value: &Value) -> Option<&str> {
    value.get("sys")?.get("id")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link(link_type: &str, id: &str) -> Value {
        json!({ "sys": { "type": "Link", "linkType": link_type, "id": id } })
    }

    #[test]
    fn test_resolves_entries_and_assets() {
        let response = json!({
            "items": [ { "sys": { "id": "r1" }, "fields": { "title": "Soup" } } ],
            "includes": {
                "Entry": [ { "sys": { "id": "c1" }, "fields": { "name": "Italian" } } ],
                "Asset": [ { "sys": { "id": "a1" }, "fields": { "title": "Photo" } } ]
            }
        });
        let includes = Includes::from_response(&response);

        let cuisine_link = link("Entry", "c1");
        let cuisine = includes.resolve_entry(&cuisine_link).unwrap();
        assert_eq!(cuisine["fields"]["name"], "Italian");

        let item_link = link("Entry", "r1");
        assert!(includes.resolve_entry(&item_link).is_some());

        let asset_link = link("Asset", "a1");
        assert_eq!(includes.resolve_asset(&asset_link).unwrap()["fields"]["title"], "Photo");
    }

    #[test]
    fn test_unknown_or_mismatched_links() {
        let response = json!({ "items": [] });
        let includes = Includes::from_response(&response);

        let missing = link("Entry", "nope");
        assert!(includes.resolve_entry(&missing).is_none());

        let wrong_type = link("Asset", "nope");
        assert!(includes.resolve_entry(&wrong_type).is_none());

        let inline = json!({ "fields": { "name": "Inline" } });
        assert!(includes.resolve_entry(&inline).is_some());
    }
}
