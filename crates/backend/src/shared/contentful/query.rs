/// Content type id of recipe entries
pub const RECIPE_CONTENT_TYPE: &str = "recipe";

/// Query parameters of `GET /entries`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntriesQuery {
    pub content_type: String,
    /// CMS locale code (`en-US`, `fr`, ...)
    pub locale: Option<String>,
    pub slug: Option<String>,
    pub featured: Option<bool>,
    /// Field paths for `select`, e.g. `fields.slug`
    pub select: Vec<String>,
    pub limit: Option<u32>,
    /// Depth of linked entries to resolve into `includes`
    pub include: Option<u8>,
}

impl EntriesQuery {
    pub fn recipes() -> Self {
        Self {
            content_type: RECIPE_CONTENT_TYPE.to_string(),
            ..Default::default()
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn include(mut self, depth: u8) -> Self {
        self.include = Some(depth);
        self
    }

    /// Parameters in a fixed order
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("content_type".to_string(), self.content_type.clone())];
        if let Some(locale) = &self.locale {
            params.push(("locale".to_string(), locale.clone()));
        }
        if let Some(slug) = &self.slug {
            params.push(("fields.slug".to_string(), slug.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("fields.isFeatured".to_string(), featured.to_string()));
        }
        if !self.select.is_empty() {
            params.push(("select".to_string(), self.select.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(include) = self.include {
            params.push(("include".to_string(), include.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_query() {
        assert_eq!(
            EntriesQuery::recipes().to_params(),
            vec![("content_type".to_string(), "recipe".to_string())]
        );
    }

    #[test]
    fn test_full_query_order() {
        let params = EntriesQuery::recipes()
            .locale("en-US")
            .slug("soup")
            .featured(true)
            .select(["fields.slug", "sys.id"])
            .limit(1)
            .include(2)
            .to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "content_type",
                "locale",
                "fields.slug",
                "fields.isFeatured",
                "select",
                "limit",
                "include"
            ]
        );
        assert_eq!(params[3].1, "true");
        assert_eq!(params[4].1, "fields.slug,sys.id");
    }
}
