use async_trait::async_trait;
use contracts::domain::a001_recipe::aggregate::Recipe;
use contracts::shared::locale::cms_locale;
use serde_json::Value;

use super::error::ContentfulError;
use super::mapping::recipes_from_response;
use super::query::EntriesQuery;
use crate::domain::a001_recipe::source::RecipeSource;
use crate::shared::config::ContentfulConfig;

/// Depth of linked entries (cuisine, author, author avatar) to include
const DETAIL_INCLUDE_DEPTH: u8 = 2;

/// The sitemap only needs to know which slugs exist
const SLUG_FIELDS: [&str; 2] = ["sys.id", "fields.slug"];

/// Every recipe, trimmed to its id and slug. No locale: the CMS answers
/// with the default locale, which is where slugs are maintained.
fn slug_listing_query() -> EntriesQuery {
    EntriesQuery::recipes().select(SLUG_FIELDS)
}

/// HTTP client for the Contentful Content Delivery API.
///
/// Built once from configuration and handed to whoever needs it; there is
/// no process-wide instance.
pub struct ContentfulClient {
    client: reqwest::Client,
    base_url: String,
    space_id: String,
    environment: String,
    access_token: String,
}

impl ContentfulClient {
    pub fn new(config: &ContentfulConfig) -> Result<Self, ContentfulError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space_id: config.space_id.clone(),
            environment: config.environment.clone(),
            access_token: config.access_token.clone(),
        })
    }

    pub fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url, self.space_id, self.environment
        )
    }

    fn ensure_configured(&self) -> Result<(), ContentfulError> {
        if self.space_id.trim().is_empty() {
            return Err(ContentfulError::NotConfigured("space_id"));
        }
        if self.access_token.trim().is_empty() {
            return Err(ContentfulError::NotConfigured("access_token"));
        }
        Ok(())
    }

    /// Raw `GET /entries` response
    pub async fn get_entries(&self, query: &EntriesQuery) -> Result<Value, ContentfulError> {
        self.ensure_configured()?;

        let url = self.entries_url();
        tracing::debug!("Contentful GET {} {:?}", url, query.to_params());

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ContentfulError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for ContentfulClient {
    async fn list_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        let query = EntriesQuery::recipes().locale(cms_locale(locale));
        let response = self.get_entries(&query).await?;
        Ok(recipes_from_response(&response))
    }

    async fn featured_recipes(&self, locale: &str) -> Result<Vec<Recipe>, ContentfulError> {
        let query = EntriesQuery::recipes()
            .locale(cms_locale(locale))
            .featured(true);
        let response = self.get_entries(&query).await?;
        Ok(recipes_from_response(&response))
    }

    async fn recipe_by_slug(
        &self,
        slug: &str,
        locale: &str,
    ) -> Result<Option<Recipe>, ContentfulError> {
        let query = EntriesQuery::recipes()
            .locale(cms_locale(locale))
            .slug(slug)
            .limit(1)
            .include(DETAIL_INCLUDE_DEPTH);
        let response = self.get_entries(&query).await?;
        Ok(recipes_from_response(&response).into_iter().next())
    }

    async fn raw_recipe_entries(&self) -> Result<Value, ContentfulError> {
        self.get_entries(&slug_listing_query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(space_id: &str, access_token: &str) -> ContentfulConfig {
        ContentfulConfig {
            space_id: space_id.to_string(),
            access_token: access_token.to_string(),
            environment: "master".to_string(),
            base_url: "https://cdn.contentful.com/".to_string(),
            timeout_secs: 5,
            revalidate_secs: 60,
        }
    }

    #[test]
    fn test_entries_url() {
        let client = ContentfulClient::new(&config("abc123", "token")).unwrap();
        assert_eq!(
            client.entries_url(),
            "https://cdn.contentful.com/spaces/abc123/environments/master/entries"
        );
    }

    #[test]
    fn test_slug_listing_selects_only_slugs() {
        let params = slug_listing_query().to_params();
        assert_eq!(
            params,
            vec![
                ("content_type".to_string(), "recipe".to_string()),
                ("select".to_string(), "sys.id,fields.slug".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_request() {
        let client = ContentfulClient::new(&config("", "token")).unwrap();
        let err = client.list_recipes("en").await.unwrap_err();
        assert!(matches!(err, ContentfulError::NotConfigured("space_id")));

        let client = ContentfulClient::new(&config("abc123", " ")).unwrap();
        let err = client.raw_recipe_entries().await.unwrap_err();
        assert!(matches!(err, ContentfulError::NotConfigured("access_token")));
    }
}
