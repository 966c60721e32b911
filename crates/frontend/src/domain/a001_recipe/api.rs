//! API client for recipes and the newsletter

use contracts::domain::a001_recipe::aggregate::Recipe;
use contracts::domain::a001_recipe::dto::{
    LocaleQuery, LocalesResponse, RecipeListQuery, RecipeListResponse, RecipeSummary,
};
use contracts::shared::newsletter::{NewsletterRequest, NewsletterResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const BASE_URL: &str = "/api/recipes";

fn locale_query(locale: &str) -> Result<String, String> {
    serde_qs::to_string(&LocaleQuery {
        locale: Some(locale.to_string()),
    })
    .map_err(|e| e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Whole catalog for a locale; filtering happens client-side
pub async fn fetch_recipes(locale: &str) -> Result<RecipeListResponse, String> {
    let query = serde_qs::to_string(&RecipeListQuery {
        locale: Some(locale.to_string()),
        ..Default::default()
    })
    .map_err(|e| e.to_string())?;

    let response = Request::get(&format!("{}?{}", BASE_URL, query))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_featured(locale: &str) -> Result<Vec<RecipeSummary>, String> {
    let response = Request::get(&format!("{}/featured?{}", BASE_URL, locale_query(locale)?))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// `Ok(None)` when the slug is unknown
pub async fn fetch_recipe(slug: &str, locale: &str) -> Result<Option<Recipe>, String> {
    let url = format!(
        "{}/{}?{}",
        BASE_URL,
        urlencoding::encode(slug),
        locale_query(locale)?
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

/// Locales the server is configured for
pub async fn fetch_locales() -> Result<LocalesResponse, String> {
    let response = Request::get("/api/locales")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn subscribe(email: &str) -> Result<NewsletterResponse, String> {
    let response = Request::post("/api/newsletter")
        .json(&NewsletterRequest {
            email: email.to_string(),
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
