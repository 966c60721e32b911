use axum::http::Method;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system::middleware::request_logger;

/// All application routes.
///
/// Anything outside `/api` and `/sitemap.xml` is served from the built
/// frontend; unknown paths get `index.html` so client-side routes such as
/// `/fr/recipes/tomato-soup` survive a reload.
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let index = Path::new(&static_dir).join("index.html");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 RECIPES
        // ========================================
        .route("/api/recipes", get(handlers::a001_recipe::list))
        .route("/api/recipes/featured", get(handlers::a001_recipe::featured))
        .route("/api/recipes/:slug", get(handlers::a001_recipe::get_by_slug))
        .route("/api/locales", get(handlers::a001_recipe::locales))
        // ========================================
        // NEWSLETTER
        // ========================================
        .route("/api/newsletter", post(handlers::newsletter::subscribe))
        // ========================================
        // SITEMAP
        // ========================================
        .route("/sitemap.xml", get(handlers::sitemap::sitemap))
        .with_state(state)
        .fallback_service(ServeDir::new(&static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_recipe::fixtures::{sample_recipes, InMemorySource};
    use crate::shared::config::parse_config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(source: InMemorySource, static_dir: &str) -> Router {
        let mut config = parse_config(
            r#"
            [server]
            [contentful]
            [site]
            url = "https://recipes.example.com"
            locales = ["en", "es", "fr"]
            "#,
        )
        .unwrap();
        config.server.static_dir = static_dir.to_string();
        configure_routes(AppState::new(config, Arc::new(source)))
    }

    fn app() -> Router {
        app_with(InMemorySource::new(sample_recipes()), "does-not-exist")
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_recipes_list_with_filters() {
        let (status, body) = get(app(), "/api/recipes?q=soup&category=Vegan").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        let recipes = json["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["slug"], "tomato-soup");
        assert_eq!(json["categories"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_locale_is_bad_request() {
        let (status, _) = get(app(), "/api/recipes?locale=de").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cms_failure_is_bad_gateway() {
        let app = app_with(InMemorySource::failing(), "does-not-exist");
        let (status, _) = get(app, "/api/recipes").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_featured_survives_cms_failure() {
        let app = app_with(InMemorySource::failing(), "does-not-exist");
        let (status, body) = get(app, "/api/recipes/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_recipe_by_slug() {
        let (status, body) = get(app(), "/api/recipes/beef-stew?locale=es").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["title"], "Beef Stew (es)");

        let (status, _) = get(app(), "/api/recipes/no-such-recipe").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_locales() {
        let (status, body) = get(app(), "/api/locales").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["defaultLocale"], "en");
        assert_eq!(json["locales"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_newsletter() {
        let (status, body) =
            post_json(app(), "/api/newsletter", r#"{"email":"cook@example.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"subscribed":true}"#);

        let (status, body) = post_json(app(), "/api/newsletter", r#"{"email":"nope"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("error"));
    }

    #[tokio::test]
    async fn test_sitemap_xml() {
        let response = app()
            .oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/xml"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let xml = String::from_utf8(body.to_vec()).unwrap();
        assert!(xml.contains("<loc>https://recipes.example.com/fr/recipes/vegan-curry</loc>"));
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        let app = app_with(
            InMemorySource::new(sample_recipes()),
            dir.path().to_str().unwrap(),
        );

        let (status, body) = get(app, "/fr/recipes/tomato-soup").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");
    }
}
