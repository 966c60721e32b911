use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_recipe::aggregate::Recipe;
use contracts::domain::a001_recipe::dto::{
    LocaleQuery, LocalesResponse, RecipeListQuery, RecipeListResponse, RecipeSummary,
};

use crate::domain::a001_recipe::service::RecipeServiceError;
use crate::shared::app_state::AppState;

fn status_for(e: &RecipeServiceError) -> StatusCode {
    match e {
        RecipeServiceError::UnknownLocale(_) => StatusCode::BAD_REQUEST,
        RecipeServiceError::Source(_) => StatusCode::BAD_GATEWAY,
    }
}

fn log_and_map(e: RecipeServiceError) -> StatusCode {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!("Recipe request failed: {}", e);
    } else {
        tracing::warn!("Recipe request rejected: {}", e);
    }
    status
}

/// GET /api/recipes
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RecipeListQuery>,
) -> Result<Json<RecipeListResponse>, StatusCode> {
    state.recipes.list(&query).await.map(Json).map_err(log_and_map)
}

/// GET /api/recipes/featured
pub async fn featured(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<RecipeSummary>>, StatusCode> {
    state
        .recipes
        .featured(query.locale.as_deref())
        .await
        .map(Json)
        .map_err(log_and_map)
}

/// GET /api/recipes/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Recipe>, StatusCode> {
    match state.recipes.by_slug(&slug, query.locale.as_deref()).await {
        Ok(Some(recipe)) => Ok(Json(recipe)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(log_and_map(e)),
    }
}

/// GET /api/locales
pub async fn locales(State(state): State<AppState>) -> Json<LocalesResponse> {
    Json(state.recipes.locales())
}
