use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::shared::app_state::AppState;
use crate::usecases::u501_generate_sitemap;

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let (xml, report) = u501_generate_sitemap::render(state.source.as_ref(), &state.config.site).await;
    tracing::debug!("Served sitemap with {} urls", report.total_entries());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}
