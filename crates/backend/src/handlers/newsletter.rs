use axum::http::StatusCode;
use axum::Json;
use contracts::shared::newsletter::{is_valid_email, NewsletterRequest, NewsletterResponse};
use serde_json::{json, Value};

/// POST /api/newsletter
///
/// Signup stub: the address is validated and logged, nothing is stored.
pub async fn subscribe(
    Json(request): Json<NewsletterRequest>,
) -> Result<Json<NewsletterResponse>, (StatusCode, Json<Value>)> {
    let email = request.email.trim();
    if !is_valid_email(email) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Please enter a valid email address." })),
        ));
    }

    tracing::debug!("Newsletter signup: {}", mask_email(email));
    Ok(Json(NewsletterResponse { subscribed: true }))
}

/// `cook@example.com` -> `c***@example.com`
fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
