use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentfulError {
    #[error("Contentful is not configured: {0} is empty")]
    NotConfigured(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contentful API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode Contentful response: {0}")]
    Decode(#[from] serde_json::Error),
}
