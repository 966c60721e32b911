use std::sync::Arc;
use std::time::Duration;

use backend::domain::a001_recipe::cache::CachedSource;
use backend::routes::configure_routes;
use backend::shared::app_state::AppState;
use backend::shared::config::load_config;
use backend::shared::contentful::ContentfulClient;
use backend::system;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize("backend")?;

    let config = load_config()?;
    if config.contentful.space_id.is_empty() || config.contentful.access_token.is_empty() {
        tracing::warn!(
            "Contentful credentials are not set (CONTENTFUL_SPACE_ID / CONTENTFUL_ACCESS_TOKEN); recipe requests will fail"
        );
    }

    let client = ContentfulClient::new(&config.contentful)?;
    let source = Arc::new(CachedSource::new(
        Arc::new(client),
        Duration::from_secs(config.contentful.revalidate_secs),
    ));

    let addr = config.bind_address();
    let app = configure_routes(AppState::new(config, source));

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
