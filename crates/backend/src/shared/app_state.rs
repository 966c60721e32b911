use std::sync::Arc;

use crate::domain::a001_recipe::service::RecipeService;
use crate::domain::a001_recipe::source::RecipeSource;
use crate::shared::config::Config;

/// Everything the handlers need, built once in `main`
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn RecipeSource>,
    pub recipes: Arc<RecipeService>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn RecipeSource>) -> Self {
        let recipes = Arc::new(RecipeService::new(source.clone(), config.site.clone()));
        Self {
            config: Arc::new(config),
            source,
            recipes,
        }
    }
}
