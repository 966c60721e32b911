use leptos::prelude::*;

/// Search box and category select of the catalog page
#[derive(Clone, Debug, Default)]
pub struct RecipeListState {
    pub search_query: String,
    /// Empty means all categories
    pub selected_category: String,
}

pub fn create_state() -> RwSignal<RecipeListState> {
    RwSignal::new(RecipeListState::default())
}
