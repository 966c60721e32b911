use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_recipe::ui::details::RecipeDetails;
use crate::domain::a001_recipe::ui::home::HomePage;
use crate::domain::a001_recipe::ui::list::RecipeList;
use crate::layout::Shell;

/// Every page exists once without a prefix (default locale) and once
/// under `/:locale`. Static routes are listed first so `/recipes` is never
/// read as a locale.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page__error">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/recipes") view=RecipeList />
                    <Route path=path!("/recipes/:slug") view=RecipeDetails />
                    <Route path=path!("/:locale") view=HomePage />
                    <Route path=path!("/:locale/recipes") view=RecipeList />
                    <Route path=path!("/:locale/recipes/:slug") view=RecipeDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
