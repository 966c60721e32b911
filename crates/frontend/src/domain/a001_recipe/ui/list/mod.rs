pub mod state;

use contracts::domain::a001_recipe::catalog::filter_catalog;
use contracts::domain::a001_recipe::dto::RecipeSummary;
use leptos::prelude::*;
use thaw::Select;

use self::state::create_state;
use crate::domain::a001_recipe::api::fetch_recipes;
use crate::shared::components::newsletter_form::NewsletterForm;
use crate::shared::components::recipe_card::RecipeCard;
use crate::shared::i18n::t;
use crate::shared::list_utils::SearchInput;
use crate::shared::locale::use_locale;

/// Whole catalog with client-side search and category filtering
#[component]
#[allow(non_snake_case)]
pub fn RecipeList() -> impl IntoView {
    let locale = use_locale();
    let state = create_state();
    let (items, set_items) = signal::<Vec<RecipeSummary>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<String>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let current = locale.get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_recipes(&current).await {
                Ok(v) => {
                    set_items.set(v.recipes);
                    set_categories.set(v.categories);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching recipes for locale {}: {}", current, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let s = state.get();
        items.with(|all| filter_catalog(all, &s.search_query, &s.selected_category))
    });

    let category_value = RwSignal::new(String::new());
    Effect::new(move |_| {
        let selected = category_value.get();
        state.update(|s| s.selected_category = selected);
    });

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | {}", t(&locale.get(), "all_recipes"), t(&locale.get(), "site_title")));
        }
    });

    view! {
        <div class="page page--recipes">
            <h1 class="page__title">{move || t(&locale.get(), "all_recipes")}</h1>

            <div class="filters">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                    placeholder=Signal::derive(move || t(&locale.get(), "search_placeholder"))
                />
                <div class="filters__category" data-testid="category-filter">
                    <Select value=category_value>
                        <option value="">{move || t(&locale.get(), "all_categories")}</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.clone()
                            children=move |c: String| {
                                let label = c.clone();
                                view! { <option value=c>{label}</option> }
                            }
                        />
                    </Select>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <p class="page__error">{format!("{} ({})", t(&locale.get_untracked(), "load_error"), e)}</p>
            })}

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">{t(&locale.get_untracked(), "loading")}</p> }
            >
                <Show
                    when=move || !filtered.with(|f| f.is_empty())
                    fallback=move || view! {
                        <p class="recipe-grid__empty">{t(&locale.get_untracked(), "no_recipes_found")}</p>
                    }
                >
                    <div class="recipe-grid">
                        <For
                            each=move || filtered.get()
                            key=|r| (r.id.clone(), r.title.clone())
                            children=move |recipe: RecipeSummary| view! {
                                <RecipeCard recipe=recipe locale=locale />
                            }
                        />
                    </div>
                </Show>
            </Show>

            <div class="page__section">
                <NewsletterForm />
            </div>
        </div>
    }
}
