use contracts::domain::a001_recipe::dto::RecipeSummary;
use leptos::prelude::*;

use crate::domain::a001_recipe::api::fetch_featured;
use crate::shared::components::newsletter_form::NewsletterForm;
use crate::shared::components::recipe_card::RecipeCard;
use crate::shared::i18n::t;
use crate::shared::locale::use_locale;

/// Landing page: featured recipes and the newsletter signup
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let (recipes, set_recipes) = signal::<Vec<RecipeSummary>>(Vec::new());
    let (loading, set_loading) = signal(true);

    // refetch whenever the locale changes
    Effect::new(move |_| {
        let current = locale.get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_featured(&current).await {
                Ok(v) => set_recipes.set(v),
                Err(e) => {
                    // the page still renders, just without cards
                    log::error!("Error fetching featured recipes for locale {}: {}", current, e);
                    set_recipes.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} - {}", t(&locale.get(), "site_title"), t(&locale.get(), "hero_title")));
        }
    });

    view! {
        <div class="page page--home">
            <div class="hero">
                <h1 class="hero__title">{move || t(&locale.get(), "hero_title")}</h1>
                <p class="hero__subtitle">{move || t(&locale.get(), "hero_subtitle")}</p>
            </div>

            <h2 class="section-title">{move || t(&locale.get(), "featured_recipes")}</h2>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">{t(&locale.get_untracked(), "loading")}</p> }
            >
                <div class="recipe-grid" data-testid="featured-recipes">
                    <For
                        each=move || recipes.get()
                        key=|r| (r.id.clone(), r.title.clone())
                        children=move |recipe: RecipeSummary| view! {
                            <RecipeCard recipe=recipe locale=locale />
                        }
                    />
                </div>
            </Show>

            <div class="page__section">
                <NewsletterForm />
            </div>
        </div>
    }
}
