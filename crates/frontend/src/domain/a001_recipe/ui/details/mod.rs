use contracts::domain::a001_recipe::aggregate::Recipe;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_recipe::api::fetch_recipe;
use crate::shared::components::comments::Comments;
use crate::shared::components::newsletter_form::NewsletterForm;
use crate::shared::components::social_share::SocialShare;
use crate::shared::components::video_embed::VideoEmbed;
use crate::shared::i18n::t;
use crate::shared::locale::{use_locale, use_locale_settings};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Box<Recipe>),
    NotFound,
    Failed(String),
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[component]
#[allow(non_snake_case)]
pub fn RecipeDetails() -> impl IntoView {
    let params = use_params_map();
    let locale = use_locale();
    let settings = use_locale_settings();
    let (load_state, set_load_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        let current = locale.get();
        set_load_state.set(LoadState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let next = match fetch_recipe(&slug, &current).await {
                Ok(Some(recipe)) => LoadState::Loaded(Box::new(recipe)),
                Ok(None) => LoadState::NotFound,
                Err(e) => {
                    log::error!("Error fetching recipe {}: {}", slug, e);
                    LoadState::Failed(e)
                }
            };
            set_load_state.set(next);
        });
    });

    Effect::new(move |_| {
        if let LoadState::Loaded(recipe) = load_state.get() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | {}", recipe.title, t(&locale.get(), "site_title")));
            }
        }
    });

    view! {
        <div class="page page--recipe">
            <div class="recipe__back">
                <a href=move || settings.with(|s| s.href(&locale.get(), "/recipes"))>
                    {move || format!("← {}", t(&locale.get(), "back_to_recipes"))}
                </a>
            </div>
            {move || {
                let l = locale.get();
                match load_state.get() {
                    LoadState::Loading => view! { <p class="page__loading">{t(&l, "loading")}</p> }.into_any(),
                    LoadState::NotFound => view! { <p class="page__error">{t(&l, "recipe_not_found")}</p> }.into_any(),
                    LoadState::Failed(e) => view! {
                        <p class="page__error">{format!("{} ({})", t(&l, "load_error"), e)}</p>
                    }.into_any(),
                    LoadState::Loaded(recipe) => view! { <RecipeArticle recipe=*recipe locale=l /> }.into_any(),
                }
            }}
            <div class="page__section">
                <NewsletterForm />
            </div>
        </div>
    }
}

#[component]
fn RecipeArticle(recipe: Recipe, locale: String) -> impl IntoView {
    let tr = |key: &str| t(&locale, key);
    let title = recipe.title.clone();

    view! {
        <article class="recipe">
            {recipe.featured_image.clone().map(|img| {
                let alt = img.alt.clone().unwrap_or_else(|| title.clone());
                view! { <img class="recipe__image" src=img.url alt=alt /> }
            })}

            <div class="recipe__content">
                <div class="recipe__header">
                    <h1 class="recipe__title" data-testid="recipe-title">{title.clone()}</h1>
                    <SocialShare url=current_url() title=title.clone() label=tr("share_label") />
                </div>

                {recipe.author.clone().map(|author| view! {
                    <p class="recipe__author">
                        {format!("{} ", tr("by_author"))}
                        <span class="recipe__author-name">{author.name}</span>
                    </p>
                })}
                {recipe.created_at.map(|d| view! {
                    <p class="recipe__date">{d.format("%Y-%m-%d").to_string()}</p>
                })}

                <div class="recipe__meta">
                    {recipe.cooking_time.map(|m| view! {
                        <span class="recipe__badge">{format!("⏱️ {} {}", m, tr("minutes_label"))}</span>
                    })}
                    {recipe.difficulty.clone().map(|d| view! {
                        <span class="recipe__badge">{format!("📊 {}", d)}</span>
                    })}
                    {recipe.cuisine.clone().map(|c| view! {
                        <span class="recipe__badge recipe__badge--cuisine">{format!("🍽️ {}", c.name)}</span>
                    })}
                </div>

                {recipe.description_html.clone().map(|html| view! {
                    <div class="recipe__description" inner_html=html></div>
                })}

                <section class="recipe__section">
                    <h2 data-testid="ingredients-heading">{tr("ingredients_heading")}</h2>
                    <div
                        class="recipe__rich-text"
                        data-testid="recipe-ingredients"
                        inner_html=recipe.ingredients_html.clone().unwrap_or_default()
                    ></div>
                </section>

                <section class="recipe__section">
                    <h2>{tr("instructions_heading")}</h2>
                    <div
                        class="recipe__rich-text"
                        data-testid="recipe-instructions"
                        inner_html=recipe.instructions_html.clone().unwrap_or_default()
                    ></div>
                </section>

                {recipe.video_url.clone().map(|url| view! {
                    <VideoEmbed url=url heading=tr("video_heading") />
                })}
            </div>
        </article>

        <Comments heading=tr("comments_heading") />
    }
}
