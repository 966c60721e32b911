use contracts::domain::a001_recipe::dto::RecipeSummary;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::i18n::t;
use crate::shared::locale::use_locale_settings;

#[component]
pub fn RecipeCard(recipe: RecipeSummary, #[prop(into)] locale: Signal<String>) -> impl IntoView {
    let title = recipe.title.clone().unwrap_or_default();
    let image = recipe.featured_image.clone();
    let tags = recipe.tags.clone().unwrap_or_default();
    let slug = recipe.slug.clone();
    let settings = use_locale_settings();

    view! {
        <Card class="recipe-card">
            <div data-testid="recipe-card">
                {image.map(|img| {
                    let alt = img.alt.clone().unwrap_or_else(|| title.clone());
                    view! { <img class="recipe-card__image" src=img.url alt=alt loading="lazy" /> }
                })}
                <div class="recipe-card__body">
                    <h2 class="recipe-card__title">{title.clone()}</h2>
                    {(!tags.is_empty()).then(|| view! {
                        <div class="recipe-card__tags">
                            {tags.iter().map(|tag| view! {
                                <span class="recipe-card__tag">{tag.clone()}</span>
                            }).collect_view()}
                        </div>
                    })}
                    <div class="recipe-card__footer">
                        <a
                            class="recipe-card__link"
                            href=move || settings.with(|s| s.href(&locale.get(), &format!("/recipes/{}", slug)))
                        >
                            {move || format!("{} →", t(&locale.get(), "view_recipe"))}
                        </a>
                    </div>
                </div>
            </div>
        </Card>
    }
}
