pub mod language_switcher;

use leptos::prelude::*;

use crate::shared::i18n::t;
use crate::shared::locale::{use_locale, use_locale_settings};
use language_switcher::LanguageSwitcher;

#[component]
pub fn Navbar() -> impl IntoView {
    let locale = use_locale();
    let settings = use_locale_settings();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__logo" href=move || settings.with(|s| s.href(&locale.get(), "/"))>
                    <span>{move || t(&locale.get(), "site_title")}</span>
                    <span>"🍳"</span>
                </a>
                <div class="navbar__links">
                    <a class="navbar__button" href=move || settings.with(|s| s.href(&locale.get(), "/recipes"))>
                        {move || t(&locale.get(), "all_recipes")}
                    </a>
                    <div class="navbar__divider"></div>
                    <LanguageSwitcher />
                </div>
            </div>
        </nav>
    }
}
