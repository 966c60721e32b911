use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::locale::{use_locale, use_locale_settings};

/// One link per served locale; each keeps the current page
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let pathname = use_location().pathname;
    let locale = use_locale();
    let settings = use_locale_settings();

    view! {
        <div class="language-switcher" data-testid="language-switcher">
            <For
                each=move || settings.with(|s| s.locales.clone())
                key=|code| code.clone()
                children=move |code| {
                    let target = code.clone();
                    let active = code.clone();
                    view! {
                        <a
                            href=move || settings.with(|s| s.switch_href(&pathname.get(), &target))
                            class=move || {
                                if locale.get() == active {
                                    "language-switcher__link language-switcher__link--active"
                                } else {
                                    "language-switcher__link"
                                }
                            }
                        >
                            {code.to_uppercase()}
                        </a>
                    }
                }
            />
        </div>
    }
}
