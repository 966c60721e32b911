use chrono::Datelike;
use leptos::prelude::*;

use crate::shared::i18n::t;
use crate::shared::locale::use_locale;

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <span>{move || format!("© {} {}", year, t(&locale.get(), "site_title"))}</span>
            <a class="footer__link" href="/sitemap.xml">"Sitemap"</a>
        </footer>
    }
}
