use leptos::prelude::*;

use crate::shared::share::share_links;

#[component]
pub fn SocialShare(
    #[prop(into)] url: String,
    #[prop(into)] title: String,
    /// Caption in front of the links
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    let links = share_links(&url, &title);

    view! {
        <div class="social-share" data-testid="social-share">
            <span class="social-share__label">{move || label.get()}</span>
            {links
                .into_iter()
                .map(|link| view! {
                    <a
                        class="social-share__link"
                        href=link.href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {link.label}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
