use contracts::shared::newsletter::is_valid_email;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

use crate::domain::a001_recipe::api;
use crate::shared::i18n::t;
use crate::shared::locale::use_locale;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let locale = use_locale();
    let email = RwSignal::new(String::new());
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |_| {
        let value = email.get_untracked().trim().to_string();
        if !is_valid_email(&value) {
            set_error.set(Some(t(&locale.get_untracked(), "newsletter_error")));
            return;
        }
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::subscribe(&value).await {
                Ok(response) if response.subscribed => set_submitted.set(true),
                Ok(_) => set_error.set(Some(t(&locale.get_untracked(), "newsletter_error"))),
                Err(e) => {
                    log::error!("Newsletter signup failed: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=move || view! {
                <div class="newsletter newsletter--success" data-testid="newsletter-success">
                    {move || t(&locale.get(), "newsletter_success")}
                </div>
            }
        >
            <div class="newsletter" data-testid="newsletter-form">
                <h3 class="newsletter__title">{move || t(&locale.get(), "newsletter_title")}</h3>
                <div class="newsletter__row">
                    <Input
                        value=email
                        placeholder=Signal::derive(move || t(&locale.get(), "newsletter_placeholder"))
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        {move || t(&locale.get(), "newsletter_button")}
                    </Button>
                </div>
                {move || error.get().map(|message| view! {
                    <p class="newsletter__error" data-testid="newsletter-error">{message}</p>
                })}
            </div>
        </Show>
    }
}
