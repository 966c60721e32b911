use contracts::shared::video::{youtube_embed_url, youtube_video_id};
use leptos::prelude::*;

/// YouTube player for `url`; renders nothing for unrecognized links
#[component]
pub fn VideoEmbed(#[prop(into)] url: String, #[prop(into)] heading: Signal<String>) -> impl IntoView {
    youtube_video_id(&url).map(|id| {
        view! {
            <section class="recipe-video">
                <h2 class="recipe-video__title">{move || heading.get()}</h2>
                <div class="recipe-video__frame">
                    <iframe
                        src=youtube_embed_url(&id)
                        title="YouTube video player"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </section>
        }
    })
}
