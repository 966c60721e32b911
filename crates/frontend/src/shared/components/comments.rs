use leptos::prelude::*;

/// Placeholder comments; there is no comment backend
const COMMENTS: [(&str, &str); 2] = [
    ("Foodie Fan", "This looks delicious! Can't wait to try it."),
    ("Chef John", "Great recipe. I added a bit more salt and it was perfect."),
];

#[component]
pub fn Comments(#[prop(into)] heading: Signal<String>) -> impl IntoView {
    view! {
        <div class="comments" data-testid="comments-list">
            <h3 class="comments__title">{move || heading.get()}</h3>
            {COMMENTS
                .iter()
                .map(|(author, text)| view! {
                    <div class="comments__item">
                        <p class="comments__author">{*author}</p>
                        <p class="comments__text">{*text}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
