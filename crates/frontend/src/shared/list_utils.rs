use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the filter update
const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Signal<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());

    // replacing the pending timeout drops and cancels it
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debounce.set_value(Some(Timeout::new(DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" data-testid="search-input">
            <input
                type="text"
                class=move || if value.get().is_empty() { "search-input__field" } else { "search-input__field search-input__field--active" }
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    "×"
                </button>
            </Show>
        </div>
    }
}
