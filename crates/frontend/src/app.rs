use crate::routes::routes::AppRoutes;
use crate::shared::locale::provide_locale_settings;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_locale_settings();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
