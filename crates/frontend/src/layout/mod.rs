pub mod footer;
pub mod header;

use leptos::prelude::*;

use footer::Footer;
use header::Navbar;

/// Page chrome shared by every route
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar />
            <main class="container">{children()}</main>
            <Footer />
        </div>
    }
}
