use dioxus::prelude::*;

mod auth;
mod browser_store;
mod components;
mod config;
mod delay;
mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const APP_STYLES: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let auth = use_context_provider(AuthState::new);

    // Boot check: pull the saved user out of local storage once.
    use_hook(move || {
        spawn(async move {
            auth.restore().await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: APP_STYLES }
        document::Title { "Auction Admin Dashboard" }

        Router::<Route> {}
    }
}
