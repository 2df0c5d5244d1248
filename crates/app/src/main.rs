use client::ApiClient;
use dioxus::prelude::*;
use shared_types::ApiConfig;

mod auth;
mod icons;
mod nav;
mod permission;
mod routes;
use auth::AuthState;
use nav::MenuExpansion;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// API settings for this platform. Web builds cannot read `config.toml`, so
/// they take the compile-time settings.
fn api_config() -> ApiConfig {
    #[cfg(target_arch = "wasm32")]
    {
        client::config::build_time_api_config()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        client::config::load_config().api.clone()
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(api_config()));
    use_context_provider(AuthState::new);
    use_context_provider(MenuExpansion::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
