use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::PanelConfig;
use ui::views::Generator;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Generator {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Images are served by the same origin as the page.
    let config = use_context_provider(PanelConfig::for_page);
    use_hook(|| tracing::info!(endpoint = %config.endpoint_base, "previews resolve against endpoint"));
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Stats Cards" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Generator {}, {ui::i18n::tr_nav_generator()} }
        }
        Outlet::<Route> {}
    }
}
