use api::ApiConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{use_dashboard_context, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar writes it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_dashboard_context(ApiConfig::from_env);

    rsx! {
        document::Title { "Chemical Equipment Visualizer" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so every localized string is rebuilt on change.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web-specific layout wrapping the shared navbar, so links can use this crate's `Route`.
#[component]
fn WebNavbar() -> Element {
    let label = ui::i18n::tr_nav_dashboard();
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" }
        }
        Outlet::<Route> {}
    }
}
