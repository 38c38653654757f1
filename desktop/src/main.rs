#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::ApiConfig;
use ui::components::AppNavbar;
use ui::views::{use_dashboard_context, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme embedded; desktop ships no separate assets.

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("failed to init logger");
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!(
                        "Chemical Equipment Visualizer – v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_dashboard_context(ApiConfig::from_env);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Desktop-specific layout wrapping the shared navbar, so links can use this crate's `Route`.
#[component]
fn DesktopNavbar() -> Element {
    let label = ui::i18n::tr_nav_dashboard();
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" }
        }

        Outlet::<Route> {}
    }
}
