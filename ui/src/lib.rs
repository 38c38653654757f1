//! Shared UI crate for the equipment visualizer. Components, the client state machine
//! and localization live here; the `web` and `desktop` crates only add an entry point.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod state;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
