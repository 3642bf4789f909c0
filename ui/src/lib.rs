//! Shared UI crate for the stats cards generator. Everything except the
//! platform launchers lives here.

pub mod catalog;
pub mod core;
pub mod dropdown;
pub mod i18n;
pub mod preview;
pub mod share;
pub mod state;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod fields;
    pub use fields::{CategoryPanel, CheckboxField, TextField};

    mod share_panel;
    pub use share_panel::SharePanel;

    mod toast_host;
    pub use toast_host::ToastHost;
}

use dioxus::prelude::*;

/// Shared stylesheet for every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
