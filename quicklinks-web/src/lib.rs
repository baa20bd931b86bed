//! quicklinks-web - Browser build of the quick links dashboard
//!
//! Binds the pure Link Store to `window.localStorage` and mounts the
//! dashboard page.

pub mod pages;
pub mod storage;
pub mod theme;

use dioxus::prelude::*;
use pages::Dashboard;
use quicklinks_common::LinksConfig;

pub const FAVICON: Asset = asset!("/assets/link.svg");
pub const LINK_ICON: Asset = asset!("/assets/link.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
}

/// Config for the browser build: defaults, with the fallback icon pointing
/// at the bundled asset
pub fn web_config() -> LinksConfig {
    LinksConfig {
        fallback_icon: LINK_ICON.to_string(),
        ..LinksConfig::default()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(web_config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
